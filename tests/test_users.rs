#[macro_use]
mod common;
use common::*;

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use serde_json::json;

#[tokio::test]
async fn test_create_and_read_user_roundtrip() {
    let state = test_state();
    let app = test_service!(state);

    let id = create_user_ok(&app, &json!({"name": "Beatriz Mie"})).await;

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/user/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: serde_json::Value = read_body_json(resp).await;
    assert_eq!(user, json!({"name": "Beatriz Mie"}));
}

#[tokio::test]
async fn test_create_user_applies_default_name() {
    let state = test_state();
    let app = test_service!(state);

    let id = create_user_ok(&app, &json!({})).await;

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/user/{}", id))
            .to_request(),
    )
    .await;
    let user: serde_json::Value = read_body_json(resp).await;
    assert_eq!(user, json!({"name": "no name"}));
}

#[tokio::test]
async fn test_get_unknown_user_returns_404() {
    let state = test_state();
    let app = test_service!(state);

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/user/{}", uuid::Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_not_found(resp, "User not found").await;
}

#[tokio::test]
async fn test_list_users_returns_map() {
    let state = test_state();
    let app = test_service!(state);

    let id = create_user_ok(&app, &json!({"name": "solo"})).await;

    let resp = call_service(&app, TestRequest::get().uri("/user").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let users: serde_json::Value = read_body_json(resp).await;
    assert_eq!(users[id.to_string()], json!({"name": "solo"}));
}

#[tokio::test]
async fn test_delete_user_then_get_returns_404() {
    let state = test_state();
    let app = test_service!(state);

    let id = create_user_ok(&app, &json!({})).await;

    let resp = call_service(
        &app,
        TestRequest::delete()
            .uri(&format!("/user/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/user/{}", id))
            .to_request(),
    )
    .await;
    assert_not_found(resp, "User not found").await;
}

#[tokio::test]
async fn test_deleting_a_user_leaves_linked_tasks_alone() {
    let state = test_state();
    let app = test_service!(state);

    let user_id = create_user_ok(&app, &json!({"name": "owner"})).await;
    let task_id =
        create_task_ok(&app, &task_json_for_user("owned task", false, &user_id.to_string())).await;

    let resp = call_service(
        &app,
        TestRequest::delete()
            .uri(&format!("/user/{}", user_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // the relation is advisory only, the task survives with a dangling link
    let task = get_task_ok(&app, task_id).await;
    assert_eq!(task["user_uuid"], user_id.to_string());
}

#[tokio::test]
async fn test_task_user_link_roundtrips() {
    let state = test_state();
    let app = test_service!(state);

    let id = create_task_ok(&app, &task_json_for_user("linked", true, "1231233123")).await;

    let task = get_task_ok(&app, id).await;
    assert_eq!(
        task,
        json!({"description": "linked", "completed": true, "user_uuid": "1231233123"})
    );
}
