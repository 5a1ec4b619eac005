use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use uuid::Uuid;

/// POST /task with the given body, assert 200, return the generated id.
pub async fn create_task_ok<S, B>(app: &S, body: &serde_json::Value) -> Uuid
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::post()
        .uri("/task")
        .set_json(body)
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "POST /task should return 200 OK"
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /task/{id}, assert 200, return the deserialized body.
pub async fn get_task_ok<S, B>(app: &S, task_id: Uuid) -> serde_json::Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/task/{}", task_id))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "GET /task/{} should return 200 OK",
        task_id
    );
    actix_web::test::read_body_json(resp).await
}

/// POST /user with the given body, assert 200, return the generated id.
pub async fn create_user_ok<S, B>(app: &S, body: &serde_json::Value) -> Uuid
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::post()
        .uri("/user")
        .set_json(body)
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "POST /user should return 200 OK"
    );
    actix_web::test::read_body_json(resp).await
}

/// Assert a 404 response whose body is `{"detail": <message>}`.
pub async fn assert_not_found<B: MessageBody>(resp: ServiceResponse<B>, message: &str) {
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "detail": message }));
}

/// Assert a 422 response carrying a non-empty `detail` array.
pub async fn assert_validation_error<B: MessageBody>(resp: ServiceResponse<B>) -> serde_json::Value {
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    let detail = body
        .get("detail")
        .and_then(|d| d.as_array())
        .expect("422 body should carry a detail array");
    assert!(!detail.is_empty(), "detail array should not be empty");
    body
}
