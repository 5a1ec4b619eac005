//! HTTP handlers for the task list endpoints.
//!
//! This module contains all handler functions plus the route configuration,
//! shared by the main application and the integration tests.

mod health;
pub mod response;
mod task;
mod user;

use std::sync::Arc;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::{TaskStore, UserStore};
use crate::{dtos, models};

// Re-export handlers for route configuration
pub use health::health_check;
pub use task::{create_task, delete_task, get_task, list_tasks, patch_task, replace_task};
pub use user::{create_user, delete_user, get_user, list_users};

/// Shared application state. Stores are constructed once at startup and
/// handed to every worker by reference.
#[derive(Clone, Default)]
pub struct AppState {
    pub tasks: Arc<TaskStore>,
    pub users: Arc<UserStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// OpenAPI Documentation
// =============================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        task::list_tasks,
        task::create_task,
        task::get_task,
        task::replace_task,
        task::patch_task,
        task::delete_task,
        user::list_users,
        user::create_user,
        user::get_user,
        user::delete_user,
    ),
    components(schemas(models::Task, models::User, dtos::TaskPatch)),
    tags(
        (name = "task", description = "Operations related to tasks."),
        (name = "user", description = "Operations related to users."),
        (name = "health", description = "Liveness probe."),
    ),
    info(
        title = "Task list",
        version = "0.1.0",
        description = "REST API for managing a task list, backed by an in-memory store.",
    )
)]
pub struct ApiDoc;

// =============================================================================
// Route Configuration
// =============================================================================

/// Configure all routes for the application, including the extractor error
/// handlers that turn malformed ids, bodies, and query params into 422s.
/// This can be used by both the main application and integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(response::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(response::path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(response::query_error_handler))
        .route("/health", web::get().to(health_check))
        .route("/task", web::get().to(list_tasks))
        .route("/task", web::post().to(create_task))
        .route("/task/{task_id}", web::get().to(get_task))
        .route("/task/{task_id}", web::put().to(replace_task))
        .route("/task/{task_id}", web::patch().to(patch_task))
        .route("/task/{task_id}", web::delete().to(delete_task))
        .route("/user", web::get().to(list_users))
        .route("/user", web::post().to(create_user))
        .route("/user/{user_id}", web::get().to(get_user))
        .route("/user/{user_id}", web::delete().to(delete_user))
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}
