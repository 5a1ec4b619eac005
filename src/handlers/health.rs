use actix_web::{HttpResponse, web};

use super::AppState;

#[utoipa::path(
    get,
    path = "/health",
    summary = "Health check",
    description = "Returns the service status and current record counts. The stores are in-memory, so this cannot fail short of process death.",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "health"
)]
/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "tasks": state.tasks.len(),
        "users": state.users.len(),
    }))
}
