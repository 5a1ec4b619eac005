use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::Task;
use crate::{dtos, validation};

use super::AppState;

#[utoipa::path(
    get,
    path = "/task",
    summary = "Reads task list",
    description = "Reads the whole task list, optionally filtered by completion state.",
    params(dtos::CompletionFilter),
    responses(
        (status = 200, description = "Map of task id to task"),
        (status = 422, description = "The completed query parameter is not a boolean"),
    ),
    tag = "task"
)]
/// List tasks, optionally filtered by completion state
pub async fn list_tasks(
    state: web::Data<AppState>,
    filter: web::Query<dtos::CompletionFilter>,
) -> HttpResponse {
    let tasks = match filter.completed {
        None => state.tasks.list_all(),
        Some(completed) => state.tasks.list_by_completion(completed),
    };
    HttpResponse::Ok().json(tasks)
}

#[utoipa::path(
    post,
    path = "/task",
    summary = "Creates a new task",
    description = "Creates a new task and returns its UUID.",
    request_body = Task,
    responses(
        (status = 200, description = "The generated task UUID", body = Uuid),
        (status = 422, description = "Schema violation in the request body"),
    ),
    tag = "task"
)]
/// Create a new task and return its generated id
pub async fn create_task(
    state: web::Data<AppState>,
    form: web::Json<Task>,
) -> ApiResult<HttpResponse> {
    validation::validate_task(&form).map_err(ApiError::Validation)?;

    let id = state.tasks.create(Uuid::new_v4(), form.into_inner());
    log::debug!("created task {}", id);
    Ok(HttpResponse::Ok().json(id))
}

#[utoipa::path(
    get,
    path = "/task/{task_id}",
    summary = "Reads task",
    description = "Reads task from UUID.",
    params(("task_id" = Uuid, Path, description = "The UUID of the task")),
    responses(
        (status = 200, description = "The stored task", body = Task),
        (status = 404, description = "Task not found"),
        (status = 422, description = "Malformed task UUID"),
    ),
    tag = "task"
)]
/// Get a task by id
pub async fn get_task(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let task = state
        .tasks
        .read(*task_id)
        .map_err(|_| ApiError::TaskNotFound)?;
    Ok(HttpResponse::Ok().json(task))
}

#[utoipa::path(
    put,
    path = "/task/{task_id}",
    summary = "Replaces a task",
    description = "Replaces a task identified by its UUID. The whole record is overwritten; absent body fields fall back to their defaults.",
    params(("task_id" = Uuid, Path, description = "The UUID of the task")),
    request_body = Task,
    responses(
        (status = 200, description = "Task replaced"),
        (status = 404, description = "Task not found"),
        (status = 422, description = "Malformed task UUID or schema violation"),
    ),
    tag = "task"
)]
/// Replace a task wholesale
pub async fn replace_task(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
    form: web::Json<Task>,
) -> ApiResult<HttpResponse> {
    validation::validate_task(&form).map_err(ApiError::Validation)?;

    state
        .tasks
        .replace(*task_id, form.into_inner())
        .map_err(|_| ApiError::TaskNotFound)?;
    Ok(HttpResponse::Ok().finish())
}

#[utoipa::path(
    patch,
    path = "/task/{task_id}",
    summary = "Alters task",
    description = "Alters a task identified by its UUID. Only fields present in the body overwrite the stored record.",
    params(("task_id" = Uuid, Path, description = "The UUID of the task")),
    request_body = dtos::TaskPatch,
    responses(
        (status = 200, description = "Task updated"),
        (status = 404, description = "Task not found"),
        (status = 422, description = "Malformed task UUID or schema violation"),
    ),
    tag = "task"
)]
/// Partially update a task
pub async fn patch_task(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
    form: web::Json<dtos::TaskPatch>,
) -> ApiResult<HttpResponse> {
    validation::validate_task_patch(&form).map_err(ApiError::Validation)?;

    state
        .tasks
        .partial_update(*task_id, form.into_inner())
        .map_err(|_| ApiError::TaskNotFound)?;
    Ok(HttpResponse::Ok().finish())
}

#[utoipa::path(
    delete,
    path = "/task/{task_id}",
    summary = "Deletes task",
    description = "Deletes a task identified by its UUID.",
    params(("task_id" = Uuid, Path, description = "The UUID of the task")),
    responses(
        (status = 200, description = "Task deleted"),
        (status = 404, description = "Task not found"),
        (status = 422, description = "Malformed task UUID"),
    ),
    tag = "task"
)]
/// Delete a task
pub async fn delete_task(
    state: web::Data<AppState>,
    task_id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state
        .tasks
        .delete(*task_id)
        .map_err(|_| ApiError::TaskNotFound)?;
    log::debug!("deleted task {}", task_id);
    Ok(HttpResponse::Ok().finish())
}
