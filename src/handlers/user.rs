use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::User;
use crate::validation;

use super::AppState;

#[utoipa::path(
    get,
    path = "/user",
    summary = "Reads user list",
    description = "Reads the whole user list.",
    responses(
        (status = 200, description = "Map of user id to user"),
    ),
    tag = "user"
)]
/// List users
pub async fn list_users(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.users.list_all())
}

#[utoipa::path(
    post,
    path = "/user",
    summary = "Creates a new user",
    description = "Creates a new user and returns its UUID.",
    request_body = User,
    responses(
        (status = 200, description = "The generated user UUID", body = Uuid),
        (status = 422, description = "Schema violation in the request body"),
    ),
    tag = "user"
)]
/// Create a new user and return its generated id
pub async fn create_user(
    state: web::Data<AppState>,
    form: web::Json<User>,
) -> ApiResult<HttpResponse> {
    validation::validate_user(&form).map_err(ApiError::Validation)?;

    let id = state.users.create(Uuid::new_v4(), form.into_inner());
    log::debug!("created user {}", id);
    Ok(HttpResponse::Ok().json(id))
}

#[utoipa::path(
    get,
    path = "/user/{user_id}",
    summary = "Reads user",
    description = "Reads user from UUID.",
    params(("user_id" = Uuid, Path, description = "The UUID of the user")),
    responses(
        (status = 200, description = "The stored user", body = User),
        (status = 404, description = "User not found"),
        (status = 422, description = "Malformed user UUID"),
    ),
    tag = "user"
)]
/// Get a user by id
pub async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users
        .read(*user_id)
        .map_err(|_| ApiError::UserNotFound)?;
    Ok(HttpResponse::Ok().json(user))
}

#[utoipa::path(
    delete,
    path = "/user/{user_id}",
    summary = "Deletes user",
    description = "Deletes a user identified by its UUID. Tasks pointing at the user are left untouched.",
    params(("user_id" = Uuid, Path, description = "The UUID of the user")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Malformed user UUID"),
    ),
    tag = "user"
)]
/// Delete a user
pub async fn delete_user(
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state
        .users
        .delete(*user_id)
        .map_err(|_| ApiError::UserNotFound)?;
    Ok(HttpResponse::Ok().finish())
}
