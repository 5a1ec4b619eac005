//! Error types for the task list application.
//!
//! Store errors stay internal; API errors carry their own HTTP mapping so
//! that nothing propagates past the route boundary.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::validation::ValidationError;

/// Error type for store operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The identifier is not a key in the store.
    #[error("no entry for id {0}")]
    NotFound(uuid::Uuid),
}

/// Error type for API operations (converts to HTTP responses).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Task not found")]
    TaskNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Validation failed")]
    Validation(Vec<ValidationError>),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::TaskNotFound | ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(errors) => {
                let detail: Vec<_> = errors.iter().map(ValidationError::detail).collect();
                HttpResponse::UnprocessableEntity()
                    .json(serde_json::json!({ "detail": detail }))
            }
            _ => HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "detail": self.to_string() })),
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
