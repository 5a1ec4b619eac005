//! Input validation for task and user payloads.
//!
//! DTOs are validated at the route boundary before any store call; failures
//! surface as a 422 response with one entry per offending field.

mod task;
mod user;

pub use task::{MAX_DESCRIPTION_LENGTH, validate_task, validate_task_patch};
pub use user::{MAX_NAME_LENGTH, validate_user};

/// Validation error with details about what failed, in the shape the HTTP
/// layer renders: location path, message, and error kind.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub loc: Vec<String>,
    pub message: String,
    pub kind: String,
}

impl ValidationError {
    /// Error for a single body field.
    pub fn body_field(field: &str, message: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            message: message.into(),
            kind: kind.to_string(),
        }
    }

    /// Render as one entry of the 422 `detail` array.
    pub fn detail(&self) -> serde_json::Value {
        serde_json::json!({
            "loc": self.loc,
            "msg": self.message,
            "type": self.kind,
        })
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.message)
    }
}

/// Result of validation - either Ok or a list of errors.
pub type ValidationResult = Result<(), Vec<ValidationError>>;
