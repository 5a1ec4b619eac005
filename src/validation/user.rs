use crate::models::User;

use super::{ValidationError, ValidationResult};

/// Maximum length of a user name, in characters.
pub const MAX_NAME_LENGTH: usize = 64;

/// Validate a user body (POST).
pub fn validate_user(user: &User) -> ValidationResult {
    if user.name.chars().count() > MAX_NAME_LENGTH {
        return Err(vec![ValidationError::body_field(
            "name",
            format!("ensure this value has at most {} characters", MAX_NAME_LENGTH),
            "value_error.any_str.max_length",
        )]);
    }
    Ok(())
}
