use crate::dtos::TaskPatch;
use crate::models::Task;

use super::{ValidationError, ValidationResult};

/// Maximum length of a task description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Maximum length of the advisory user link, in characters.
const MAX_USER_UUID_LENGTH: usize = 1024;

fn check_length(field: &str, value: &str, max: usize, errors: &mut Vec<ValidationError>) {
    if value.chars().count() > max {
        errors.push(ValidationError::body_field(
            field,
            format!("ensure this value has at most {} characters", max),
            "value_error.any_str.max_length",
        ));
    }
}

/// Validate a full task body (POST and PUT).
pub fn validate_task(task: &Task) -> ValidationResult {
    let mut errors = Vec::new();

    check_length(
        "description",
        &task.description,
        MAX_DESCRIPTION_LENGTH,
        &mut errors,
    );
    if let Some(user_uuid) = &task.user_uuid {
        check_length("user_uuid", user_uuid, MAX_USER_UUID_LENGTH, &mut errors);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a partial update body (PATCH). Only supplied fields are checked.
pub fn validate_task_patch(patch: &TaskPatch) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(description) = &patch.description {
        check_length(
            "description",
            description,
            MAX_DESCRIPTION_LENGTH,
            &mut errors,
        );
    }
    // Some(None) is an explicit null clearing the link; nothing to check.
    if let Some(Some(user_uuid)) = &patch.user_uuid {
        check_length("user_uuid", user_uuid, MAX_USER_UUID_LENGTH, &mut errors);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
