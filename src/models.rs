use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_description() -> String {
    "no description".to_string()
}

fn default_name() -> String {
    "no name".to_string()
}

/// A to-do item. Both fields are optional on input; defaults are applied
/// when absent. Unknown fields are rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// Task description, max 1024 characters.
    #[serde(default = "default_description")]
    #[schema(example = "Buy baby diapers", max_length = 1024)]
    pub description: String,

    /// Shows whether the task was completed.
    #[serde(default)]
    pub completed: bool,

    /// Advisory link to an owning user. Not checked against the user store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_uuid: Option<String>,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            description: default_description(),
            completed: false,
            user_uuid: None,
        }
    }
}

/// A user who may own tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Display name, max 64 characters.
    #[serde(default = "default_name")]
    #[schema(example = "Beatriz Mie", max_length = 64)]
    pub name: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}
