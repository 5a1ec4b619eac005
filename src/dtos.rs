//! Request DTOs for the HTTP layer.

use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

use crate::models::Task;

/// Deserialize a present field into `Some(value)`, so that an explicit
/// `null` (`Some(None)`) stays distinguishable from an omitted field
/// (`None` via the serde default).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Partial update for a task. Every field is optional so that an omitted
/// field can be told apart from one explicitly set to its default value;
/// only supplied fields overwrite the stored record.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TaskPatch {
    /// New description, max 1024 characters.
    #[schema(example = "Buy baby diapers", max_length = 1024)]
    pub description: Option<String>,

    /// New completion flag.
    pub completed: Option<bool>,

    /// New advisory user link. An explicit `null` clears the link; an
    /// omitted field leaves it untouched.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub user_uuid: Option<Option<String>>,
}

impl TaskPatch {
    /// Merge the supplied fields into `task`, leaving unset fields untouched.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(user_uuid) = self.user_uuid {
            task.user_uuid = user_uuid;
        }
    }
}

/// Completion filter for the task list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CompletionFilter {
    /// Absent returns every task; `true` only completed ones; `false` only
    /// incomplete ones.
    pub completed: Option<bool>,
}
