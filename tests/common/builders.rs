use serde_json::json;

/// Helper to create a basic task JSON body
pub fn task_json(description: &str, completed: bool) -> serde_json::Value {
    json!({
        "description": description,
        "completed": completed,
    })
}

/// Helper to create a task JSON body with an owning user link
pub fn task_json_for_user(description: &str, completed: bool, user_uuid: &str) -> serde_json::Value {
    json!({
        "description": description,
        "completed": completed,
        "user_uuid": user_uuid,
    })
}
