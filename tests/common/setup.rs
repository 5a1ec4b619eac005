use tasklist::handlers::AppState;

/// Fresh application state with empty stores. Each test gets its own, so
/// tests are isolated without any shared process-wide map.
pub fn test_state() -> AppState {
    AppState::new()
}
