// Shared application state for the HTTP handlers.
pub struct AppState {
    // Optional clamp applied to the parsed repetition count.
    pub max_repetitions: Option<i64>,
}
