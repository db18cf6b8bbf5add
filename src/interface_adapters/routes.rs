use crate::interface_adapters::handlers::echo::echo;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

// Build the HTTP router for the echo API.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/echo", get(echo))
        .with_state(state)
}
