use crate::state::AppState;
use axum::{extract::State, http::StatusCode};
use tracing::debug;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.drain.is_draining() {
        debug!("Health check while draining");
        return (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable");
    }
    (StatusCode::OK, "ok")
}
