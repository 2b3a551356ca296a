use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/lookup", get(handlers::lookup))
        .route("/dns_servers", get(handlers::get_dns_servers))
        .route("/dns_types", get(handlers::get_dns_types))
        .route("/health", get(handlers::health_check))
        .route("/debug", get(handlers::get_debug))
        .with_state(state)
}
