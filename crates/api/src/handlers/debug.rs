use crate::dto::DebugResponse;
use crate::state::AppState;
use crate::utils::json_response;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

#[derive(Deserialize, Debug, Default)]
pub struct DebugParams {
    pub format: Option<String>,
}

#[instrument(skip(state), name = "api_get_debug")]
pub async fn get_debug(State(state): State<AppState>, Query(params): Query<DebugParams>) -> Response {
    let body = DebugResponse::from(state.deployment.as_ref());

    match params.format.as_deref() {
        Some("text") => body.to_text().into_response(),
        _ => json_response(&body),
    }
}
