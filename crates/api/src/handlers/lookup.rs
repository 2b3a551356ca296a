use crate::dto::{LookupParams, LookupResponse};
use crate::state::AppState;
use crate::utils::json_response;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};
use world_dns_domain::DnsQuery;

#[instrument(skip(state), name = "api_lookup")]
pub async fn lookup(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = LookupParams::from_pairs(pairs);
    let question = match DnsQuery::parse(params.domain.as_deref(), params.record_type.as_deref()) {
        Ok(question) => question,
        Err(e) => {
            debug!(error = %e, "Rejected lookup request");
            return (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameters: {}", e),
            )
                .into_response();
        }
    };

    let aggregate = state
        .lookup
        .execute(&question, state.list_resolvers.execute(), state.query_timeout)
        .await;

    json_response(&LookupResponse::from(&aggregate))
}
