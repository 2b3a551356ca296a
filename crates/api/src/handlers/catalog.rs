use crate::dto::DnsServerResponse;
use crate::state::AppState;
use crate::utils::json_response;
use axum::{extract::State, response::Response};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_dns_servers")]
pub async fn get_dns_servers(State(state): State<AppState>) -> Response {
    let servers: Vec<DnsServerResponse> = state
        .list_resolvers
        .execute()
        .iter()
        .map(DnsServerResponse::from)
        .collect();

    debug!(count = servers.len(), "Resolver roster listed");
    json_response(&servers)
}

#[instrument(skip(state), name = "api_get_dns_types")]
pub async fn get_dns_types(State(state): State<AppState>) -> Response {
    json_response(&*state.list_record_types.execute())
}
