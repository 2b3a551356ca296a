use serde::Serialize;
use world_dns_domain::ResolverEndpoint;

/// Roster entry as published on `/dns_servers` (capitalized keys).
#[derive(Serialize, Debug, Clone)]
pub struct DnsServerResponse {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Port")]
    pub port: u16,
}

impl From<&ResolverEndpoint> for DnsServerResponse {
    fn from(endpoint: &ResolverEndpoint) -> Self {
        Self {
            name: endpoint.name.clone(),
            address: endpoint.address.clone(),
            port: endpoint.port,
        }
    }
}
