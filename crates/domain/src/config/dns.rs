use crate::resolver::{default_roster, ResolverEndpoint};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fan-out lookup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Per-resolver query timeout in milliseconds (default: 5000)
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Sort answers by resolver name instead of completion order
    #[serde(default)]
    pub sort_answers: bool,

    /// Resolvers queried by every lookup
    #[serde(default = "default_roster")]
    pub resolvers: Vec<ResolverEndpoint>,
}

impl DnsConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            query_timeout: default_query_timeout(),
            sort_answers: false,
            resolvers: default_roster(),
        }
    }
}

fn default_query_timeout() -> u64 {
    5000
}
