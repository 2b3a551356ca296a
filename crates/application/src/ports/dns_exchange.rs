use async_trait::async_trait;
use std::time::Duration;
use world_dns_domain::{AnswerRecord, DnsQuery, DomainError, ResolverEndpoint};

/// Answer section of one successful query/response exchange.
#[derive(Debug, Clone, Default)]
pub struct ExchangeResponse {
    pub records: Vec<AnswerRecord>,
    /// Round-trip time as measured by the transport.
    pub rtt: Duration,
}

impl ExchangeResponse {
    pub fn new(records: Vec<AnswerRecord>, rtt: Duration) -> Self {
        Self { records, rtt }
    }
}

/// Performs one DNS exchange against one resolver.
///
/// Implementations enforce `timeout` themselves and return
/// `DomainError::TransportTimeout` once it elapses.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(
        &self,
        query: &DnsQuery,
        endpoint: &ResolverEndpoint,
        timeout: Duration,
    ) -> Result<ExchangeResponse, DomainError>;
}
