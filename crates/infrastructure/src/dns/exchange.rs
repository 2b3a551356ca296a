use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;
use world_dns_application::ports::{DnsExchange, ExchangeResponse};
use world_dns_domain::{DnsQuery, DomainError, ResolverEndpoint};

/// `DnsExchange` backed by hickory-proto messages over plain DNS.
///
/// Queries go out over UDP; a truncated reply is retried over TCP with
/// whatever is left of the time budget.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryExchange;

impl HickoryExchange {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsExchange for HickoryExchange {
    async fn exchange(
        &self,
        query: &DnsQuery,
        endpoint: &ResolverEndpoint,
        timeout: Duration,
    ) -> Result<ExchangeResponse, DomainError> {
        let start = Instant::now();
        let server_addr = endpoint.socket_addr()?;
        let (id, message_bytes) = MessageBuilder::build_query_with_id(query)?;

        let response = send_and_parse(
            &Transport::udp(server_addr),
            id,
            &message_bytes,
            timeout,
            server_addr,
        )
        .await?;

        let response = if response.truncated {
            let remaining = timeout.saturating_sub(start.elapsed());
            if remaining.is_zero() {
                return Err(DomainError::TransportTimeout {
                    server: server_addr.to_string(),
                });
            }
            debug!(server = %server_addr, "Truncated UDP reply, retrying over TCP");
            send_and_parse(
                &Transport::tcp(server_addr),
                id,
                &message_bytes,
                remaining,
                server_addr,
            )
            .await?
        } else {
            response
        };

        Ok(ExchangeResponse::new(response.answers, start.elapsed()))
    }
}

/// One query over DNS-over-TLS (RFC 7858), outside the fan-out.
///
/// `server_name` is checked against the server certificate.
#[cfg(feature = "dns-over-rustls")]
pub async fn query_over_tls(
    query: &DnsQuery,
    server_addr: SocketAddr,
    server_name: &str,
    timeout: Duration,
) -> Result<ExchangeResponse, DomainError> {
    let start = Instant::now();
    let (id, message_bytes) = MessageBuilder::build_query_with_id(query)?;

    let response = send_and_parse(
        &Transport::tls(server_addr, server_name),
        id,
        &message_bytes,
        timeout,
        server_addr,
    )
    .await?;

    Ok(ExchangeResponse::new(response.answers, start.elapsed()))
}

async fn send_and_parse(
    transport: &Transport,
    id: u16,
    message_bytes: &[u8],
    timeout: Duration,
    server_addr: SocketAddr,
) -> Result<DnsResponse, DomainError> {
    let raw = transport.send(message_bytes, timeout).await?;
    let response = ResponseParser::parse(&raw.bytes)?;

    if response.id != id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "{} reply from {} has id {}, expected {}",
            raw.protocol_used, server_addr, response.id, id
        )));
    }

    debug!(
        server = %server_addr,
        protocol = transport.protocol_name(),
        status = ResponseParser::rcode_to_status(response.rcode),
        answers = response.answers.len(),
        "Exchange completed"
    );

    Ok(response)
}
