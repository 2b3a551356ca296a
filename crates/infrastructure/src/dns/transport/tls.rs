use super::{exchange_framed, DnsTransport, TransportResponse};
use async_trait::async_trait;
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, RootCertStore};
use std::net::SocketAddr;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tracing::debug;
use world_dns_domain::DomainError;

/// Client config shared by every DoT query, trusting the webpki roots.
static SHARED_CONFIG: LazyLock<Arc<ClientConfig>> = LazyLock::new(|| {
    let root_store = RootCertStore {
        roots: webpki_roots::TLS_SERVER_ROOTS.to_vec(),
    };
    Arc::new(
        ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth(),
    )
});

/// DNS-over-TLS transport (RFC 7858).
pub struct TlsTransport {
    server_addr: SocketAddr,
    server_name: String,
}

impl TlsTransport {
    pub fn new(server_addr: SocketAddr, server_name: String) -> Self {
        Self {
            server_addr,
            server_name,
        }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let server = self.server_addr.to_string();

        let server_name = ServerName::try_from(self.server_name.clone()).map_err(|e| {
            DomainError::TransportTls {
                server: server.clone(),
                reason: format!("invalid server name '{}': {}", self.server_name, e),
            }
        })?;

        let tcp_stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| DomainError::from_io(server.as_str(), e))?;

        let connector = TlsConnector::from(Arc::clone(&SHARED_CONFIG));
        let mut tls_stream = connector
            .connect(server_name, tcp_stream)
            .await
            .map_err(|e| DomainError::TransportTls {
                server: server.clone(),
                reason: format!("handshake failed: {}", e),
            })?;

        debug!(
            server = %self.server_addr,
            server_name = %self.server_name,
            bytes = message_bytes.len(),
            "TLS query sent"
        );

        exchange_framed(&mut tls_stream, message_bytes, &server).await
    }
}

#[async_trait]
impl DnsTransport for TlsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })??;

        Ok(TransportResponse {
            bytes,
            protocol_used: "TLS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TLS"
    }
}
