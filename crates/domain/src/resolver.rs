use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// One public DNS resolver queried by every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolverEndpoint {
    pub name: String,
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    53
}

impl ResolverEndpoint {
    pub fn new(name: impl Into<String>, address: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            port,
        }
    }

    /// `address:port`, with IPv6 addresses bracketed.
    pub fn address_string(&self) -> String {
        match self.address.parse::<IpAddr>() {
            Ok(IpAddr::V6(v6)) => format!("[{}]:{}", v6, self.port),
            _ => format!("{}:{}", self.address, self.port),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, DomainError> {
        let ip: IpAddr = self
            .address
            .parse()
            .map_err(|_| DomainError::InvalidResolverAddress(self.address.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl fmt::Display for ResolverEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address_string())
    }
}

/// Built-in roster of public resolvers.
pub fn default_roster() -> Vec<ResolverEndpoint> {
    [
        ("Cloudflare", "1.1.1.1"),
        ("Google", "8.8.8.8"),
        ("OpenDNS", "208.67.222.222"),
        ("Quad9", "9.9.9.9"),
        ("Oracle", "216.146.35.35"),
        ("WholeSale Internet", "204.12.225.227"),
        ("Fortinet", "208.91.112.53"),
        ("SkyDNS", "195.46.39.39"),
        ("Liquid Telecommunications Ltd", "5.11.11.5"),
        ("Tele2 Nederland B.V.", "87.213.100.113"),
        ("Completel SAS", "83.145.86.7"),
        ("Prioritytelecom Spain S.A", "212.230.255.1"),
        ("nemox.net", "83.137.41.9"),
        ("Universitaet Leipzig", "139.18.25.33"),
        ("Vogel Solucoes em Telecom e Informatica S/A", "189.126.192.4"),
        ("TT Dotcom Sdn Bhd", "211.25.206.147"),
        ("Telstra Internet", "139.130.4.4"),
        ("Global-Gateway Internet", "122.56.107.86"),
        ("DigitalOcean LLC", "139.59.219.245"),
        ("LG Dacom Corporation", "164.124.101.2"),
        ("Kappa Internet Services Private Limited", "115.178.96.2"),
        ("CMPak Limited", "209.150.154.1"),
        ("Daniel Cid", "185.228.168.9"),
        ("SS Online", "103.80.1.2"),
        ("Alternate DNS", "76.76.19.19"),
        ("CleanBrowsing", "185.228.168.9"),
        ("Comodo Secure", "8.26.56.26"),
        ("Comcast Xfinity DNS Servers", "75.75.75.75"),
    ]
    .into_iter()
    .map(|(name, address)| ResolverEndpoint::new(name, address, 53))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let server = ResolverEndpoint::new("TestServer", "127.0.0.1", 5353);
        assert_eq!(server.to_string(), "TestServer (127.0.0.1:5353)");
    }

    #[test]
    fn test_address_string() {
        let server = ResolverEndpoint::new("TestServer", "192.168.1.1", 53);
        assert_eq!(server.address_string(), "192.168.1.1:53");

        let v6 = ResolverEndpoint::new("V6", "2606:4700:4700::1111", 53);
        assert_eq!(v6.address_string(), "[2606:4700:4700::1111]:53");
    }

    #[test]
    fn test_socket_addr() {
        let server = ResolverEndpoint::new("Google", "8.8.8.8", 53);
        assert_eq!(
            server.socket_addr().unwrap(),
            "8.8.8.8:53".parse::<SocketAddr>().unwrap()
        );

        let bad = ResolverEndpoint::new("Bad", "dns.example", 53);
        assert!(matches!(
            bad.socket_addr(),
            Err(DomainError::InvalidResolverAddress(_))
        ));
    }

    #[test]
    fn test_default_roster() {
        let roster = default_roster();
        assert_eq!(roster.len(), 28);
        assert!(roster.iter().all(|r| r.port == 53));
        assert!(roster.iter().all(|r| r.socket_addr().is_ok()));
        assert_eq!(roster[0].name, "Cloudflare");
    }
}
