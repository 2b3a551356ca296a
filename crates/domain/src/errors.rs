use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid resolver address: {0}")]
    InvalidResolverAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query to {server} timed out")]
    TransportTimeout { server: String },

    #[error("Connection to {server} refused")]
    TransportConnectionRefused { server: String },

    #[error("Connection to {server} reset")]
    TransportConnectionReset { server: String },

    #[error("TLS error with {server}: {reason}")]
    TransportTls { server: String, reason: String },
}

impl DomainError {
    /// Maps an I/O failure talking to `server` onto the transport taxonomy.
    pub fn from_io(server: impl Into<String>, error: std::io::Error) -> Self {
        let server = server.into();
        match error.kind() {
            std::io::ErrorKind::TimedOut => DomainError::TransportTimeout { server },
            std::io::ErrorKind::ConnectionRefused => {
                DomainError::TransportConnectionRefused { server }
            }
            std::io::ErrorKind::ConnectionReset | std::io::ErrorKind::ConnectionAborted => {
                DomainError::TransportConnectionReset { server }
            }
            _ => DomainError::IoError(format!("{}: {}", server, error)),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::TransportTimeout { .. })
    }
}

/// Client input errors raised while parsing a lookup request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("missing '{0}' parameter in query")]
    MissingField(&'static str),

    #[error("invalid DNS type: {0}")]
    UnknownRecordType(String),

    #[error("invalid domain name: {0}")]
    InvalidDomain(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_query_error_messages() {
        assert_eq!(
            QueryError::MissingField("type").to_string(),
            "missing 'type' parameter in query"
        );
        assert_eq!(
            QueryError::MissingField("domain").to_string(),
            "missing 'domain' parameter in query"
        );
        assert_eq!(
            QueryError::UnknownRecordType("INVALID".into()).to_string(),
            "invalid DNS type: INVALID"
        );
    }

    #[test]
    fn test_from_io_maps_kinds() {
        let err = DomainError::from_io("1.1.1.1:53", Error::from(ErrorKind::TimedOut));
        assert!(err.is_timeout());

        let err = DomainError::from_io("1.1.1.1:53", Error::from(ErrorKind::ConnectionRefused));
        assert!(matches!(err, DomainError::TransportConnectionRefused { .. }));

        let err = DomainError::from_io("1.1.1.1:53", Error::from(ErrorKind::ConnectionReset));
        assert!(matches!(err, DomainError::TransportConnectionReset { .. }));

        let err = DomainError::from_io("1.1.1.1:53", Error::new(ErrorKind::Other, "boom"));
        assert_eq!(err.to_string(), "I/O error: 1.1.1.1:53: boom");
    }
}
