use super::RecordType;
use crate::errors::QueryError;
use crate::validators::validate_fqdn;
use std::sync::Arc;

/// Canonical DNS question (fully-qualified domain + record type).
/// Uses `Arc<str>` so every fan-out task can hold the name without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Builds a question from untrusted request parameters.
    ///
    /// Checks run in order: domain present, type present, type known, then
    /// the normalized domain is validated as an FQDN.
    pub fn parse(raw_domain: Option<&str>, raw_type: Option<&str>) -> Result<Self, QueryError> {
        let domain = raw_domain
            .filter(|d| !d.is_empty())
            .ok_or(QueryError::MissingField("domain"))?;

        let raw_type = raw_type
            .filter(|t| !t.is_empty())
            .ok_or(QueryError::MissingField("type"))?;

        let record_type = RecordType::from_mnemonic(raw_type)
            .ok_or_else(|| QueryError::UnknownRecordType(raw_type.to_string()))?;

        let fqdn = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{}.", domain)
        };

        validate_fqdn(&fqdn).map_err(QueryError::InvalidDomain)?;

        Ok(Self::new(fqdn, record_type))
    }
}
