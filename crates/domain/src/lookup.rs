use crate::deployment::LocationMetadata;
use crate::dns_query::DnsQuery;
use std::time::Duration;

/// What one resolver answered for one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOutcome {
    pub resolver_name: String,
    pub resolver_address: String,
    /// Normalized answer values, in the order the resolver returned them.
    pub values: Vec<String>,
    /// TTL of the first record, 0 when the answer was empty.
    pub ttl: u32,
    pub duration: Duration,
}

impl ResolverOutcome {
    pub fn empty(
        resolver_name: impl Into<String>,
        resolver_address: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            resolver_name: resolver_name.into(),
            resolver_address: resolver_address.into(),
            values: Vec::new(),
            ttl: 0,
            duration,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Aggregated report of a fan-out lookup.
#[derive(Debug, Clone)]
pub struct LookupAggregate {
    pub question: DnsQuery,
    /// Outcomes in completion order unless sorted afterwards.
    pub answers: Vec<ResolverOutcome>,
    pub location: LocationMetadata,
    pub total_duration: Duration,
}

impl LookupAggregate {
    pub fn new(question: DnsQuery, location: LocationMetadata, capacity: usize) -> Self {
        Self {
            question,
            answers: Vec::with_capacity(capacity),
            location,
            total_duration: Duration::ZERO,
        }
    }

    pub fn record_type_name(&self) -> &'static str {
        self.question.record_type.as_str()
    }

    pub fn sort_by_resolver(&mut self) {
        self.answers
            .sort_by(|a, b| a.resolver_name.cmp(&b.resolver_name));
    }

    /// Slowest resolver that made it into the report.
    pub fn max_duration(&self) -> Duration {
        self.answers
            .iter()
            .map(|a| a.duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}
