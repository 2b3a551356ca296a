use serde::Serialize;
use std::time::Duration;
use world_dns_domain::{LookupAggregate, ResolverOutcome};

/// `domain` and `type` from the query string. A repeated key keeps its
/// first value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LookupParams {
    pub domain: Option<String>,
    pub record_type: Option<String>,
}

impl LookupParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "domain" => &mut params.domain,
                "type" => &mut params.record_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// One resolver's answer. Durations are nanoseconds.
#[derive(Serialize, Debug, Clone)]
pub struct AnswerResponse {
    pub server: String,
    pub values: Vec<String>,
    pub server_address: String,
    pub ttl: u32,
    pub duration: u64,
    pub duration_string: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct LookupResponse {
    pub question: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub answers: Vec<AnswerResponse>,
    pub location: String,
    pub region: String,
    pub country: String,
    pub total_duration: u64,
    pub total_duration_string: String,
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

impl From<&ResolverOutcome> for AnswerResponse {
    fn from(outcome: &ResolverOutcome) -> Self {
        Self {
            server: outcome.resolver_name.clone(),
            values: outcome.values.clone(),
            server_address: outcome.resolver_address.clone(),
            ttl: outcome.ttl,
            duration: nanos(outcome.duration),
            duration_string: format!("{:?}", outcome.duration),
        }
    }
}

impl From<&LookupAggregate> for LookupResponse {
    fn from(aggregate: &LookupAggregate) -> Self {
        Self {
            question: aggregate.question.domain.to_string(),
            record_type: aggregate.record_type_name().to_string(),
            answers: aggregate.answers.iter().map(AnswerResponse::from).collect(),
            location: aggregate.location.location.clone(),
            region: aggregate.location.region.clone(),
            country: aggregate.location.country.clone(),
            total_duration: nanos(aggregate.total_duration),
            total_duration_string: format!("{:?}", aggregate.total_duration),
        }
    }
}
