use crate::ports::DnsExchange;
use crate::services::AnswerNormalizer;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use world_dns_domain::{
    DnsQuery, DomainError, LocationMetadata, LookupAggregate, ResolverEndpoint, ResolverOutcome,
};

/// Completion event reported by one resolver task.
#[derive(Debug)]
pub enum ResolverEvent {
    Answered(ResolverOutcome),
    Failed {
        resolver: String,
        address: String,
        duration: Duration,
        error: DomainError,
    },
}

/// Per-lookup tally kept by the collector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupSummary {
    pub answered: usize,
    pub empty: usize,
    pub failed: usize,
}

/// Fans one question out to every resolver and aggregates the answers.
pub struct LookupUseCase {
    exchange: Arc<dyn DnsExchange>,
    location: LocationMetadata,
    sort_answers: bool,
}

impl LookupUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>, location: LocationMetadata) -> Self {
        Self {
            exchange,
            location,
            sort_answers: false,
        }
    }

    pub fn with_sorted_answers(mut self, sort_answers: bool) -> Self {
        self.sort_answers = sort_answers;
        self
    }

    /// Queries every roster entry concurrently and waits for all of them.
    ///
    /// Resolvers that fail are logged and left out of the report; resolvers
    /// with an empty answer are kept with no values.
    #[instrument(
        skip(self, question, roster),
        fields(domain = %question.domain, record_type = %question.record_type, resolvers = roster.len())
    )]
    pub async fn execute(
        &self,
        question: &DnsQuery,
        roster: Arc<[ResolverEndpoint]>,
        timeout: Duration,
    ) -> LookupAggregate {
        let (aggregate, summary) = self.execute_with_summary(question, roster, timeout).await;

        info!(
            answered = summary.answered,
            empty = summary.empty,
            failed = summary.failed,
            total_ms = aggregate.total_duration.as_millis() as u64,
            "Lookup completed"
        );

        aggregate
    }

    pub async fn execute_with_summary(
        &self,
        question: &DnsQuery,
        roster: Arc<[ResolverEndpoint]>,
        timeout: Duration,
    ) -> (LookupAggregate, LookupSummary) {
        let start = Instant::now();
        let mut aggregate =
            LookupAggregate::new(question.clone(), self.location.clone(), roster.len());
        let mut summary = LookupSummary::default();

        // Capacity covers every task, so sends never wait on the collector.
        let (tx, mut rx) = mpsc::channel(roster.len().max(1));
        let mut handles = Vec::with_capacity(roster.len());
        for index in 0..roster.len() {
            let roster = Arc::clone(&roster);
            let exchange = Arc::clone(&self.exchange);
            let question = question.clone();
            let tx = tx.clone();
            handles.push(tokio::spawn(async move {
                let event =
                    query_resolver(exchange.as_ref(), &question, &roster[index], timeout).await;
                let _ = tx.send(event).await;
            }));
        }
        drop(tx);

        // Barrier: the channel closes once every task has finished or panicked.
        while let Some(event) = rx.recv().await {
            match event {
                ResolverEvent::Answered(outcome) => {
                    if outcome.is_empty() {
                        summary.empty += 1;
                    } else {
                        summary.answered += 1;
                    }
                    aggregate.answers.push(outcome);
                }
                ResolverEvent::Failed {
                    resolver,
                    address,
                    duration,
                    error,
                } => {
                    summary.failed += 1;
                    warn!(
                        resolver = %resolver,
                        address = %address,
                        elapsed_ms = duration.as_millis() as u64,
                        error = %error,
                        "Resolver query failed"
                    );
                }
            }
        }

        for (index, handle) in handles.into_iter().enumerate() {
            if let Err(e) = handle.await {
                summary.failed += 1;
                error!(resolver = %roster[index].name, error = %e, "Resolver task panicked");
            }
        }

        if self.sort_answers {
            aggregate.sort_by_resolver();
        }
        aggregate.total_duration = start.elapsed();

        (aggregate, summary)
    }
}

async fn query_resolver(
    exchange: &dyn DnsExchange,
    question: &DnsQuery,
    endpoint: &ResolverEndpoint,
    timeout: Duration,
) -> ResolverEvent {
    let start = Instant::now();
    let result = exchange.exchange(question, endpoint, timeout).await;
    let duration = start.elapsed();

    match result {
        Ok(response) if response.records.is_empty() => {
            debug!(resolver = %endpoint.name, domain = %question.domain, "No answer found");
            ResolverEvent::Answered(ResolverOutcome::empty(
                endpoint.name.clone(),
                endpoint.address.clone(),
                duration,
            ))
        }
        Ok(response) => {
            debug!(
                resolver = %endpoint.name,
                records = response.records.len(),
                rtt_ms = response.rtt.as_millis() as u64,
                "Resolver answered"
            );
            ResolverEvent::Answered(ResolverOutcome {
                resolver_name: endpoint.name.clone(),
                resolver_address: endpoint.address.clone(),
                values: AnswerNormalizer::normalize_all(&response.records),
                ttl: response.records[0].ttl,
                duration,
            })
        }
        Err(error) => ResolverEvent::Failed {
            resolver: endpoint.name.clone(),
            address: endpoint.address.clone(),
            duration,
            error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExchangeResponse;
    use async_trait::async_trait;
    use world_dns_domain::{AnswerRecord, RecordType};

    struct FixedExchange;

    #[async_trait]
    impl DnsExchange for FixedExchange {
        async fn exchange(
            &self,
            _query: &DnsQuery,
            endpoint: &ResolverEndpoint,
            _timeout: Duration,
        ) -> Result<ExchangeResponse, DomainError> {
            match endpoint.address.as_str() {
                "192.0.2.1" => Ok(ExchangeResponse::new(
                    vec![
                        AnswerRecord::alias("edge.example.net.", 120),
                        AnswerRecord::presentation(
                            Some(RecordType::A),
                            "edge.example.net.\t30\tIN\tA\t198.51.100.7",
                            30,
                        ),
                    ],
                    Duration::from_millis(1),
                )),
                "192.0.2.2" => Ok(ExchangeResponse::default()),
                _ => Err(DomainError::TransportTimeout {
                    server: endpoint.address_string(),
                }),
            }
        }
    }

    fn roster() -> Arc<[ResolverEndpoint]> {
        Arc::from(vec![
            ResolverEndpoint::new("Answering", "192.0.2.1", 53),
            ResolverEndpoint::new("Empty", "192.0.2.2", 53),
            ResolverEndpoint::new("Broken", "192.0.2.3", 53),
        ])
    }

    #[tokio::test]
    async fn test_outcomes_follow_policy() {
        let use_case = LookupUseCase::new(Arc::new(FixedExchange), LocationMetadata::default())
            .with_sorted_answers(true);
        let question = DnsQuery::new("www.example.com.", RecordType::A);

        let (aggregate, summary) = use_case
            .execute_with_summary(&question, roster(), Duration::from_secs(1))
            .await;

        assert_eq!(
            summary,
            LookupSummary {
                answered: 1,
                empty: 1,
                failed: 1
            }
        );
        assert_eq!(aggregate.answers.len(), 2);

        let answering = &aggregate.answers[0];
        assert_eq!(answering.resolver_name, "Answering");
        assert_eq!(answering.values, vec!["edge.example.net.", "198.51.100.7"]);
        assert_eq!(answering.ttl, 120);

        let empty = &aggregate.answers[1];
        assert_eq!(empty.resolver_name, "Empty");
        assert!(empty.values.is_empty());
        assert_eq!(empty.ttl, 0);
    }

    #[tokio::test]
    async fn test_empty_roster() {
        let use_case = LookupUseCase::new(Arc::new(FixedExchange), LocationMetadata::default());
        let question = DnsQuery::new("example.com.", RecordType::A);

        let aggregate = use_case
            .execute(&question, Arc::from(Vec::new()), Duration::from_secs(1))
            .await;

        assert!(aggregate.answers.is_empty());
        assert_eq!(aggregate.question, question);
    }
}
