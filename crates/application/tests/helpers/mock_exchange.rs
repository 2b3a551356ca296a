#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use world_dns_application::ports::{DnsExchange, ExchangeResponse};
use world_dns_domain::{AnswerRecord, DnsQuery, DomainError, RecordType, ResolverEndpoint};

// ============================================================================
// Mock DnsExchange
// ============================================================================

#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Answers with `records` after `delay`.
    Answer {
        records: Vec<AnswerRecord>,
        delay: Duration,
    },
    /// Succeeds with an empty answer section after `delay`.
    Empty { delay: Duration },
    /// Fails with a connection refusal after `delay`.
    Fail { delay: Duration },
    /// Never answers; times out like a real transport would.
    Hang,
    /// Panics inside the resolver task.
    Panic,
}

impl MockBehavior {
    pub fn a_record(ip: &str, ttl: u32, delay: Duration) -> Self {
        MockBehavior::Answer {
            records: vec![AnswerRecord::presentation(
                Some(RecordType::A),
                format!("example.com.\t{}\tIN\tA\t{}", ttl, ip),
                ttl,
            )],
            delay,
        }
    }
}

/// Exchange whose behavior is chosen per resolver address.
pub struct MockDnsExchange {
    behaviors: HashMap<String, MockBehavior>,
    default: MockBehavior,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockDnsExchange {
    pub fn new(default: MockBehavior) -> Self {
        Self {
            behaviors: HashMap::new(),
            default,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Overrides the behavior for one resolver address.
    pub fn with_behavior(mut self, address: &str, behavior: MockBehavior) -> Self {
        self.behaviors.insert(address.to_string(), behavior);
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DnsExchange for MockDnsExchange {
    async fn exchange(
        &self,
        _query: &DnsQuery,
        endpoint: &ResolverEndpoint,
        timeout: Duration,
    ) -> Result<ExchangeResponse, DomainError> {
        let behavior = self
            .behaviors
            .get(&endpoint.address)
            .unwrap_or(&self.default)
            .clone();

        self.enter();
        let result = match behavior {
            MockBehavior::Answer { records, delay } => {
                tokio::time::sleep(delay).await;
                Ok(ExchangeResponse::new(records, delay))
            }
            MockBehavior::Empty { delay } => {
                tokio::time::sleep(delay).await;
                Ok(ExchangeResponse::new(Vec::new(), delay))
            }
            MockBehavior::Fail { delay } => {
                tokio::time::sleep(delay).await;
                Err(DomainError::TransportConnectionRefused {
                    server: endpoint.address_string(),
                })
            }
            MockBehavior::Hang => {
                tokio::time::sleep(timeout).await;
                Err(DomainError::TransportTimeout {
                    server: endpoint.address_string(),
                })
            }
            MockBehavior::Panic => {
                self.leave();
                panic!("mock exchange panicked for {}", endpoint);
            }
        };
        self.leave();
        result
    }
}
