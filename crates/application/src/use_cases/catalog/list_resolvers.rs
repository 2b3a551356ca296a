use std::sync::Arc;
use world_dns_domain::ResolverEndpoint;

pub struct ListResolversUseCase {
    roster: Arc<[ResolverEndpoint]>,
}

impl ListResolversUseCase {
    pub fn new(roster: Arc<[ResolverEndpoint]>) -> Self {
        Self { roster }
    }

    /// The roster in configuration order.
    pub fn execute(&self) -> Arc<[ResolverEndpoint]> {
        Arc::clone(&self.roster)
    }
}
