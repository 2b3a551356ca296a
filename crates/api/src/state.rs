use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use world_dns_application::use_cases::{
    ListRecordTypesUseCase, ListResolversUseCase, LookupUseCase,
};
use world_dns_domain::DeploymentInfo;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupUseCase>,
    pub list_resolvers: Arc<ListResolversUseCase>,
    pub list_record_types: Arc<ListRecordTypesUseCase>,
    pub query_timeout: Duration,
    pub drain: Arc<DrainState>,
    pub deployment: Arc<DeploymentInfo>,
}

/// Process-wide flag flipped once shutdown begins; health checks read it.
#[derive(Debug, Default)]
pub struct DrainState {
    draining: AtomicBool,
}

impl DrainState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the call that started draining.
    pub fn begin(&self) -> bool {
        !self.draining.swap(true, Ordering::SeqCst)
    }

    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::SeqCst)
    }
}
