use std::sync::Arc;
use world_dns_api::{AppState, DrainState};
use world_dns_application::ports::DnsExchange;
use world_dns_application::use_cases::{
    ListRecordTypesUseCase, ListResolversUseCase, LookupUseCase,
};
use world_dns_domain::{Config, DeploymentInfo, ResolverEndpoint};
use world_dns_infrastructure::dns::HickoryExchange;

pub struct UseCases {
    pub lookup: Arc<LookupUseCase>,
    pub list_resolvers: Arc<ListResolversUseCase>,
    pub list_record_types: Arc<ListRecordTypesUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, deployment: &DeploymentInfo) -> Self {
        Self::with_exchange(config, deployment, Arc::new(HickoryExchange::new()))
    }

    pub fn with_exchange(
        config: &Config,
        deployment: &DeploymentInfo,
        exchange: Arc<dyn DnsExchange>,
    ) -> Self {
        let roster: Arc<[ResolverEndpoint]> = Arc::from(config.dns.resolvers.clone());

        Self {
            lookup: Arc::new(
                LookupUseCase::new(exchange, deployment.location_metadata())
                    .with_sorted_answers(config.dns.sort_answers),
            ),
            list_resolvers: Arc::new(ListResolversUseCase::new(roster)),
            list_record_types: Arc::new(ListRecordTypesUseCase::new()),
        }
    }

    pub fn into_app_state(
        self,
        config: &Config,
        deployment: DeploymentInfo,
        drain: Arc<DrainState>,
    ) -> AppState {
        AppState {
            lookup: self.lookup,
            list_resolvers: self.list_resolvers,
            list_record_types: self.list_record_types,
            query_timeout: config.dns.query_timeout(),
            drain,
            deployment: Arc::new(deployment),
        }
    }
}
