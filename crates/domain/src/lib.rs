//! world-dns Domain Layer
pub mod config;
pub mod deployment;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod lookup;
pub mod resolver;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use deployment::{DeploymentInfo, LocationMetadata};
pub use dns_query::DnsQuery;
pub use dns_record::{AnswerData, AnswerRecord, RecordType};
pub use errors::{DomainError, QueryError};
pub use lookup::{LookupAggregate, ResolverOutcome};
pub use resolver::ResolverEndpoint;
