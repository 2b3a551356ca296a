pub mod fan_out;

pub use fan_out::{LookupSummary, LookupUseCase, ResolverEvent};
