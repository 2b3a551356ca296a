pub mod catalog;
pub mod lookup;

// Re-export use cases
pub use catalog::{ListRecordTypesUseCase, ListResolversUseCase};
pub use lookup::{LookupSummary, LookupUseCase, ResolverEvent};
