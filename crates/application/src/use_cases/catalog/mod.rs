pub mod list_record_types;
pub mod list_resolvers;

pub use list_record_types::ListRecordTypesUseCase;
pub use list_resolvers::ListResolversUseCase;
