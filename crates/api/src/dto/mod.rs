pub mod catalog;
pub mod debug;
pub mod lookup;

pub use catalog::DnsServerResponse;
pub use debug::DebugResponse;
pub use lookup::{AnswerResponse, LookupParams, LookupResponse};
