mod macros;
pub mod record;
pub mod record_type;

pub use record::{AnswerData, AnswerRecord};
pub use record_type::RecordType;
