pub mod json;

pub use json::{json_response, JSON_CONTENT_TYPE};
