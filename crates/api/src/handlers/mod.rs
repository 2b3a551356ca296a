pub mod catalog;
pub mod debug;
pub mod health;
pub mod lookup;

pub use catalog::{get_dns_servers, get_dns_types};
pub use debug::get_debug;
pub use health::health_check;
pub use lookup::lookup;
