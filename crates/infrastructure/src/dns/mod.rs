pub mod exchange;
pub mod forwarding;
pub mod transport;

pub use exchange::HickoryExchange;
#[cfg(feature = "dns-over-rustls")]
pub use exchange::query_over_tls;
