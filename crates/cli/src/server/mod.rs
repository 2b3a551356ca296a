pub mod shutdown;
pub mod web;

pub use shutdown::spawn_signal_handler;
pub use web::start_web_server;
