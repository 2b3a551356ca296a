//! # world-dns
//!
//! Asks one DNS question of many public resolvers at once and reports every
//! answer side by side.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use world_dns_api::DrainState;
use world_dns_domain::{CliOverrides, DeploymentInfo};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const COMMIT: &str = match option_env!("WORLD_DNS_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};

const BUILD_DATE: &str = match option_env!("WORLD_DNS_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

#[derive(Parser)]
#[command(name = "world-dns")]
#[command(version)]
#[command(about = "Fan one DNS question out to many public resolvers")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Per-resolver query timeout in milliseconds
    #[arg(short = 't', long)]
    query_timeout: Option<u64>,

    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

fn version_string() -> String {
    format!("{} (built {})", COMMIT, BUILD_DATE)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        web_port: cli.port,
        query_timeout: cli.query_timeout,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config.logging)?;
    bootstrap::log_config_summary(cli.config.as_deref(), &config);

    let hostname = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_default();
    let deployment = DeploymentInfo::from_env(version_string(), hostname);

    info!(
        version = %deployment.version,
        location = %deployment.location,
        region = %deployment.region,
        country = %deployment.country,
        "world-dns starting"
    );

    let drain = Arc::new(DrainState::new());
    let shutdown = CancellationToken::new();

    let state = di::UseCases::new(&config, &deployment).into_app_state(
        &config,
        deployment,
        Arc::clone(&drain),
    );

    server::spawn_signal_handler(drain, shutdown.clone());
    server::start_web_server(&config.server, state, shutdown).await?;

    info!("Shutdown complete");
    Ok(())
}
