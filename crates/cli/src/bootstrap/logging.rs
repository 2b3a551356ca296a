use tracing::info;
use tracing_subscriber::EnvFilter;
use world_dns_domain::config::LoggingConfig;

/// `RUST_LOG` wins over `logging.level` when set.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.with_ansi(true).try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    info!(level = %config.level, json = config.json, "Logging initialized");
    Ok(())
}
