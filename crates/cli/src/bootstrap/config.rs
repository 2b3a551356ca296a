use tracing::info;
use world_dns_domain::{CliOverrides, Config};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Call after `init_logging`; the subscriber is built from the loaded config.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        resolvers = config.dns.resolvers.len(),
        query_timeout_ms = config.dns.query_timeout,
        sort_answers = config.dns.sort_answers,
        "Configuration loaded"
    );
}
