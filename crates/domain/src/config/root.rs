use super::{ConfigError, DnsConfig, LoggingConfig, ServerConfig};
use crate::validators::{validate_resolver_address, validate_resolver_name};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Root configuration, loaded from TOML with every field defaulted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub query_timeout: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `config_path` (or defaults when `None`) and applies CLI overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path_str,
            source,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.dns.query_timeout = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "dns.query_timeout must be greater than 0".to_string(),
            ));
        }

        self.server
            .listen_address()
            .parse::<SocketAddr>()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "invalid listen address {}: {}",
                    self.server.listen_address(),
                    e
                ))
            })?;

        for resolver in &self.dns.resolvers {
            validate_resolver_name(&resolver.name).map_err(ConfigError::Validation)?;
            validate_resolver_address(&resolver.address, resolver.port).map_err(|e| {
                ConfigError::Validation(format!("resolver '{}': {}", resolver.name, e))
            })?;
        }

        Ok(())
    }
}
