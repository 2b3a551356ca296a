//! Deployment metadata sourced from the hosting environment.

pub const ENV_COUNTRY: &str = "CLOUDFLARE_COUNTRY_A2";
pub const ENV_LOCATION: &str = "CLOUDFLARE_LOCATION";
pub const ENV_REGION: &str = "CLOUDFLARE_REGION";
pub const ENV_APPLICATION_ID: &str = "CLOUDFLARE_APPLICATION_ID";
pub const ENV_DEPLOYMENT_ID: &str = "CLOUDFLARE_DEPLOYMENT_ID";
pub const ENV_NODE_ID: &str = "CLOUDFLARE_NODE_ID";

/// Where this instance runs; attached to every lookup report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationMetadata {
    pub location: String,
    pub region: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentInfo {
    pub version: String,
    pub app_id: String,
    pub region: String,
    pub location: String,
    pub country: String,
    pub deployment_id: String,
    pub node_id: String,
    pub hostname: String,
}

impl DeploymentInfo {
    /// Reads the process environment. Unset variables become empty strings.
    pub fn from_env(version: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self::from_lookup(version, hostname, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(version: impl Into<String>, hostname: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            version: version.into(),
            app_id: get(ENV_APPLICATION_ID),
            region: get(ENV_REGION),
            location: get(ENV_LOCATION),
            country: get(ENV_COUNTRY),
            deployment_id: get(ENV_DEPLOYMENT_ID),
            node_id: get(ENV_NODE_ID),
            hostname: hostname.into(),
        }
    }

    pub fn location_metadata(&self) -> LocationMetadata {
        LocationMetadata {
            location: self.location.clone(),
            region: self.region.clone(),
            country: self.country.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let env: HashMap<&str, &str> = [
            (ENV_COUNTRY, "US"),
            (ENV_LOCATION, "SFO"),
            (ENV_REGION, "NA"),
            (ENV_APPLICATION_ID, "app123"),
            (ENV_DEPLOYMENT_ID, "deploy789"),
            (ENV_NODE_ID, "node456"),
        ]
        .into_iter()
        .collect();

        let info = DeploymentInfo::from_lookup("abc (built today)", "host-1", |k| {
            env.get(k).map(|v| v.to_string())
        });

        assert_eq!(info.version, "abc (built today)");
        assert_eq!(info.country, "US");
        assert_eq!(info.location, "SFO");
        assert_eq!(info.region, "NA");
        assert_eq!(info.app_id, "app123");
        assert_eq!(info.deployment_id, "deploy789");
        assert_eq!(info.node_id, "node456");
        assert_eq!(info.hostname, "host-1");
    }

    #[test]
    fn test_missing_variables_are_empty() {
        let info = DeploymentInfo::from_lookup("v", "h", |_| None);
        assert_eq!(info.location_metadata(), LocationMetadata::default());
        assert!(info.app_id.is_empty());
    }
}
