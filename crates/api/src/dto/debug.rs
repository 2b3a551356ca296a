use serde::Serialize;
use world_dns_domain::DeploymentInfo;

#[derive(Serialize, Debug, Clone)]
pub struct DebugResponse {
    pub version: String,
    pub app_id: String,
    pub region: String,
    pub location: String,
    pub country: String,
    pub deployment_id: String,
    pub node_id: String,
    pub hostname: String,
}

impl DebugResponse {
    pub fn to_text(&self) -> String {
        format!(
            "Hi, I'm a container running in {}, {}, which is part of {}\n\
             with the following build information:\n\
             Version: {}\n\
             App ID: {}\n\
             Deployment ID: {}\n\
             Cloudflare Node ID: {}\n\
             Hostname: {}\n",
            self.location,
            self.country,
            self.region,
            self.version,
            self.app_id,
            self.deployment_id,
            self.node_id,
            self.hostname
        )
    }
}

impl From<&DeploymentInfo> for DebugResponse {
    fn from(info: &DeploymentInfo) -> Self {
        Self {
            version: info.version.clone(),
            app_id: info.app_id.clone(),
            region: info.region.clone(),
            location: info.location.clone(),
            country: info.country.clone(),
            deployment_id: info.deployment_id.clone(),
            node_id: info.node_id.clone(),
            hostname: info.hostname.clone(),
        }
    }
}
