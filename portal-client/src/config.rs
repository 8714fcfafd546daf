use anyhow::Result;
use std::env;

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Runtime configuration for the portal client.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the remote API, without a trailing slash.
    pub api_base_url: String,
}

impl PortalConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_owned(),
        }
    }
}

/// Load configuration from the environment.
///
/// `PORTAL_API_URL` overrides the local default. No client-side request
/// timeout is configured; pending requests run until the transport resolves
/// them.
pub fn load_portal_config() -> Result<PortalConfig> {
    let api_base_url = env::var("PORTAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
    Ok(PortalConfig::new(api_base_url))
}
