//! CLI configuration
//!
//! Carries the credential, service endpoints and replication throttle
//! resolved from arguments and environment.

use std::time::Duration;

use ferry_client::Endpoints;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API key used for the token exchange
    pub api_key: String,
    /// Base URLs of the remote services
    pub endpoints: Endpoints,
    /// Pause after every create call, to stay under the remote rate limit
    pub throttle: Duration,
}

impl Config {
    /// Creates a configuration from resolved CLI values
    pub fn new(api_key: String, endpoints: Endpoints, throttle_secs: u64) -> Self {
        Self {
            api_key,
            endpoints,
            throttle: Duration::from_secs(throttle_secs),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("api key cannot be empty");
        }

        let urls = [
            &self.endpoints.iam_url,
            &self.endpoints.resource_controller_url,
            &self.endpoints.toolchain_url,
            &self.endpoints.pipeline_url,
        ];
        for url in urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("endpoint {} must start with http:// or https://", url);
            }
        }

        Ok(())
    }
}
