//! Ferry HTTP Client
//!
//! A type-safe HTTP client for the cloud services the pipeline copier
//! talks to: the identity service (token exchange, API key details), the
//! resource controller (resource groups) and the regional toolchain and
//! delivery-pipeline services.
//!
//! The remote operations are exposed through two traits, [`CatalogApi`]
//! and [`PipelineConfigApi`], so the interactive workflow can run against
//! in-memory fakes in tests.
//!
//! # Example
//!
//! ```no_run
//! use ferry_client::{CatalogApi, CdClient, Endpoints};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ferry_client::ClientError> {
//!     let client = CdClient::connect(Endpoints::for_region("us-south"), "my-api-key").await?;
//!
//!     let account_id = client.account_id().await?;
//!     println!("connected to account {}", account_id);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
mod identity;
pub mod pipelines;

// Re-export commonly used types
pub use catalog::CatalogApi;
pub use error::{ClientError, Result};
pub use pipelines::PipelineConfigApi;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::service_message;

/// Base URLs of the remote services
///
/// The identity and resource-controller services are global; the toolchain
/// and delivery-pipeline services are regional.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub iam_url: String,
    pub resource_controller_url: String,
    pub toolchain_url: String,
    pub pipeline_url: String,
}

impl Endpoints {
    /// Endpoints for a deployment region (e.g. "us-south")
    pub fn for_region(region: &str) -> Self {
        Self {
            iam_url: "https://iam.cloud.ibm.com".to_string(),
            resource_controller_url: "https://resource-controller.cloud.ibm.com".to_string(),
            toolchain_url: format!("https://api.{region}.devops.cloud.ibm.com/toolchain/v2"),
            pipeline_url: format!("https://api.{region}.devops.cloud.ibm.com/pipeline/v2"),
        }
    }

    fn trimmed(self) -> Self {
        let trim = |url: String| url.trim_end_matches('/').to_string();
        Self {
            iam_url: trim(self.iam_url),
            resource_controller_url: trim(self.resource_controller_url),
            toolchain_url: trim(self.toolchain_url),
            pipeline_url: trim(self.pipeline_url),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::for_region("us-south")
    }
}

/// HTTP client for the pipeline copier's remote services
///
/// One instance carries the bearer token obtained at connect time and is
/// shared by every catalog and pipeline-configuration call.
#[derive(Clone)]
pub struct CdClient {
    endpoints: Endpoints,
    api_key: String,
    token: String,
    client: Client,
}

impl CdClient {
    /// Exchange an API key for a bearer token and build a connected client
    ///
    /// # Arguments
    /// * `endpoints` - The service base URLs, usually [`Endpoints::for_region`]
    /// * `api_key` - The long-lived API key to authenticate with
    pub async fn connect(endpoints: Endpoints, api_key: impl Into<String>) -> Result<Self> {
        Self::connect_with_client(endpoints, api_key, Client::new()).await
    }

    /// Same as [`CdClient::connect`] with a caller-configured HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub async fn connect_with_client(
        endpoints: Endpoints,
        api_key: impl Into<String>,
        client: Client,
    ) -> Result<Self> {
        let endpoints = endpoints.trimmed();
        let api_key = api_key.into();
        let token = identity::request_token(&client, &endpoints.iam_url, &api_key).await?;

        Ok(Self {
            endpoints,
            api_key,
            token,
            client,
        })
    }

    /// The service base URLs this client talks to
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(
                status.as_u16(),
                service_message(&error_text),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
