//! Identity service calls
//!
//! Token exchange and API key details, the two operations behind account
//! resolution.

use ferry_core::dto::identity::{ApiKeyDetails, TokenResponse};
use reqwest::Client;
use tracing::debug;

use crate::CdClient;
use crate::error::{ClientError, Result, service_message};

const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Exchange an API key for a bearer token
pub(crate) async fn request_token(client: &Client, iam_url: &str, api_key: &str) -> Result<String> {
    let url = format!("{}/identity/token", iam_url);
    debug!("Requesting bearer token from {}", url);

    let response = client
        .post(&url)
        .form(&[("grant_type", APIKEY_GRANT_TYPE), ("apikey", api_key)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::TokenExchange(format!(
            "status {}: {}",
            status.as_u16(),
            service_message(&body)
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse token response: {}", e)))?;

    Ok(token.access_token)
}

impl CdClient {
    /// Resolve the details of the connected API key
    pub(crate) async fn api_key_details(&self) -> Result<ApiKeyDetails> {
        let url = format!("{}/v1/apikeys/details", self.endpoints.iam_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("IAM-Apikey", &self.api_key)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
