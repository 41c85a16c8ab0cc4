//! Identity service records

use serde::{Deserialize, Serialize};

/// Body returned by the token exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Details the identity service resolves from an API key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyDetails {
    pub account_id: String,
}
