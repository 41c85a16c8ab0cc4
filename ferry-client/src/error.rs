//! Error types for the ferry client

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the remote services
#[derive(Debug, Error)]
pub enum ClientError {
    /// The identity service refused to exchange the API key for a token
    #[error("authentication failed: {0}")]
    TokenExchange(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

/// Pull the human-readable message out of a service error body.
///
/// The services answer errors with small JSON objects whose message key
/// varies by service; anything unparseable is returned as-is.
pub(crate) fn service_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ServiceError {
        message: Option<String>,
        #[serde(rename = "errorMessage")]
        error_message: Option<String>,
    }

    match serde_json::from_str::<ServiceError>(body) {
        Ok(err) => err
            .message
            .or(err.error_message)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_predicates() {
        let not_found = ClientError::api_error(404, "no such pipeline");
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let unavailable = ClientError::api_error(503, "try later");
        assert!(unavailable.is_server_error());
    }

    #[test]
    fn test_service_message_extracts_message_key() {
        assert_eq!(
            service_message(r#"{"message": "Rate limit exceeded"}"#),
            "Rate limit exceeded"
        );
        assert_eq!(
            service_message(r#"{"errorMessage": "API key is invalid"}"#),
            "API key is invalid"
        );
    }

    #[test]
    fn test_service_message_falls_back_to_raw_body() {
        assert_eq!(service_message("<html>gateway timeout</html>"), "<html>gateway timeout</html>");
    }
}
