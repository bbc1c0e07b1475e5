//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned an error response
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// `message` field of the error body, if it had one
        message: Option<String>,
    },

    /// Invalid URL or venue slug
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Venue location in the static data is unusable
    #[error("Invalid venue location: {0}")]
    InvalidLocation(#[from] delivery_geo::GeoError),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: Option<String>) -> Self {
        Self::ApiResponse { status, message }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }
}
