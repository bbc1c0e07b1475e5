//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::VenuesApi;
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Venue API client
///
/// Thin wrapper over `reqwest` that adds request correlation IDs, logging
/// and uniform error mapping. Cheap to clone.
#[derive(Clone)]
pub struct VenueClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl VenueClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ApiError::config(format!("invalid user agent: {}", config.user_agent)))?;
        default_headers.insert(USER_AGENT, user_agent);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Access venue endpoints
    #[must_use]
    pub fn venues(&self) -> VenuesApi {
        VenuesApi::new(self.clone())
    }

    /// Perform a GET request relative to the base URL
    #[instrument(skip(self), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let result = self.execute(&request_id, &url).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => debug!(
                request_id = %request_id,
                elapsed_ms = elapsed.as_millis(),
                "Request succeeded"
            ),
            // 4xx is an answer about the request (e.g. unknown venue), not an outage
            Err(e) if e.is_client_error() => debug!(
                request_id = %request_id,
                url = %url,
                elapsed_ms = elapsed.as_millis(),
                error = %e,
                "Request rejected"
            ),
            Err(e) => warn!(
                request_id = %request_id,
                url = %url,
                elapsed_ms = elapsed.as_millis(),
                error = %e,
                "Request failed"
            ),
        }

        result
    }

    async fn execute<T: DeserializeOwned>(&self, request_id: &str, url: &str) -> ApiResult<T> {
        let response = self
            .inner
            .get(url)
            .header(X_REQUEST_ID, request_id)
            .send()
            .await?;

        handle_response(response).await
    }
}

/// Handle HTTP response and deserialize
async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::api_response(status.as_u16(), error_message(&body)))
    }
}

/// Extract the `message` field from a JSON error body
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
