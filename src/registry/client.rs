//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Optional bearer token per request
//! - Status and transport error mapping

use crate::error::RegistryError;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("depradar/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RegistryError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Create a client with the default User-Agent and the given timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Perform a GET request and decode the JSON body.
    ///
    /// Any non-2xx status becomes [`RegistryError::Status`]; no retries are
    /// attempted.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        accept: &str,
        bearer_token: Option<&str>,
    ) -> Result<T, RegistryError> {
        let mut request = self.client.get(url).header(ACCEPT, accept);
        if let Some(token) = bearer_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        debug!(url, "GET");
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::network(format!("request to {} timed out", url))
            } else {
                RegistryError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(url, %status, "request failed");
            return Err(RegistryError::status(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RegistryError::invalid_response(format!("failed to parse JSON: {}", e)))
    }
}
