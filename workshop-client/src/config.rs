//! Client configuration

use crate::{ClientError, ClientResult, NetworkHttpClient};

/// Default API base when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default list page size
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Client configuration for connecting to the workshop backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, paths are joined below it (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds, `None` leaves requests unbounded
    pub timeout: Option<u64>,

    /// Rows requested per list page
    pub page_size: u32,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Some(30),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Load configuration from environment variables
    ///
    /// - `WORKSHOP_API_URL` (default [`DEFAULT_BASE_URL`])
    /// - `WORKSHOP_TIMEOUT_SECS` (default 30, `0` disables the timeout)
    /// - `WORKSHOP_PAGE_SIZE` (default 10)
    pub fn from_env() -> ClientResult<Self> {
        let base_url = std::env::var("WORKSHOP_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(base_url);

        if let Ok(raw) = std::env::var("WORKSHOP_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ClientError::Config(format!("WORKSHOP_TIMEOUT_SECS is not a number: {raw}")))?;
            config.timeout = (secs > 0).then_some(secs);
        }

        if let Ok(raw) = std::env::var("WORKSHOP_PAGE_SIZE") {
            let size: u32 = raw
                .trim()
                .parse()
                .map_err(|_| ClientError::Config(format!("WORKSHOP_PAGE_SIZE is not a number: {raw}")))?;
            config = config.with_page_size(size);
        }

        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Disable the request timeout
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Set the page size, clamped to the backend's accepted range (1..=100)
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size.clamp(1, 100);
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://workshop.test/api")
            .with_token("abc")
            .with_timeout(5)
            .with_page_size(500);
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, Some(5));
        assert_eq!(config.page_size, 100);
        assert_eq!(config.without_timeout().timeout, None);
    }
}
