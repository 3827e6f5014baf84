//! Client configuration.

/// Configuration for connecting to the shop API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL including the path prefix
    /// (e.g., "http://localhost:5000/api").
    pub base_url: String,

    /// Bearer token for authenticated endpoints.
    pub token: Option<String>,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// ## Variables
    /// - `BOLT_API_URL` - base URL (default `http://localhost:5000/api`)
    /// - `BOLT_API_TIMEOUT` - request timeout in seconds (default 30)
    /// - `BOLT_API_TOKEN` - bearer token, normally restored from the saved
    ///   session instead
    pub fn from_env() -> Self {
        let base_url = std::env::var("BOLT_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string());
        let timeout = std::env::var("BOLT_API_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        let token = std::env::var("BOLT_API_TOKEN").ok();

        Self {
            base_url,
            token,
            timeout,
        }
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an API client from this configuration.
    pub fn build_client(&self) -> super::ApiClient {
        super::ApiClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000/api")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new("https://shop.example.com/api")
            .with_token("jwt-token")
            .with_timeout(10);
        assert_eq!(config.base_url, "https://shop.example.com/api");
        assert_eq!(config.token.as_deref(), Some("jwt-token"));
        assert_eq!(config.timeout, 10);
    }
}
