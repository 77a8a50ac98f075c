//! HTTP client abstraction for Cassa API requests.

use reqwest::Client;
use std::time::Duration;

use crate::domain::CassaError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request
const USER_AGENT: &str = concat!("cassa/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `CassaError::Network` if the TLS backend cannot be initialised.
    pub fn with_config(config: HttpConfig) -> Result<Self, CassaError> {
        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(4)
            .build()?;
        Ok(Self { inner, config })
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner
            .get(url)
            .header("accept", "application/json")
            .timeout(self.config.timeout)
    }
}
