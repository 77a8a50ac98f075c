//! Cassa admin API client.
//!
//! Wraps the admin endpoints of the banking backend:
//! - `GET /api/admin/recent-transactions/`
//! - `GET /api/admin/search-transactions/`
//! - `GET /api/admin/check/`
//! - `GET /api/admin/accounts/`

use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use super::api::{SearchQuery, TransactionApi};
use super::http::{HttpClient, HttpConfig};
use crate::domain::{CassaError, TransactionPage};

// ============================================================================
// Endpoints
// ============================================================================

const RECENT_TRANSACTIONS_PATH: &str = "/api/admin/recent-transactions/";
const SEARCH_TRANSACTIONS_PATH: &str = "/api/admin/search-transactions/";
const ADMIN_CHECK_PATH: &str = "/api/admin/check/";
const ACCOUNTS_PATH: &str = "/api/admin/accounts/";

// ============================================================================
// Response Types
// ============================================================================

/// Body of the admin check endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminCheck {
    /// Username the session belongs to.
    pub user: String,
    /// Whether the server granted admin access.
    #[serde(default)]
    pub is_admin: bool,
    /// Free-text status message.
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Cassa Client
// ============================================================================

/// HTTP client for the Cassa admin API.
#[derive(Debug, Clone)]
pub struct CassaClient {
    base_url: String,
    http: HttpClient,
}

impl CassaClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `CassaError::InvalidInput` for a URL without an http(s) scheme
    /// and `CassaError::Network` if the HTTP client fails to initialise.
    pub fn new(base_url: impl Into<String>, config: HttpConfig) -> Result<Self, CassaError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CassaError::invalid_input(format!(
                "API base URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        Ok(Self {
            base_url,
            http: HttpClient::with_config(config)?,
        })
    }

    /// The API base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Verify the session has admin rights.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server denies access.
    pub async fn admin_check(&self) -> Result<AdminCheck, CassaError> {
        self.get_json(self.http.get(&self.url(ADMIN_CHECK_PATH)))
            .await
    }

    /// Count the active accounts visible to the admin.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a JSON array.
    pub async fn account_count(&self) -> Result<usize, CassaError> {
        let accounts: Vec<IgnoredAny> = self
            .get_json(self.http.get(&self.url(ACCOUNTS_PATH)))
            .await?;
        Ok(accounts.len())
    }

    /// Send a request and decode its JSON body.
    ///
    /// Non-2xx statuses become `HttpStatus` errors carrying the body text.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CassaError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!("Cassa API returned status {status}");
            return Err(CassaError::http_status(status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| CassaError::parse(format!("Failed to decode response: {e}")))
    }

    /// Decode a transaction page, turning an embedded `error` into a failure.
    async fn get_page(&self, request: reqwest::RequestBuilder) -> Result<TransactionPage, CassaError> {
        let page: TransactionPage = self.get_json(request).await?;
        match page.error {
            Some(error) => Err(CassaError::ServerReported(error)),
            None => Ok(page),
        }
    }
}

impl TransactionApi for CassaClient {
    async fn recent_transactions(&self, limit: u32) -> Result<TransactionPage, CassaError> {
        tracing::debug!(limit, "fetching recent transactions");
        let request = self
            .http
            .get(&self.url(RECENT_TRANSACTIONS_PATH))
            .query(&[("limit", limit)]);
        self.get_page(request).await
    }

    async fn search_transactions(&self, query: &SearchQuery) -> Result<TransactionPage, CassaError> {
        tracing::debug!(term = %query.term, limit = query.limit, "searching transactions");
        let mut params = vec![
            ("q", query.term.clone()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(kind) = query.filter.as_query() {
            params.push(("type", kind.to_string()));
        }

        let request = self
            .http
            .get(&self.url(SEARCH_TRANSACTIONS_PATH))
            .query(&params);
        self.get_page(request).await
    }
}
