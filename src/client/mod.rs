//! HTTP clients for the Cassa banking API.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{CassaClient, HttpConfig, TransactionApi};
//!
//! let client = CassaClient::new("http://127.0.0.1:8000", HttpConfig::default())?;
//! let page = client.recent_transactions(10).await?;
//! ```

pub mod api;
pub mod cassa;
pub mod http;

#[cfg(test)]
mod tests;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{SearchQuery, TransactionApi};
pub use cassa::CassaClient;
pub use http::HttpConfig;
