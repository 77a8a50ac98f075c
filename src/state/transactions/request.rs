//! Fetch requests produced by the transaction view.

use crate::client::{SearchQuery, TransactionApi};
use crate::domain::{CassaError, TransactionPage};

/// What triggered a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    /// Initial load, reset, limit change or cleared search box.
    Refresh,
    /// A "load more" action.
    LoadMore,
    /// A search typed by the user or a filter change during a search.
    Search,
}

/// A single request for the transaction API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Most recent transactions, no search term.
    Recent {
        /// Requested limit.
        limit: u32,
        /// What triggered the request.
        origin: FetchOrigin,
    },
    /// Server-side search.
    Search {
        /// Term, type and limit.
        query: SearchQuery,
        /// What triggered the request.
        origin: FetchOrigin,
    },
}

impl FetchRequest {
    /// Requested limit.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        match self {
            Self::Recent { limit, .. } => *limit,
            Self::Search { query, .. } => query.limit,
        }
    }

    /// What triggered the request.
    #[must_use]
    pub const fn origin(&self) -> FetchOrigin {
        match self {
            Self::Recent { origin, .. } | Self::Search { origin, .. } => *origin,
        }
    }

    /// Search term, if this is a search.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        match self {
            Self::Recent { .. } => None,
            Self::Search { query, .. } => Some(&query.term),
        }
    }

    /// Run the request against `api`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the API reports.
    pub async fn execute<A: TransactionApi>(&self, api: &A) -> Result<TransactionPage, CassaError> {
        match self {
            Self::Recent { limit, .. } => api.recent_transactions(*limit).await,
            Self::Search { query, .. } => api.search_transactions(query).await,
        }
    }
}
