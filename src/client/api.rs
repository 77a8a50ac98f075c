//! Transaction API seam.
//!
//! The transaction view only needs two remote operations. They sit behind
//! [`TransactionApi`] so the fetch dispatcher can run against the real HTTP
//! client or an in-memory fake.

use std::future::Future;

use crate::domain::{CassaError, TransactionPage, TypeFilter};

/// Parameters of a server-side transaction search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Trimmed, non-empty search term.
    pub term: String,
    /// Type restriction; [`TypeFilter::All`] omits the parameter.
    pub filter: TypeFilter,
    /// Maximum number of transactions to return.
    pub limit: u32,
}

/// Remote operations the transaction view depends on.
pub trait TransactionApi: Clone + Send + Sync + 'static {
    /// Fetch the most recent `limit` transactions.
    fn recent_transactions(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<TransactionPage, CassaError>> + Send;

    /// Run a server-side search.
    fn search_transactions(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<TransactionPage, CassaError>> + Send;
}
