//! Domain types for the Cassa admin client.
//!
//! # Module Organization
//!
//! - [`error`] - Error type shared by the client and the transaction view
//! - [`transaction`] - Transactions and the paged listing returned by the API
//! - [`filter`] - Transaction type filter

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod filter;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::CassaError;
pub use filter::TypeFilter;
pub use transaction::{Transaction, TransactionPage, TxnKind};
