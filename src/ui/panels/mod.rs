//! Panels of the main content area.
//!
//! - **Transactions**: the admin transaction table with its summary line

pub mod transactions;

pub use transactions::{render_summary, render_transactions};
