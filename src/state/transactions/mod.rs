//! Pagination, search and filter state for the admin transaction list.

mod controls;
mod debounce;
mod request;
mod view;


pub use debounce::Debouncer;
pub use request::FetchRequest;
pub use view::{Listing, SearchInput, TransactionView};

#[cfg(test)]
use request::FetchOrigin;
