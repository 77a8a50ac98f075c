//! Reusable UI components.
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages

pub mod toast;

pub use toast::render_toast;
