//! Modal popups drawn over the main screen.

pub mod message;

pub use message::render as render_message_popup;
