//! State management for the Cassa TUI application.
//!
//! - [`TransactionView`] - loaded transactions, load limit, search and filter
//! - [`UiState`] - focus, popups, toasts, row selection
//! - [`AppConfig`] - persistent configuration with load/save
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                     App                       │
//! ├─────────────────────┬─────────────┬───────────┤
//! │   TransactionView   │   UiState   │ AppConfig │
//! │  - loaded set       │  - focus    │ - base url│
//! │  - limit / has_more │  - popup    │ - timeout │
//! │  - controls         │  - toast    │           │
//! └─────────────────────┴─────────────┴───────────┘
//! ```
//!
//! Network calls run on spawned tasks and report back through
//! [`AppMessage`]s, which the main loop applies one at a time.

use tokio::sync::mpsc;

use crate::client::CassaClient;
use crate::domain::{CassaError, TransactionPage};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod transactions;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use transactions::{Debouncer, FetchRequest, Listing, SearchInput, TransactionView};
pub use ui_state::{PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// A transaction fetch finished.
    TransactionsFetched {
        /// The request that was executed.
        request: FetchRequest,
        /// What the API returned.
        result: Result<TransactionPage, CassaError>,
    },
    /// The search box has been quiet for the debounce period.
    SearchDebounced(String),
    /// Account statistics arrived.
    AccountsCounted(Result<usize, CassaError>),
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// Generic over the transaction API so tests can drive it without a server.
#[derive(Debug)]
pub struct App<A = CassaClient> {
    /// Transaction list state.
    pub view: TransactionView,

    /// UI state - focus, popups, toasts.
    pub ui: UiState,

    /// Configuration in effect for this session.
    pub config: AppConfig,

    /// Number of accounts reported by the server, once known.
    pub accounts_total: Option<usize>,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    // ========================================================================
    // Async Communication
    // ========================================================================
    // Channel sends use `let _ = tx.send(...)`: the receiver may already be
    // gone during shutdown.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Search scheduled by the last keystroke, if it has not fired yet.
    pub(crate) pending_search: Debouncer,

    /// Transaction API client.
    pub(crate) api: A,
}

impl<A> App<A> {
    /// Creates an app around `api` with empty state.
    pub fn with_api(api: A, config: AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            view: TransactionView::new(),
            ui: UiState::new(),
            config,
            accounts_total: None,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            pending_search: Debouncer::new(),
            api,
        }
    }

    /// Base URL of the API this session talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// Fetch dispatch
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
