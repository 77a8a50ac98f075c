//! UI state management for the Cassa TUI.
//!
//! Presentation concerns only: focus, popups, toast notifications and the
//! highlighted table row. Transaction data lives in
//! [`TransactionView`](super::TransactionView).

// ============================================================================
// Focus
// ============================================================================

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The transaction table.
    #[default]
    Table,
    /// The search box.
    Search,
}

// ============================================================================
// Popup State
// ============================================================================

/// Modal popup currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup.
    #[default]
    None,
    /// A message the user has to dismiss.
    Message(String),
}

impl PopupState {
    /// Returns `true` if a popup is shown.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: focus, popup, toast and row selection.
///
/// # Example
///
/// ```ignore
/// let mut ui = UiState::new();
/// ui.show_toast("Filters reset", 20);
/// ui.select_next(12);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    /// Which part of the screen has focus.
    pub focus: Focus,
    /// Current popup.
    pub popup_state: PopupState,
    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,
    /// Highlighted row in the transaction table.
    pub selected_row: Option<usize>,
}

impl UiState {
    /// Creates a new `UiState` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Focus Management
    // ========================================================================

    /// Moves focus into the search box.
    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    /// Returns focus to the table.
    pub fn unfocus_search(&mut self) {
        self.focus = Focus::Table;
    }

    /// Returns whether the search box is focused.
    #[must_use]
    pub fn is_search_focused(&self) -> bool {
        self.focus == Focus::Search
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    /// Returns `true` if the popup is active.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    /// Dismisses the current popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a message popup.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// Returns `true` if the toast was removed.
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }

    // ========================================================================
    // Row Selection
    // ========================================================================

    /// Moves the highlight one row down, stopping at the last of `len` rows.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected_row = None;
            return;
        }
        self.selected_row = Some(match self.selected_row {
            Some(row) => (row + 1).min(len - 1),
            None => 0,
        });
    }

    /// Moves the highlight one row up, stopping at the first.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected_row = None;
            return;
        }
        self.selected_row = Some(self.selected_row.map_or(0, |row| row.saturating_sub(1)));
    }

    /// Highlights the first row.
    pub fn select_first(&mut self, len: usize) {
        self.selected_row = (len > 0).then_some(0);
    }

    /// Highlights the last row.
    pub fn select_last(&mut self, len: usize) {
        self.selected_row = len.checked_sub(1);
    }

    /// Keeps the highlight inside a table that now has `len` rows.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_row = match (self.selected_row, len) {
            (_, 0) => None,
            (Some(row), len) => Some(row.min(len - 1)),
            (None, _) => None,
        };
    }
}

// ============================================================================
// Tests
// ============================================================================
