//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`], a pure
//! function of the key and the current [`InputContext`]. The app then
//! executes the command.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(&command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the transaction table.
    Main,
    /// Typing in the search box.
    SearchInput,
    /// Viewing a message popup.
    MessagePopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Dismiss the current popup.
    Dismiss,

    // === Transaction View ===
    /// Move focus into the search box.
    FocusSearch,
    /// Switch to the next type filter.
    CycleFilter,
    /// Pick the next larger limit preset.
    NextLimit,
    /// Pick the next smaller limit preset.
    PreviousLimit,
    /// Grow the load limit by one step.
    LoadMore,
    /// Clear search and filters and reload.
    ResetFilters,

    // === Navigation ===
    /// Move row selection up.
    MoveUp,
    /// Move row selection down.
    MoveDown,
    /// Jump to the first row.
    MoveTop,
    /// Jump to the last row.
    MoveBottom,

    // === Search Input Actions ===
    /// Type a character in the search box.
    TypeChar(char),
    /// Delete the last character in the search box.
    Backspace,
    /// Empty the search box.
    ClearSearch,
    /// Leave the search box.
    LeaveSearch,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command moves the row selection.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::MoveUp | Self::MoveDown | Self::MoveTop | Self::MoveBottom
        )
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    ///
    /// This is a pure function with no side effects.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }
        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::SearchInput => Self::map_search_input_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    /// Maps keys in the main browsing context.
    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('/') => AppCommand::FocusSearch,
            KeyCode::Char('t') => AppCommand::CycleFilter,
            KeyCode::Char(']') => AppCommand::NextLimit,
            KeyCode::Char('[') => AppCommand::PreviousLimit,
            KeyCode::Char('m') => AppCommand::LoadMore,
            KeyCode::Char('x') => AppCommand::ResetFilters,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Home => AppCommand::MoveTop,
            KeyCode::End => AppCommand::MoveBottom,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys in the search box.
    fn map_search_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => AppCommand::LeaveSearch,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppCommand::ClearSearch
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppCommand::TypeChar(c)
            }
            _ => AppCommand::Noop,
        }
    }

    /// Maps keys in the message popup.
    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
