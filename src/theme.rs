//! Theme and styling constants for the Cassa TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::TxnKind;

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Secondary accent color.
pub const SECONDARY_COLOR: Color = Color::Blue;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for special highlights.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the highlighted table row.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Style for table column headers.
pub const TABLE_HEADER_STYLE: Style = Style::new().fg(MUTED_COLOR).add_modifier(Modifier::BOLD);

// ============================================================================
// Transaction Colors
// ============================================================================

/// Color of a transaction type badge.
#[must_use]
pub const fn kind_color(kind: TxnKind) -> Color {
    match kind {
        TxnKind::Deposit => SUCCESS_COLOR,
        TxnKind::Withdraw => ERROR_COLOR,
        TxnKind::Transfer => SECONDARY_COLOR,
        TxnKind::Unknown => MUTED_COLOR,
    }
}

/// Color of an amount: green when money arrived, red when it left.
#[must_use]
pub const fn amount_color(is_credit: bool) -> Color {
    if is_credit { SUCCESS_COLOR } else { ERROR_COLOR }
}
