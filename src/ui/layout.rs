//! Layout calculations for the Cassa TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{CONTROLS_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, SUMMARY_HEIGHT};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas, top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Product name, API URL, account count.
    pub header: Rect,
    /// Search box, type filter and limit selector.
    pub controls: Rect,
    /// Transaction table.
    pub table: Rect,
    /// Summary line with the load-more hint.
    pub summary: Rect,
    /// Keybinding hints.
    pub footer: Rect,
}

impl AppLayout {
    /// Splits `area` into the main screen regions.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(CONTROLS_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(SUMMARY_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        Self {
            header: chunks[0],
            controls: chunks[1],
            table: chunks[2],
            summary: chunks[3],
            footer: chunks[4],
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Calculate a centered popup area with fixed dimensions.
///
/// The popup keeps a two-cell margin inside `parent`.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
