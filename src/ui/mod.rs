//! UI rendering for the Cassa TUI.
//!
//! # Module Structure
//!
//! - `panels` - Transaction table and summary line
//! - `popups` - Modal notices
//! - `components` - Toast notifications
//! - `layout` - Layout calculations and structs
//! - `header` - Header and controls bar
//! - `footer` - Shortcut hints
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

#[cfg(test)]
pub(crate) mod test_support;

use ratatui::Frame;

use crate::state::{App, PopupState};

use layout::AppLayout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole screen for the current state of `app`.
pub fn render<A>(app: &App<A>, frame: &mut Frame) {
    let size = frame.area();
    let layout = AppLayout::new(size);

    header::render_header(frame, layout.header, app);
    header::render_controls(frame, layout.controls, app);
    panels::render_transactions(app, frame, layout.table);
    panels::render_summary(app, frame, layout.summary);
    footer::render(frame, layout.footer, app);

    if let PopupState::Message(message) = &app.ui.popup_state {
        popups::render_message_popup(frame, size, message);
    }

    // Toast goes on top of everything
    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TransactionMother;
    use crate::ui::test_support::{app_with_transactions, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw_screen<A>(app: &App<A>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_full_screen_renders_every_region() {
        let mut app = app_with_transactions(TransactionMother::mixed());
        app.accounts_total = Some(3);

        let content = draw_screen(&app);

        assert!(content.contains("cassa admin"));
        assert!(content.contains("Search"));
        assert!(content.contains("Transactions"));
        assert!(content.contains("Loaded: 5 transactions (limit: 10)"));
        assert!(content.contains("q:Quit"));
    }

    #[test]
    fn test_popup_and_toast_overlay_the_screen() {
        let mut app = app_with_transactions(TransactionMother::mixed());
        app.ui.show_message("Maximum number of transactions to display: 4000");
        app.ui.show_toast("Filters reset", 5);

        let content = draw_screen(&app);

        assert!(content.contains("Maximum number of transactions to display: 4000"));
        assert!(content.contains("✓ Filters reset"));
    }
}
