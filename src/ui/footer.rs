//! Footer bar with the keyboard shortcuts for the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::MUTED_COLOR;

const MAIN_SHORTCUTS: &str = "q:Quit  /:Search  t:Type  [ ]:Limit  x:Reset  ↑↓:Select";
const LOAD_MORE_SHORTCUT: &str = "  m:More";
const SEARCH_SHORTCUTS: &str = "Enter/Esc:Done  Ctrl+U:Clear  Backspace:Delete";

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts.
pub fn render<A>(frame: &mut Frame, area: Rect, app: &App<A>) {
    let footer_text = if app.ui.is_search_focused() {
        SEARCH_SHORTCUTS.to_string()
    } else if app.view.controls().load_more_visible {
        format!("{MAIN_SHORTCUTS}{LOAD_MORE_SHORTCUT}")
    } else {
        MAIN_SHORTCUTS.to_string()
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
