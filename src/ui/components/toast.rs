//! Toast notification component.
//!
//! A short-lived confirmation in the bottom-right corner that does not take
//! focus from the table.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::SUCCESS_COLOR;

// ============================================================================
// Constants
// ============================================================================

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
const TOAST_PADDING_RIGHT: u16 = 2;
/// Keeps the toast clear of the summary line and footer.
const TOAST_PADDING_BOTTOM: u16 = 2;
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders `message` as a toast in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    frame.render_widget(
        Paragraph::new(format!("✓ {message}"))
            .style(Style::default().fg(SUCCESS_COLOR))
            .alignment(Alignment::Center),
        inner,
    );
}

fn toast_position(area: Rect, message: &str) -> Rect {
    let message_len = message.chars().count() as u16 + 2;
    let toast_width = (message_len + TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let toast_height = TOAST_HEIGHT.min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

// ============================================================================
// Tests
// ============================================================================
