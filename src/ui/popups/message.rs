//! Message popup for notices that need acknowledging.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const DISMISS_HINT: &str = "Esc/Enter: Close";

// ============================================================================
// Public API
// ============================================================================

/// Renders `message` in a centered popup sized to its text.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let message_lines = message.lines().count().max(1) as u16;
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let popup_width = 40.max(longest_line + 6).min(area.width * 8 / 10);
    let popup_height = 6.max(message_lines + 4);
    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let popup_block = create_popup_block("Notice");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);
    if inner.height < 3 {
        return;
    }

    let message_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 2);
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );

    let separator_area = Rect::new(inner.x, inner.y + inner.height - 2, inner.width, 1);
    frame.render_widget(
        Paragraph::new("─".repeat(inner.width as usize))
            .style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let hint_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new(DISMISS_HINT)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        hint_area,
    );
}

// ============================================================================
// Tests
// ============================================================================
