//! UI helper functions for creating styled blocks.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled for its focus state.
///
/// Focused blocks get a double border and a `●` marker in the title.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::buffer_to_string;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        layout::{Constraint, Direction, Layout},
    };

    #[test]
    fn test_block_titles_follow_focus() {
        let backend = TestBackend::new(40, 9);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                let areas = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Length(3),
                    ])
                    .split(frame.area());

                frame.render_widget(create_border_block("Search", false), areas[0]);
                frame.render_widget(create_border_block("Search", true), areas[1]);
                frame.render_widget(create_popup_block("Message"), areas[2]);
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        let lines: Vec<&str> = content.lines().collect();

        assert!(lines[0].contains(" Search ") && !lines[0].contains('●'));
        assert!(lines[3].contains("● Search"));
        assert!(lines[3].starts_with('╔'));
        assert!(lines[6].contains(" Message "));
    }
}
