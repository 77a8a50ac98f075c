//! Header and controls bar rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Render the application header.
pub fn render_header<A>(frame: &mut Frame, area: Rect, app: &App<A>) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block.clone(), area);

    if area.height <= 2 {
        return;
    }
    let inner = header_block.inner(area);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            "cassa",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" admin", Style::default().fg(ACCENT_COLOR)),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Left), halves[0]);

    let accounts = app
        .accounts_total
        .map_or_else(|| "?".to_string(), |count| count.to_string());
    let status = Line::from(vec![
        Span::styled(app.base_url(), Style::default().fg(MUTED_COLOR)),
        Span::raw("  "),
        Span::styled("Accounts: ", Style::default().fg(MUTED_COLOR)),
        Span::styled(accounts, Style::default().fg(WARNING_COLOR)),
    ]);
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Right), halves[1]);
}

/// Render the search box, type filter and limit selector.
pub fn render_controls<A>(frame: &mut Frame, area: Rect, app: &App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(18),
            Constraint::Length(16),
        ])
        .split(area);

    let controls = app.view.controls();
    let search_focused = app.ui.is_search_focused();

    let search_title = if app.pending_search.is_pending() {
        "Search …"
    } else {
        "Search"
    };
    let search_block = create_border_block(search_title, search_focused);
    let search_text = if controls.search_input.is_empty() && !search_focused {
        Line::from(Span::styled(
            "/ client, account or description",
            Style::default().fg(MUTED_COLOR),
        ))
    } else if search_focused {
        Line::from(vec![
            Span::raw(controls.search_input.as_str()),
            Span::styled("█", Style::default().fg(PRIMARY_COLOR)),
        ])
    } else {
        Line::from(controls.search_input.as_str())
    };
    frame.render_widget(Paragraph::new(search_text).block(search_block), chunks[0]);

    let filter = Paragraph::new(controls.filter.label())
        .alignment(Alignment::Center)
        .block(create_border_block("Type [t]", false));
    frame.render_widget(filter, chunks[1]);

    let limit = controls.limit.value();
    let presets = controls.limit.presets();
    let position = presets
        .iter()
        .position(|&preset| preset == limit)
        .map_or(0, |index| index + 1);
    let limit_text = format!("{limit} ({position}/{})", presets.len());
    let limit_widget = Paragraph::new(limit_text)
        .alignment(Alignment::Center)
        .block(create_border_block("Limit [ ]", false));
    frame.render_widget(limit_widget, chunks[2]);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_to_string, test_app};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_header_shows_url_and_account_count() {
        let mut app = test_app();
        app.accounts_total = Some(7);
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();

        terminal
            .draw(|frame| render_header(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("cassa admin"));
        assert!(content.contains("http://127.0.0.1:8000"));
        assert!(content.contains("Accounts: 7"));
    }

    #[test]
    fn test_header_unknown_account_count() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();

        terminal
            .draw(|frame| render_header(frame, frame.area(), &app))
            .unwrap();

        assert!(buffer_to_string(terminal.backend().buffer()).contains("Accounts: ?"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_title_marks_pending_search() {
        let mut app = test_app();
        app.search_input_changed("iva".to_string());
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();

        terminal
            .draw(|frame| render_controls(frame, frame.area(), &app))
            .unwrap();
        assert!(buffer_to_string(terminal.backend().buffer()).contains("Search …"));

        app.pending_search.cancel();
        terminal
            .draw(|frame| render_controls(frame, frame.area(), &app))
            .unwrap();
        assert!(!buffer_to_string(terminal.backend().buffer()).contains("Search …"));
    }

    #[test]
    fn test_controls_show_input_filter_and_limit() {
        let mut app = test_app();
        let _ = app.view.search_input_changed("ivan");
        app.view.filter_locally(crate::domain::TypeFilter::Transfer);
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();

        terminal
            .draw(|frame| render_controls(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("ivan"));
        assert!(content.contains("Transfers"));
        assert!(content.contains("10 (1/8)"));
    }
}
