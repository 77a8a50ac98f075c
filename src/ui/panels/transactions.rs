//! Transaction table and the summary line under it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    symbols::scrollbar,
    text::{Line, Span},
    widgets::{
        Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table, TableState,
        Wrap,
    },
};

use crate::domain::Transaction;
use crate::state::{App, Listing};
use crate::theme::{
    ERROR_COLOR, HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR, TABLE_HEADER_STYLE, WARNING_COLOR,
    amount_color, kind_color,
};
use crate::ui::helpers::create_border_block;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const COLUMNS: [&str; 6] = ["Date", "Client", "Account", "Type", "Amount", "Details"];

fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}

// ============================================================================
// Transaction Table
// ============================================================================

/// Renders the transaction table, or the placeholder for the current state.
pub fn render_transactions<A>(app: &App<A>, frame: &mut Frame, area: Rect) {
    let focused = !app.ui.is_search_focused() && !app.ui.has_active_popup();
    let block = create_border_block("Transactions", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = &app.view;

    if let Listing::Failed {
        message,
        during_search,
    } = view.listing()
    {
        render_failure(frame, inner, message, *during_search);
        return;
    }

    let rows = view.visible();
    if rows.is_empty() {
        let placeholder = if view.is_loading() {
            Line::from(vec![
                Span::styled(
                    spinner_frame(app.animation_tick),
                    Style::default().fg(PRIMARY_COLOR),
                ),
                Span::raw(" Loading transactions..."),
            ])
        } else {
            Line::styled("No transactions", Style::default().fg(MUTED_COLOR))
        };
        frame.render_widget(
            Paragraph::new(placeholder).alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let header = Row::new(COLUMNS.map(Cell::from))
        .style(TABLE_HEADER_STYLE)
        .bottom_margin(0);

    let table = Table::new(
        rows.iter().map(|txn| transaction_row(txn)),
        [
            Constraint::Length(16),
            Constraint::Min(14),
            Constraint::Length(22),
            Constraint::Length(9),
            Constraint::Length(16),
            Constraint::Min(16),
        ],
    )
    .header(header)
    .column_spacing(1)
    .row_highlight_style(HIGHLIGHT_STYLE)
    .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(app.ui.selected_row);
    frame.render_stateful_widget(table, inner, &mut state);

    let viewport = inner.height.saturating_sub(1) as usize;
    if rows.len() > viewport {
        let mut scrollbar_state =
            ScrollbarState::new(rows.len()).position(app.ui.selected_row.unwrap_or(0));
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .symbols(scrollbar::VERTICAL)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::default().fg(MUTED_COLOR));
        frame.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
    }
}

fn transaction_row(txn: &Transaction) -> Row<'static> {
    let details = txn
        .counterparty()
        .unwrap_or_else(|| txn.description.clone());

    Row::new(vec![
        Cell::from(txn.formatted_timestamp()).style(Style::default().fg(MUTED_COLOR)),
        Cell::from(txn.client_name.clone()),
        Cell::from(txn.account_number.clone()),
        Cell::from(txn.kind.label()).style(Style::default().fg(kind_color(txn.kind))),
        Cell::from(txn.signed_amount()).style(
            Style::default()
                .fg(amount_color(txn.is_credit()))
                .add_modifier(Modifier::BOLD),
        ),
        Cell::from(details),
    ])
}

fn render_failure(frame: &mut Frame, area: Rect, message: &str, during_search: bool) {
    let title = if during_search {
        "Search failed"
    } else {
        "Could not load transactions"
    };
    let text = vec![
        Line::styled(
            title,
            Style::default()
                .fg(ERROR_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::styled("Press x to reset filters", Style::default().fg(MUTED_COLOR)),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

// ============================================================================
// Summary Line
// ============================================================================

/// Renders the summary text with the loading state or the load-more hint.
pub fn render_summary<A>(app: &App<A>, frame: &mut Frame, area: Rect) {
    let view = &app.view;
    let mut spans = vec![Span::raw(view.summary().to_string())];

    if view.is_loading() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} Loading...", spinner_frame(app.animation_tick)),
            Style::default().fg(PRIMARY_COLOR),
        ));
    } else if view.controls().load_more_visible {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "m: Load more",
            Style::default().fg(WARNING_COLOR),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ============================================================================
// Tests
// ============================================================================
