//! Helpers shared by the rendering tests.

use ratatui::buffer::Buffer;

use crate::domain::{Transaction, TransactionPage};
use crate::state::{App, AppConfig};
use crate::test_utils::FakeApi;

/// Flattens a buffer into newline-separated rows of symbols.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// App with default configuration and an idle fake API.
pub fn test_app() -> App<FakeApi> {
    App::with_api(FakeApi::with_available(0), AppConfig::default())
}

/// App whose view already shows `transactions` as a recent fetch.
pub fn app_with_transactions(transactions: Vec<Transaction>) -> App<FakeApi> {
    let mut app = test_app();
    let request = app
        .view
        .load_recent(app.view.load_limit())
        .expect("idle view should fetch");
    let page = TransactionPage {
        transactions,
        ..TransactionPage::default()
    };
    app.view.complete(&request, Ok(page));
    app
}
