//! Message processing for the Cassa application.

use super::{App, AppMessage};
use crate::client::TransactionApi;

impl<A: TransactionApi> App<A> {
    /// Applies every message that has arrived since the last call.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::TransactionsFetched { request, result } => {
                if let Some(notice) = self.view.complete(&request, result) {
                    self.ui.show_message(notice);
                }
                let rows = self.view.visible().len();
                self.ui.clamp_selection(rows);
                if self.ui.selected_row.is_none() {
                    self.ui.select_first(rows);
                }
            }
            AppMessage::SearchDebounced(term) => {
                let request = self.view.run_debounced_search(&term);
                self.dispatch(request);
            }
            AppMessage::AccountsCounted(Ok(count)) => {
                tracing::debug!(count, "account count received");
                self.accounts_total = Some(count);
            }
            AppMessage::AccountsCounted(Err(error)) => {
                tracing::warn!("account count failed: {error}");
                self.accounts_total = None;
            }
        }
    }
}
