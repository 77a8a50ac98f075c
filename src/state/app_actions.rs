//! Fetch dispatch and user-triggered actions.
//!
//! Every network call runs on its own tokio task and reports back with an
//! [`AppMessage`]; nothing here blocks the UI loop.

use tokio::sync::mpsc;

use super::{App, AppMessage, FetchRequest, SearchInput};
use crate::client::TransactionApi;
use crate::constants::{SEARCH_DEBOUNCE, TOAST_TICKS};
use crate::domain::TypeFilter;

/// Runs `request` against `api` on a background task.
pub(crate) fn spawn_fetch<A: TransactionApi>(
    api: A,
    request: FetchRequest,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) {
    tokio::spawn(async move {
        let result = request.execute(&api).await;
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = message_tx.send(AppMessage::TransactionsFetched { request, result });
    });
}

impl<A: TransactionApi> App<A> {
    /// Starts `request`, if the view issued one.
    pub(crate) fn dispatch(&self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            spawn_fetch(self.api.clone(), request, self.message_tx.clone());
        }
    }

    /// Loads the default page of recent transactions.
    pub(crate) fn initial_fetch(&mut self) {
        let request = self.view.load_recent(self.view.load_limit());
        self.dispatch(request);
    }

    // ========================================================================
    // Transaction View Actions
    // ========================================================================

    pub(crate) fn load_more(&mut self) {
        match self.view.load_more() {
            Ok(request) => self.dispatch(request),
            Err(err) => self.ui.show_message(err.to_string()),
        }
    }

    pub(crate) fn reset_filters(&mut self) {
        let request = self.view.reset();
        if request.is_some() {
            self.pending_search.cancel();
            self.ui.show_toast("Filters reset", TOAST_TICKS);
        }
        self.dispatch(request);
    }

    pub(crate) fn change_filter(&mut self, filter: TypeFilter) {
        let request = self.view.change_filter(filter);
        self.dispatch(request);
        self.ui.clamp_selection(self.view.visible().len());
    }

    pub(crate) fn select_limit(&mut self, value: u32) {
        if value == self.view.controls().limit.value() {
            return;
        }
        let request = self.view.select_limit(value);
        self.dispatch(request);
    }

    /// Applies new search box text: schedules a debounced search, or reloads
    /// right away when the box was cleared.
    pub(crate) fn search_input_changed(&mut self, text: String) {
        match self.view.search_input_changed(text) {
            SearchInput::Debounce(term) => {
                let message_tx = self.message_tx.clone();
                self.pending_search.schedule(SEARCH_DEBOUNCE, move || {
                    let _ = message_tx.send(AppMessage::SearchDebounced(term));
                });
            }
            SearchInput::Cleared(request) => {
                self.pending_search.cancel();
                self.dispatch(request);
            }
        }
    }
}
