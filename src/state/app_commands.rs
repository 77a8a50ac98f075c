//! Command execution and input handling.

use crossterm::event::KeyEvent;

use super::App;
use crate::client::TransactionApi;
use crate::commands::{AppCommand, InputContext, KeyMapper};

impl<A: TransactionApi> App<A> {
    /// Returns the input context that decides how keys are mapped.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.has_active_popup() {
            InputContext::MessagePopup
        } else if self.ui.is_search_focused() {
            InputContext::SearchInput
        } else {
            InputContext::Main
        }
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key, &context);
        self.execute_command(&command);
    }

    /// Executes a single command.
    pub(crate) fn execute_command(&mut self, command: &AppCommand) {
        if command.is_navigation() {
            self.move_selection(command);
            return;
        }

        match command {
            AppCommand::Quit => {
                tracing::info!("quit requested");
                self.pending_search.cancel();
                self.exit = true;
            }
            AppCommand::Dismiss => self.ui.dismiss_popup(),
            AppCommand::FocusSearch => self.ui.focus_search(),
            AppCommand::LeaveSearch => self.ui.unfocus_search(),
            AppCommand::CycleFilter => {
                let next = self.view.controls().filter.next();
                self.change_filter(next);
            }
            AppCommand::NextLimit => {
                let value = self.view.controls().limit.next_value();
                self.select_limit(value);
            }
            AppCommand::PreviousLimit => {
                let value = self.view.controls().limit.previous_value();
                self.select_limit(value);
            }
            AppCommand::LoadMore => self.load_more(),
            AppCommand::ResetFilters => self.reset_filters(),
            AppCommand::TypeChar(c) => {
                let mut text = self.view.controls().search_input.clone();
                text.push(*c);
                self.search_input_changed(text);
            }
            AppCommand::Backspace => {
                let mut text = self.view.controls().search_input.clone();
                if text.pop().is_some() {
                    self.search_input_changed(text);
                }
            }
            AppCommand::ClearSearch => {
                if !self.view.controls().search_input.is_empty() {
                    self.search_input_changed(String::new());
                }
            }
            AppCommand::MoveUp
            | AppCommand::MoveDown
            | AppCommand::MoveTop
            | AppCommand::MoveBottom
            | AppCommand::Noop => {}
        }
    }

    fn move_selection(&mut self, command: &AppCommand) {
        let rows = self.view.visible().len();
        match command {
            AppCommand::MoveUp => self.ui.select_previous(rows),
            AppCommand::MoveDown => self.ui.select_next(rows),
            AppCommand::MoveTop => self.ui.select_first(rows),
            AppCommand::MoveBottom => self.ui.select_last(rows),
            _ => {}
        }
    }
}
