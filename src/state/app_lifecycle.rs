//! Application lifecycle management.
//!
//! - `new()` - builds the app from configuration
//! - `run()` - main event loop
//! - startup fetches (recent transactions and account statistics)

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

use crate::client::CassaClient;
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App<CassaClient> {
    /// Creates a new App talking to the API configured in `config`.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = CassaClient::new(&config.base_url, config.http_config())?;
        Ok(Self::with_api(client, config))
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        tracing::info!(base_url = %self.base_url(), "session started");
        self.start_account_count();
        self.initial_fetch();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    fn start_account_count(&self) {
        let message_tx = self.message_tx.clone();
        let client = self.api.clone();

        tokio::spawn(async move {
            let result = client.account_count().await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::AccountsCounted(result));
        });
    }
}
