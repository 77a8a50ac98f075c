use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{client::CassaClient, state::App, state::AppConfig};

// Cassa version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r#"
  ██████╗ █████╗ ███████╗███████╗ █████╗
 ██╔════╝██╔══██╗██╔════╝██╔════╝██╔══██╗
 ██║     ███████║███████╗███████╗███████║
 ██║     ██╔══██║╚════██║╚════██║██╔══██║
 ╚██████╗██║  ██║███████║███████║██║  ██║
  ╚═════╝╚═╝  ╚═╝╚══════╝╚══════╝╚═╝  ╚═╝
"#;

/// Cassa - terminal admin client for the Cassa banking API
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// API base URL for this session (overrides the stored one)
    #[arg(long)]
    base_url: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the API accepts this session as an admin
    Check,
    /// Persist settings to the config file
    Config {
        /// API base URL to store
        #[arg(long)]
        base_url: String,
    },
    /// Display version with ASCII art
    Version,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let log_path = cli
        .log_file
        .clone()
        .or_else(logging::default_log_path)
        .ok_or_else(|| eyre!("Could not determine a log file location, pass --log-file"))?;
    logging::init(&log_path)?;

    let mut config = AppConfig::load();
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }

    if let Some(command) = cli.command {
        return handle_command(command, config).await;
    }

    let mut app = App::new(config)?;
    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

/// Runs a CLI subcommand instead of the TUI.
async fn handle_command(command: Commands, config: AppConfig) -> Result<()> {
    match command {
        Commands::Check => {
            let client = CassaClient::new(&config.base_url, config.http_config())?;
            let check = client
                .admin_check()
                .await
                .wrap_err_with(|| format!("admin check against {} failed", config.base_url))?;
            println!("Connected to {} as {}", client.base_url(), check.user);
            if !check.is_admin {
                println!("Warning: the server did not grant admin access");
            }
            if let Some(message) = check.message {
                println!("{message}");
            }
        }
        Commands::Config { base_url } => {
            let config = AppConfig {
                base_url,
                ..config
            };
            // Reject URLs the client cannot use before persisting them
            let _ = CassaClient::new(&config.base_url, config.http_config())?;
            config.save()?;
            println!("Saved base URL {}", config.base_url);
        }
        Commands::Version => {
            println!("{LOGO}");
            println!("Cassa v{VERSION}");
            println!("A terminal admin client for the Cassa banking API");
        }
    }
    Ok(())
}
