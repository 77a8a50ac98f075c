//! Log setup.
//!
//! The terminal belongs to the TUI, so events go to a file. `RUST_LOG`
//! overrides the default filter.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "cassa=info";
const LOG_FILE_NAME: &str = "cassa.log";

/// Default log location: `<cache dir>/cassa/cassa.log`.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("cassa").join(LOG_FILE_NAME))
}

/// Installs the global subscriber writing to `path`.
///
/// # Errors
/// Returns an error if the log file or its directory cannot be created.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber installed earlier (tests) wins
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(())
}
