//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/cassa/config.json`
//! - macOS: `~/Library/Application Support/cassa/config.json`
//! - Windows: `%APPDATA%/cassa/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::HttpConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "cassa";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Base URL of a locally running banking backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const fn default_timeout_secs() -> u64 {
    crate::client::http::DEFAULT_TIMEOUT_SECS
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Missing fields fall back to their defaults, so older or hand-edited
/// files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Root URL of the banking API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk, or the defaults if that fails.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, or the file
    /// cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(Duration::from_secs(self.request_timeout_secs.max(1)))
    }
}

// ============================================================================
// Tests
// ============================================================================
