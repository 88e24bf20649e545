//! Client configuration.
//!
//! [`ClientConfig`] is the single source of truth for all runtime settings.
//! It is built once at startup -- from a TOML file, from defaults, or from
//! CLI overrides applied by `main` -- and injected into the services at
//! construction.  Nothing in the domain or application layers reads
//! process-global state.
//!
//! Fields carry serde defaults so a partial config file (or none at all)
//! works on first run:
//!
//! ```toml
//! backend_url = "http://localhost:8080"
//! suggestion_limit = 5
//! log_filter = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error reading config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// All runtime configuration for the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the registry API.  Resource paths (`/horses`,
    /// `/owners`) are appended to this.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Maximum number of results for the parent autocomplete searches.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u32,

    /// `tracing` filter directive, e.g. `"info"` or `"paddock_client=debug"`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl ClientConfig {
    /// Reads a config file, applying field defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            suggestion_limit: default_suggestion_limit(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_suggestion_limit() -> u32 {
    5
}

fn default_log_filter() -> String {
    "info".to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
