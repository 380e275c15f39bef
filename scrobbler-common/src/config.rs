//! Filter configuration loading
//!
//! The hosting scrobbler reads a single TOML file that selects which
//! submission filters are active:
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [[filters]]
//! kind = "musicbrainz"
//! enabled = true
//! ```
//!
//! A missing file is not fatal: the compiled defaults are used instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::{Error, Result};

/// Directory name under the platform config dir
const APP_DIR: &str = "scrobbler";
/// Config file name inside `APP_DIR`
const CONFIG_FILE: &str = "filters.toml";

fn default_log_level() -> String {
    "info".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_filters() -> Vec<FilterSpec> {
    vec![FilterSpec::new(FilterKind::MusicBrainz)]
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or `EnvFilter` directive string, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Known filter implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    /// Drop submissions without a MusicBrainz track identifier
    #[serde(rename = "musicbrainz", alias = "track_identifier")]
    MusicBrainz,
}

/// One `[[filters]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub kind: FilterKind,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Record field to inspect, overriding the filter's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl FilterSpec {
    pub fn new(kind: FilterKind) -> Self {
        Self {
            kind,
            enabled: true,
            field: None,
        }
    }
}

/// Root of the filter configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default = "default_filters")]
    pub filters: Vec<FilterSpec>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            filters: default_filters(),
        }
    }
}

impl FilterConfig {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FilterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
        info!("Loaded filter configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    ///
    /// Only a missing file falls back. Other I/O failures (unreadable
    /// directory, parent is not a directory) and parse or validation
    /// errors propagate.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Filter config {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }

    /// Reject entries that can never match anything
    pub fn validate(&self) -> Result<()> {
        for (i, spec) in self.filters.iter().enumerate() {
            if let Some(field) = &spec.field {
                if field.is_empty() {
                    return Err(Error::Config(format!(
                        "filters[{}] ({:?}): field override must not be empty",
                        i, spec.kind
                    )));
                }
            }
        }
        Ok(())
    }

    /// Entries that should be registered
    pub fn enabled_filters(&self) -> impl Iterator<Item = &FilterSpec> {
        self.filters.iter().filter(|spec| spec.enabled)
    }
}

/// Default configuration file path for the platform
///
/// `~/.config/scrobbler/filters.toml` on Linux, the equivalent config
/// directory elsewhere.
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
}
