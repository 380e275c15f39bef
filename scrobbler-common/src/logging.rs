//! Logging initialization
//!
//! `RUST_LOG` takes priority over the configured level. A malformed
//! `RUST_LOG` is ignored and the configured level is used instead.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::{Error, Result};

/// Install the global fmt subscriber
///
/// Safe to call more than once: if a global subscriber is already set the
/// call is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = resolve_filter(config)?;

    if tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already installed, keeping it");
    }

    Ok(())
}

/// Pick the active filter: `RUST_LOG` if set and valid, else the configured level
pub fn resolve_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => level_filter(&config.level),
    }
}

/// Build an `EnvFilter` from a configured level or directive string
pub fn level_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| Error::Config(format!("invalid log level '{}': {}", level, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_accepts_levels_and_directives() {
        assert!(level_filter("info").is_ok());
        assert!(level_filter("debug").is_ok());
        assert!(level_filter("scrobbler_filters=trace,warn").is_ok());
    }

    #[test]
    fn test_level_filter_rejects_bad_level() {
        let err = level_filter("scrobbler_filters=loud").unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("loud")));
    }

    #[test]
    fn test_init_logging_twice_is_ok() {
        let config = LoggingConfig::default();
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&config).is_ok());
    }
}
