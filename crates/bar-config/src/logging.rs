//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence when set; otherwise the configured
//! `BAR_LOG_LEVEL` applies to every target.

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;
use crate::error::{ConfigError, ConfigResult};

/// Builds the filter for `level`, honoring `RUST_LOG` if present.
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Installs the global fmt subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(level: LogLevel) -> ConfigResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Whichever test installs first wins; the second attempt must error
        let _ = init(LogLevel::Debug);
        assert!(matches!(init(LogLevel::Info), Err(ConfigError::Logging(_))));
    }
}
