//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format, Writer};

/// Primary filter variable.
pub const LOG_ENV: &str = "SAFEACT_LOG";
/// Format variable (`pretty`, `compact` or `json`).
pub const LOG_FORMAT_ENV: &str = "SAFEACT_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    ///
    /// Reads `SAFEACT_LOG`, falling back to `RUST_LOG`, and
    /// `SAFEACT_LOG_FORMAT`. Unknown formats keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_ENV).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV).as_deref().and_then(Format::parse) {
            config.format = format;
            if format == Format::Json {
                config.display.colors = false;
            }
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration (captured by the test harness, reloadable)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            writer: Writer::Test,
            display: DisplayConfig {
                colors: false,
                ..DisplayConfig::default()
            },
            reloadable: true,
            ..Self::default()
        }
    }
}
