//! Logger builder implementation
//!
//! This module is organized into:
//! - `format`: Format layer creation macros (reduces duplication)
//! - `reload`: Runtime filter reload logic

#[macro_use]
mod format;
mod reload;

pub use reload::ReloadHandle;

use tracing_subscriber::fmt::TestWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format, Writer};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger alive
///
/// Holds the reload handle and the service root span. Dropping it exits
/// the root span; the global subscriber itself stays installed.
#[derive(Debug)]
pub struct LoggerGuard {
    reload_handle: Option<ReloadHandle>,
    _root_span: Option<tracing::span::EnteredSpan>,
}

impl LoggerGuard {
    /// Handle for changing the filter at runtime, if the config asked for
    /// one.
    pub fn reload_handle(&self) -> Option<&ReloadHandle> {
        self.reload_handle.as_ref()
    }
}

/// Installs the registry with the filter and format layers.
macro_rules! init_subscriber {
    ($filter_layer:expr, $fmt_layer:expr) => {
        Registry::default()
            .with($filter_layer)
            .with($fmt_layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and initialize the logger
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::filter(&self.config.level, e))?;

        let (filter_layer, reload_handle) =
            reload::create_filter_layer(filter, &self.config.level, self.config.reloadable);

        let writer = make_writer(self.config.writer);
        let display = &self.config.display;

        match self.config.format {
            Format::Pretty => {
                init_subscriber!(filter_layer, create_fmt_layer!(pretty, display, writer))?;
            }
            Format::Compact => {
                init_subscriber!(filter_layer, create_fmt_layer!(compact, display, writer))?;
            }
            Format::Json => {
                init_subscriber!(filter_layer, create_json_layer!(display, writer))?;
            }
        }

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        tracing::debug!(
            level = %self.config.level,
            format = ?self.config.format,
            "logger initialised"
        );

        Ok(LoggerGuard {
            reload_handle,
            _root_span: root_span,
        })
    }
}

fn make_writer(writer: Writer) -> BoxMakeWriter {
    match writer {
        Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
        Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
        Writer::Test => BoxMakeWriter::new(TestWriter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_reported_before_install() {
        let config = Config {
            level: "safeact=loud".to_string(),
            ..Config::test()
        };
        let err = LoggerBuilder::from_config(config).build().unwrap_err();
        assert!(matches!(err, LogError::Filter { ref filter, .. } if filter == "safeact=loud"));
    }
}
