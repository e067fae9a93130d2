//! # safeact-log
//!
//! Logging bootstrap for binaries and tests built on safeact. Library
//! crates only emit `tracing` events; this crate installs the global
//! subscriber that formats them.
//!
//! ```no_run
//! use safeact_log::{Config, LoggerBuilder};
//!
//! let _guard = LoggerBuilder::from_config(Config::from_env()).build()?;
//! tracing::info!("ready");
//! # Ok::<(), safeact_log::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard, ReloadHandle};
pub use config::{Config, DisplayConfig, Format, Writer};
pub use error::{LogError, LogResult};

/// Initialise logging from the environment (`SAFEACT_LOG`, `RUST_LOG`,
/// `SAFEACT_LOG_FORMAT`).
pub fn auto_init() -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(Config::from_env()).build()
}
