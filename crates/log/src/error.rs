//! Error handling for safeact-log

/// Result alias for logging operations.
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while setting up logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The filter directive string could not be parsed.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected directive string.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("logger initialisation failed: {0}")]
    Init(String),

    /// Runtime reconfiguration failed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl LogError {
    pub(crate) fn filter(filter: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }
}
