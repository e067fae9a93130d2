use std::time::Duration;

use serde::Deserialize;

/// Controller settings.
///
/// `timeout` is off by default: a call that never settles keeps the
/// controller loading until the caller drops the `execute` future.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Message passed to `on_success` when the outcome carries an empty one.
    pub default_success_message: String,
    /// Upper bound on one call; an expired call settles as a fault.
    pub timeout: Option<Duration>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_success_message: "Success".to_owned(),
            timeout: None,
        }
    }
}

impl ControllerConfig {
    /// Sets the call timeout.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the fallback success message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_success_message(mut self, message: impl Into<String>) -> Self {
        self.default_success_message = message.into();
        self
    }
}
