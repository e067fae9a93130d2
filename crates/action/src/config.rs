use http::StatusCode;
use serde::Deserialize;

/// Settings applied by [`ActionRunner`](crate::ActionRunner) when the
/// schema rejects an input.
///
/// ```rust
/// use safeact_action::RunnerConfig;
///
/// let config: RunnerConfig = serde_json::from_str(r#"{"validation_status": 422}"#).unwrap();
/// assert_eq!(config.validation_status, 422);
/// assert_eq!(config.validation_message, "Bad request");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Status reported for validation failures. 2xx or out-of-range values
    /// fall back to 400.
    pub validation_status: u16,
    /// Message reported for validation failures.
    pub validation_message: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            validation_status: 400,
            validation_message: "Bad request".to_owned(),
        }
    }
}

impl RunnerConfig {
    /// Sets the validation status.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_validation_status(mut self, status: StatusCode) -> Self {
        self.validation_status = status.as_u16();
        self
    }

    /// Sets the validation message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = message.into();
        self
    }

    pub(crate) fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.validation_status).unwrap_or(StatusCode::BAD_REQUEST)
    }
}
