use safeact_action::StatusCode;
use thiserror::Error;

/// Failure reported by an [`AuthProvider`](crate::AuthProvider).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AuthError {
    /// The provider refused the credentials or the request.
    ///
    /// The message is the provider's own and is shown to the user as-is.
    #[error("{0}")]
    Rejected(String),

    /// The provider could not be reached or failed internally.
    #[error("auth provider unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Creates a [`AuthError::Rejected`].
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Creates a [`AuthError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Status code the failed action reports.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Returns `true` if retrying later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_keeps_provider_message() {
        let err = AuthError::rejected("Invalid login credentials");
        assert_eq!(err.to_string(), "Invalid login credentials");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(!err.is_retryable());
    }

    #[test]
    fn unavailable_is_503() {
        let err = AuthError::unavailable("connection reset");
        assert_eq!(err.to_string(), "auth provider unavailable: connection reset");
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.is_retryable());
    }
}
