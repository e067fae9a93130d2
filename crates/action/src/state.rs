use std::fmt;

use http::StatusCode;
use safeact_validator::foundation::FieldErrors;
use serde::{Deserialize, Serialize};

/// Message carried by a fault when the caller did not supply one.
pub const FAULT_MESSAGE: &str = "Unexpected error";

/// Outcome of one action invocation.
///
/// Every invocation settles into exactly one variant; consumers must match
/// exhaustively instead of probing for optional fields:
/// - `Success` → the handler produced `data`
/// - `ValidationError` → the input was rejected before the handler ran
/// - `DomainError` → the handler ran and reported a business failure
/// - `Fault` → something outside the handler contract went wrong
///   (transport failure, panic, timeout)
///
/// Constructors keep `status` consistent with the variant: success is
/// always 2xx, validation and domain errors are never 2xx.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionState<T> {
    /// The handler succeeded.
    Success {
        /// Output produced by the handler.
        data: T,
        /// Human-readable summary.
        message: String,
        /// A 2xx status.
        status: StatusCode,
    },

    /// The input failed schema validation; the handler was never invoked.
    ValidationError {
        /// Per-field validation messages.
        field_errors: FieldErrors,
        /// Human-readable summary.
        message: String,
        /// A non-2xx status.
        status: StatusCode,
    },

    /// The handler ran and reported a business failure.
    DomainError {
        /// Error text, usually from the remote collaborator.
        error: String,
        /// Human-readable summary.
        message: String,
        /// A non-2xx status.
        status: StatusCode,
    },

    /// An unexpected failure escaped the normal success/error handling.
    Fault {
        /// Description of what went wrong.
        cause: String,
        /// Human-readable summary.
        message: String,
    },
}

impl<T> ActionState<T> {
    /// Success with status 200.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::success_with_status(data, message, StatusCode::OK)
    }

    /// Success with a custom status. A non-2xx status is replaced by 200.
    pub fn success_with_status(data: T, message: impl Into<String>, status: StatusCode) -> Self {
        let status = if status.is_success() {
            status
        } else {
            StatusCode::OK
        };
        Self::Success {
            data,
            message: message.into(),
            status,
        }
    }

    /// Validation failure with status 400.
    pub fn validation_error(field_errors: FieldErrors, message: impl Into<String>) -> Self {
        Self::validation_error_with_status(field_errors, message, StatusCode::BAD_REQUEST)
    }

    /// Validation failure with a custom status. A 2xx status is replaced by 400.
    pub fn validation_error_with_status(
        field_errors: FieldErrors,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self::ValidationError {
            field_errors,
            message: message.into(),
            status: failure_status(status),
        }
    }

    /// Domain failure with status 400.
    pub fn domain_error(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::domain_error_with_status(error, message, StatusCode::BAD_REQUEST)
    }

    /// Domain failure with a custom status. A 2xx status is replaced by 400.
    pub fn domain_error_with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self::DomainError {
            error: error.into(),
            message: message.into(),
            status: failure_status(status),
        }
    }

    /// Fault with the default [`FAULT_MESSAGE`].
    pub fn fault(cause: impl Into<String>) -> Self {
        Self::Fault {
            cause: cause.into(),
            message: FAULT_MESSAGE.to_owned(),
        }
    }

    /// Classification tag of this outcome.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Success { .. } => ActionKind::Success,
            Self::ValidationError { .. } | Self::DomainError { .. } => ActionKind::Error,
            Self::Fault { .. } => ActionKind::Fault,
        }
    }

    /// Returns `true` for [`ActionState::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Status code of the outcome. Faults report 500.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success { status, .. }
            | Self::ValidationError { status, .. }
            | Self::DomainError { status, .. } => *status,
            Self::Fault { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable summary.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. }
            | Self::ValidationError { message, .. }
            | Self::DomainError { message, .. }
            | Self::Fault { message, .. } => message,
        }
    }

    /// Output data, present only on success.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Field errors, present only on validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::ValidationError { field_errors, .. } => Some(field_errors),
            _ => None,
        }
    }

    /// Error text, present only on domain failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::DomainError { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Maps the success payload, leaving other outcomes untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionState<U> {
        match self {
            Self::Success {
                data,
                message,
                status,
            } => ActionState::Success {
                data: f(data),
                message,
                status,
            },
            Self::ValidationError {
                field_errors,
                message,
                status,
            } => ActionState::ValidationError {
                field_errors,
                message,
                status,
            },
            Self::DomainError {
                error,
                message,
                status,
            } => ActionState::DomainError {
                error,
                message,
                status,
            },
            Self::Fault { cause, message } => ActionState::Fault { cause, message },
        }
    }
}

fn failure_status(status: StatusCode) -> StatusCode {
    if status.is_success() {
        StatusCode::BAD_REQUEST
    } else {
        status
    }
}

/// Classification tag carried on the wire as `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// The action succeeded.
    Success,
    /// Validation or domain failure.
    Error,
    /// Unexpected failure.
    Fault,
}

impl ActionKind {
    /// Wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Fault => "fault",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
