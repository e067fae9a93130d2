use std::time::Duration;

use crate::state::ActionKind;

/// Error type for everything that can go wrong around an action call
/// without the action itself reporting it.
///
/// Validation and domain failures are not errors: they are
/// [`ActionState`](crate::ActionState) values. An `ActionError` means the
/// call never produced a trustworthy outcome, and the controller turns it
/// into a fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ActionError {
    /// The call could not reach the action (network, IPC, closed channel).
    #[error("transport: {0}")]
    Transport(String),

    /// Typed input could not be encoded into the raw request value.
    #[error("encode failed: {0}")]
    Encode(String),

    /// The response could not be decoded into an envelope.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The call completed without producing an envelope.
    #[error("action returned no response")]
    EmptyResponse,

    /// The response decoded but does not describe a valid outcome.
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(#[from] EnvelopeError),

    /// The action panicked while running.
    #[error("action panicked: {0}")]
    Panicked(String),

    /// The call did not settle within the configured timeout.
    #[error("action timed out after {0:?}")]
    Timeout(Duration),

    /// No action is registered under the requested name.
    #[error("unknown action `{0}`")]
    UnknownAction(String),
}

impl ActionError {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a decode error from any displayable cause.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// Create an encode error from any displayable cause.
    pub fn encode(err: impl std::fmt::Display) -> Self {
        Self::Encode(err.to_string())
    }
}

/// Shape violations found when rebuilding an
/// [`ActionState`](crate::ActionState) from an
/// [`ActionEnvelope`](crate::ActionEnvelope).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum EnvelopeError {
    /// Neither `data`, `error` nor non-empty `fieldErrors` is present.
    #[error("envelope carries no outcome")]
    MissingOutcome,

    /// A success envelope without `data`.
    #[error("success envelope carries no data")]
    SuccessWithoutData,

    /// `statusCode` contradicts `type`.
    #[error("status {status} is inconsistent with type `{kind}`")]
    InconsistentStatus {
        /// Declared kind.
        kind: ActionKind,
        /// Declared status.
        status: u16,
    },

    /// `statusCode` is not a valid HTTP status.
    #[error("invalid status code {0}")]
    InvalidStatus(u16),
}
