use safeact_action::{ActionKind, StatusCode};
use safeact_validator::foundation::FieldErrors;

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Nothing has run yet, or the latest call was dropped before settling.
    #[default]
    Idle,
    /// The latest call is in flight.
    Loading,
    /// The latest call settled with the given kind.
    Settled(ActionKind),
}

/// Observable controller state.
///
/// `error`, `fault` and `field_errors` are cleared when a call starts.
/// `data` and `is_success` survive failed calls and are only replaced by
/// the next success.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState<T> {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Payload of the most recent success.
    pub data: Option<T>,
    /// Error text of the latest domain failure.
    pub error: Option<String>,
    /// Cause of the latest fault.
    pub fault: Option<String>,
    /// Per-field messages of the latest validation failure.
    pub field_errors: Option<FieldErrors>,
    /// Status of the latest settlement that carried one.
    pub status_code: Option<StatusCode>,
    /// Message of the latest settlement.
    pub message: Option<String>,
    /// `true` once a call succeeded.
    pub is_success: bool,
    /// Kind of the latest settlement.
    pub kind: Option<ActionKind>,
}

impl<T> Default for ControllerState<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            error: None,
            fault: None,
            field_errors: None,
            status_code: None,
            message: None,
            is_success: false,
            kind: None,
        }
    }
}

impl<T> ControllerState<T> {
    /// Returns `true` while the latest call is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}
