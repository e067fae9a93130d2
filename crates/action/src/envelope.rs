//! Wire form of [`ActionState`].
//!
//! [`ActionEnvelope`] is the flat, camelCase JSON object exchanged with
//! callers that cannot see the Rust enum:
//!
//! ```json
//! {"type":"error","success":false,"statusCode":400,"message":"Bad request",
//!  "fieldErrors":{"email":["Required"]}}
//! ```
//!
//! Faults put their cause in `error` and use `"type": "fault"`.

use http::StatusCode;
use safeact_validator::foundation::FieldErrors;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::EnvelopeError;
use crate::state::{ActionKind, ActionState};

/// Flat serialisable envelope for one action outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ActionEnvelope<T> {
    /// Classification tag.
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// `true` only for successful outcomes.
    pub success: bool,
    /// Numeric status code.
    pub status_code: u16,
    /// Human-readable summary.
    pub message: String,
    /// Output payload; present only on success.
    ///
    /// An explicit `"data": null` counts as present when `T` accepts null,
    /// so unit and `Option` outputs survive the round trip.
    #[serde(
        default,
        deserialize_with = "deserialize_data",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<T>,
    /// Error text for domain failures and fault causes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-field validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

fn deserialize_data<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::deserialize(Value::Null).ok());
    }
    T::deserialize(value)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

impl<T> From<ActionState<T>> for ActionEnvelope<T> {
    fn from(state: ActionState<T>) -> Self {
        let kind = state.kind();
        let status_code = state.status().as_u16();
        match state {
            ActionState::Success { data, message, .. } => Self {
                kind,
                success: true,
                status_code,
                message,
                data: Some(data),
                error: None,
                field_errors: None,
            },
            ActionState::ValidationError {
                field_errors,
                message,
                ..
            } => Self {
                kind,
                success: false,
                status_code,
                message,
                data: None,
                error: None,
                field_errors: Some(field_errors),
            },
            ActionState::DomainError { error, message, .. } => Self {
                kind,
                success: false,
                status_code,
                message,
                data: None,
                error: Some(error),
                field_errors: None,
            },
            ActionState::Fault { cause, message } => Self {
                kind,
                success: false,
                status_code,
                message,
                data: None,
                error: Some(cause),
                field_errors: None,
            },
        }
    }
}

impl<T> TryFrom<ActionEnvelope<T>> for ActionState<T> {
    type Error = EnvelopeError;

    /// Rebuilds the sum type. `data` wins over every other field, so an
    /// envelope carrying data is a success even if it also carries stale
    /// `error` or `fieldErrors`.
    fn try_from(envelope: ActionEnvelope<T>) -> Result<Self, Self::Error> {
        let status = StatusCode::from_u16(envelope.status_code)
            .map_err(|_| EnvelopeError::InvalidStatus(envelope.status_code))?;

        if let Some(data) = envelope.data {
            return Ok(Self::success_with_status(data, envelope.message, status));
        }

        if envelope.success {
            return Err(EnvelopeError::SuccessWithoutData);
        }

        match envelope.kind {
            ActionKind::Success => Err(EnvelopeError::SuccessWithoutData),
            ActionKind::Fault => Ok(Self::Fault {
                cause: envelope.error.unwrap_or_else(|| envelope.message.clone()),
                message: envelope.message,
            }),
            ActionKind::Error => {
                if status.is_success() {
                    return Err(EnvelopeError::InconsistentStatus {
                        kind: envelope.kind,
                        status: envelope.status_code,
                    });
                }
                match (envelope.field_errors, envelope.error) {
                    (Some(field_errors), _) if !field_errors.is_empty() => Ok(
                        Self::validation_error_with_status(field_errors, envelope.message, status),
                    ),
                    (_, Some(error)) => Ok(Self::domain_error_with_status(
                        error,
                        envelope.message,
                        status,
                    )),
                    _ => Err(EnvelopeError::MissingOutcome),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn validation_envelope_wire_shape() {
        let errors: FieldErrors = [("email", "Required")].into_iter().collect();
        let state = ActionState::<()>::validation_error(errors, "Bad request");
        let value = serde_json::to_value(ActionEnvelope::from(state)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "error",
                "success": false,
                "statusCode": 400,
                "message": "Bad request",
                "fieldErrors": {"email": ["Required"]}
            })
        );
    }

    #[test]
    fn success_envelope_wire_shape() {
        let state = ActionState::success(json!({"id": 7}), "Login success!");
        let value = serde_json::to_value(ActionEnvelope::from(state)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "success",
                "success": true,
                "statusCode": 200,
                "message": "Login success!",
                "data": {"id": 7}
            })
        );
    }

    #[test]
    fn fault_cause_travels_in_error() {
        let envelope = ActionEnvelope::from(ActionState::<()>::fault("socket closed"));
        assert_eq!(envelope.kind, ActionKind::Fault);
        assert_eq!(envelope.status_code, 500);
        assert_eq!(envelope.error.as_deref(), Some("socket closed"));

        let back = ActionState::try_from(envelope).unwrap();
        assert_eq!(back, ActionState::fault("socket closed"));
    }

    #[test]
    fn data_wins_over_stale_fields() {
        let envelope: ActionEnvelope<u32> = serde_json::from_value(json!({
            "type": "error",
            "success": false,
            "statusCode": 400,
            "message": "mixed",
            "data": 5,
            "error": "stale",
            "fieldErrors": {"email": ["Required"]}
        }))
        .unwrap();

        let state = ActionState::try_from(envelope).unwrap();
        assert_eq!(state.data(), Some(&5));
        assert_eq!(state.status(), StatusCode::OK);
    }

    #[test]
    fn domain_error_roundtrips() {
        let state = ActionState::<u32>::domain_error_with_status(
            "Invalid login credentials",
            "Login error!",
            StatusCode::UNAUTHORIZED,
        );
        let back = ActionState::try_from(ActionEnvelope::from(state.clone())).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn rejects_envelope_without_outcome() {
        let envelope: ActionEnvelope<u32> = serde_json::from_value(json!({
            "type": "error",
            "success": false,
            "statusCode": 400,
            "message": "?"
        }))
        .unwrap();
        assert_eq!(
            ActionState::try_from(envelope).unwrap_err(),
            EnvelopeError::MissingOutcome
        );
    }

    #[test]
    fn rejects_error_with_2xx_status() {
        let envelope: ActionEnvelope<u32> = serde_json::from_value(json!({
            "type": "error",
            "success": false,
            "statusCode": 200,
            "message": "?",
            "error": "nope"
        }))
        .unwrap();
        assert!(matches!(
            ActionState::try_from(envelope),
            Err(EnvelopeError::InconsistentStatus { status: 200, .. })
        ));
    }

    #[test]
    fn rejects_success_without_data() {
        let envelope: ActionEnvelope<u32> = serde_json::from_value(json!({
            "type": "success",
            "success": true,
            "statusCode": 200,
            "message": "Success"
        }))
        .unwrap();
        assert_eq!(
            ActionState::try_from(envelope).unwrap_err(),
            EnvelopeError::SuccessWithoutData
        );
    }

    #[test]
    fn unit_success_roundtrips() {
        let state = ActionState::success((), "Logged out");
        let value = serde_json::to_value(ActionEnvelope::from(state.clone())).unwrap();
        assert_eq!(value["data"], Value::Null);

        let envelope: ActionEnvelope<()> = serde_json::from_value(value).unwrap();
        assert_eq!(envelope.data, Some(()));
        assert_eq!(ActionState::try_from(envelope).unwrap(), state);
    }

    #[test]
    fn null_data_for_optional_output_is_present() {
        let envelope: ActionEnvelope<Option<u32>> = serde_json::from_value(json!({
            "type": "success",
            "success": true,
            "statusCode": 200,
            "message": "Nothing found",
            "data": null
        }))
        .unwrap();
        assert_eq!(
            ActionState::try_from(envelope).unwrap(),
            ActionState::success(None, "Nothing found")
        );
    }

    #[test]
    fn null_data_is_absent_when_output_rejects_null() {
        let envelope: ActionEnvelope<u32> = serde_json::from_value(json!({
            "type": "error",
            "success": false,
            "statusCode": 400,
            "message": "Login error!",
            "data": null,
            "error": "nope"
        }))
        .unwrap();
        assert_eq!(envelope.data, None);
        assert_eq!(
            ActionState::try_from(envelope).unwrap(),
            ActionState::domain_error("nope", "Login error!")
        );
    }

    #[test]
    fn rejects_out_of_range_status() {
        let envelope: ActionEnvelope<u32> = serde_json::from_value(json!({
            "type": "error",
            "success": false,
            "statusCode": 42,
            "message": "?",
            "error": "x"
        }))
        .unwrap();
        assert_eq!(
            ActionState::try_from(envelope).unwrap_err(),
            EnvelopeError::InvalidStatus(42)
        );
    }
}
