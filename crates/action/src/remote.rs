//! Client-side view of actions that live behind a call boundary.
//!
//! A [`Transport`] moves raw JSON to a named action and brings back the
//! serialised envelope. [`RemoteAction`] decodes that envelope into an
//! [`ActionState`] and reports every way the round trip can break as an
//! [`ActionError`].

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::action::Action;
use crate::envelope::ActionEnvelope;
use crate::error::ActionError;
use crate::registry::ActionRegistry;
use crate::state::ActionState;

/// Carries a request to a named action.
///
/// `Ok(None)` means the call completed but produced no body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `payload` to the action called `name`.
    async fn send(&self, name: &str, payload: Value) -> Result<Option<Value>, ActionError>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn send(&self, name: &str, payload: Value) -> Result<Option<Value>, ActionError> {
        (**self).send(name, payload).await
    }
}

/// In-process transport: dispatches straight into the registry.
#[async_trait]
impl Transport for ActionRegistry {
    async fn send(&self, name: &str, payload: Value) -> Result<Option<Value>, ActionError> {
        self.dispatch(name, payload).await.map(Some)
    }
}

/// Action reached through a [`Transport`].
pub struct RemoteAction<T, O> {
    transport: T,
    name: String,
    _marker: PhantomData<fn() -> O>,
}

impl<T, O> RemoteAction<T, O> {
    /// Addresses the action called `name` through `transport`.
    pub fn new(transport: T, name: impl Into<String>) -> Self {
        Self {
            transport,
            name: name.into(),
            _marker: PhantomData,
        }
    }

    /// Name of the remote action.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl<T, O> Action for RemoteAction<T, O>
where
    T: Transport,
    O: DeserializeOwned + Send + 'static,
{
    type Input = Value;
    type Output = O;

    async fn call(&self, input: Value) -> Result<ActionState<O>, ActionError> {
        let body = self
            .transport
            .send(&self.name, input)
            .await?
            .ok_or(ActionError::EmptyResponse)?;
        if body.is_null() {
            return Err(ActionError::EmptyResponse);
        }
        let envelope: ActionEnvelope<O> = serde_json::from_value(body).map_err(ActionError::decode)?;
        Ok(ActionState::try_from(envelope)?)
    }
}

impl<T, O> std::fmt::Debug for RemoteAction<T, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteAction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::action::action_fn;
    use crate::error::EnvelopeError;

    struct Canned(Option<Value>);

    #[async_trait]
    impl Transport for Canned {
        async fn send(&self, _name: &str, _payload: Value) -> Result<Option<Value>, ActionError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn roundtrip_through_registry() {
        let mut registry = ActionRegistry::new();
        registry.register(
            "double",
            action_fn(|raw: Value| async move {
                let n = raw.as_u64().unwrap_or_default();
                Ok::<_, ActionError>(ActionState::success(n * 2, "Doubled"))
            }),
        );

        let remote = RemoteAction::<_, u64>::new(Arc::new(registry), "double");
        let state = remote.call(json!(21)).await.unwrap();
        assert_eq!(state, ActionState::success(42, "Doubled"));
    }

    #[tokio::test]
    async fn unit_output_roundtrip_through_registry() {
        let mut registry = ActionRegistry::new();
        registry.register(
            "logout",
            action_fn(|_: Value| async { Ok::<_, ActionError>(ActionState::success((), "Logged out")) }),
        );

        let remote = RemoteAction::<_, ()>::new(Arc::new(registry), "logout");
        let state = remote.call(json!({})).await.unwrap();
        assert_eq!(state, ActionState::success((), "Logged out"));
    }

    #[tokio::test]
    async fn missing_body_is_empty_response() {
        let remote = RemoteAction::<_, u64>::new(Canned(None), "x");
        assert_eq!(remote.call(json!({})).await, Err(ActionError::EmptyResponse));

        let remote = RemoteAction::<_, u64>::new(Canned(Some(Value::Null)), "x");
        assert_eq!(remote.call(json!({})).await, Err(ActionError::EmptyResponse));
    }

    #[tokio::test]
    async fn garbage_body_is_decode_error() {
        let remote = RemoteAction::<_, u64>::new(Canned(Some(json!({"hello": 1}))), "x");
        assert!(matches!(remote.call(json!({})).await, Err(ActionError::Decode(_))));
    }

    #[tokio::test]
    async fn malformed_envelope_is_invalid() {
        let body = json!({"type": "error", "success": false, "statusCode": 400, "message": "?"});
        let remote = RemoteAction::<_, u64>::new(Canned(Some(body)), "x");
        assert_eq!(
            remote.call(json!({})).await,
            Err(ActionError::InvalidEnvelope(EnvelopeError::MissingOutcome))
        );
    }
}
