use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::action::Action;
use crate::envelope::ActionEnvelope;
use crate::error::ActionError;

/// Type-erased action that exchanges JSON envelopes.
#[async_trait]
trait ErasedAction: Send + Sync {
    async fn dispatch(&self, raw: Value) -> Result<Value, ActionError>;
}

#[async_trait]
impl<A> ErasedAction for A
where
    A: Action<Input = Value>,
    A::Output: Serialize,
{
    async fn dispatch(&self, raw: Value) -> Result<Value, ActionError> {
        let state = self.call(raw).await?;
        serde_json::to_value(ActionEnvelope::from(state)).map_err(ActionError::encode)
    }
}

/// Registry of named actions, addressable the way a server-action
/// endpoint is: by name, with raw JSON in and an envelope out.
///
/// Actions are stored as `Arc<dyn ...>` to allow shared ownership across
/// concurrent dispatches.
///
/// # Example
///
/// ```rust
/// use safeact_action::{ActionError, ActionRegistry, ActionState, action_fn};
/// use serde_json::Value;
///
/// let mut registry = ActionRegistry::new();
/// registry.register(
///     "echo",
///     action_fn(|raw: Value| async move { Ok::<_, ActionError>(ActionState::success(raw, "Success")) }),
/// );
///
/// assert!(registry.contains("echo"));
/// assert!(!registry.contains("unknown"));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn ErasedAction>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action. Overwrites any existing action with the same name.
    pub fn register<A>(&mut self, name: impl Into<String>, action: A)
    where
        A: Action<Input = Value> + 'static,
        A::Output: Serialize,
    {
        self.actions.insert(name.into(), Arc::new(action));
    }

    /// Check whether an action with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Remove an action by name. Returns `true` if it was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.actions.remove(name).is_some()
    }

    /// Iterate over registered names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Runs the named action on `raw` and returns its serialised
    /// [`ActionEnvelope`].
    ///
    /// # Errors
    ///
    /// [`ActionError::UnknownAction`] if nothing is registered under
    /// `name`; otherwise whatever the action's call reports.
    pub async fn dispatch(&self, name: &str, raw: Value) -> Result<Value, ActionError> {
        let Some(action) = self.actions.get(name) else {
            tracing::warn!(action = name, "dispatch to unknown action");
            return Err(ActionError::UnknownAction(name.to_owned()));
        };
        tracing::debug!(action = name, "dispatching action");
        action.dispatch(raw).await
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("count", &self.actions.len())
            .field("names", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::action::action_fn;
    use crate::state::ActionState;

    fn echo_registry() -> ActionRegistry {
        let mut reg = ActionRegistry::new();
        reg.register(
            "echo",
            action_fn(|raw: Value| async move {
                Ok::<_, ActionError>(ActionState::success(raw, "Success"))
            }),
        );
        reg
    }

    #[test]
    fn empty_registry() {
        let reg = ActionRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
        assert!(!reg.contains("anything"));
    }

    #[test]
    fn unregister() {
        let mut reg = echo_registry();
        assert!(reg.unregister("echo"));
        assert!(reg.is_empty());
        assert!(!reg.unregister("echo"));
    }

    #[test]
    fn overwrite_existing() {
        let mut reg = echo_registry();
        reg.register(
            "echo",
            action_fn(|_: Value| async { Ok::<_, ActionError>(ActionState::success(0u8, "Success")) }),
        );
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["echo"]);
    }

    #[tokio::test]
    async fn dispatch_returns_envelope_json() {
        let reg = echo_registry();
        let value = reg.dispatch("echo", json!({"a": 1})).await.unwrap();
        assert_eq!(
            value,
            json!({
                "type": "success",
                "success": true,
                "statusCode": 200,
                "message": "Success",
                "data": {"a": 1}
            })
        );
    }

    #[tokio::test]
    async fn dispatch_unknown_action() {
        let reg = echo_registry();
        assert_eq!(
            reg.dispatch("missing", json!(null)).await,
            Err(ActionError::UnknownAction("missing".into()))
        );
    }

    #[tokio::test]
    async fn dispatch_propagates_call_errors() {
        let mut reg = ActionRegistry::new();
        reg.register(
            "broken",
            action_fn(|_: Value| async {
                Err::<ActionState<()>, _>(ActionError::transport("connection refused"))
            }),
        );
        assert!(matches!(
            reg.dispatch("broken", json!({})).await,
            Err(ActionError::Transport(_))
        ));
    }

    #[test]
    fn debug_format() {
        let reg = echo_registry();
        let debug = format!("{reg:?}");
        assert!(debug.contains("ActionRegistry"));
        assert!(debug.contains("count: 1"));
    }
}
