use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::FutureExt;
use safeact_action::{Action, ActionError, ActionState};
use safeact_validator::foundation::FieldErrors;
use tokio::sync::watch;

use crate::callbacks::ActionCallbacks;
use crate::config::ControllerConfig;
use crate::state::{ControllerState, Phase};

/// How one `execute` call ended, from the caller's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement<T> {
    /// The action succeeded.
    Success(T),
    /// The input was rejected.
    Invalid(FieldErrors),
    /// The action reported a domain error.
    Failed(String),
    /// The call faulted (transport error, panic, timeout).
    Fault(String),
    /// A newer call started before this one settled; its outcome was
    /// discarded.
    Superseded,
}

impl<T> Settlement<T> {
    /// Returns `true` for [`Settlement::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Client-side state machine around one action.
///
/// Each [`execute`](Self::execute) takes a fresh invocation token. Only the
/// settlement of the latest token is applied to the state; older ones are
/// reported as [`Settlement::Superseded`] and leave the state alone.
///
/// State is published through a `tokio::sync::watch` channel, so any number
/// of observers can [`subscribe`](Self::subscribe) and react to changes.
///
/// # Example
///
/// ```rust,ignore
/// let controller = ActionController::new(login)
///     .with_callbacks(
///         ActionCallbacks::new()
///             .on_success(|session, message| toast(message))
///             .on_error(|error| notice(error)),
///     );
///
/// match controller.execute(form).await {
///     Settlement::Success(session) => navigate_home(session),
///     _ => render(controller.state()),
/// }
/// ```
pub struct ActionController<A: Action> {
    action: A,
    callbacks: ActionCallbacks<A::Output>,
    config: ControllerConfig,
    state: watch::Sender<ControllerState<A::Output>>,
    latest: AtomicU64,
}

impl<A> ActionController<A>
where
    A: Action,
    A::Output: Clone + Sync,
{
    /// Wraps `action` with no callbacks and the default config.
    pub fn new(action: A) -> Self {
        let (state, _) = watch::channel(ControllerState::default());
        Self {
            action,
            callbacks: ActionCallbacks::default(),
            config: ControllerConfig::default(),
            state,
            latest: AtomicU64::new(0),
        }
    }

    /// Sets the lifecycle callbacks.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_callbacks(mut self, callbacks: ActionCallbacks<A::Output>) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Replaces the controller configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ControllerState<A::Output> {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ControllerState<A::Output>> {
        self.state.subscribe()
    }

    /// Returns `true` while the latest call is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Replaces the field errors without invoking the action, e.g. to clear
    /// a message once the user edits the field.
    pub fn set_field_errors(&self, field_errors: Option<FieldErrors>) {
        self.state.send_modify(|state| state.field_errors = field_errors);
    }

    /// Invokes the action and applies its outcome.
    ///
    /// `on_complete` fires exactly once per call, including when the
    /// returned future is dropped before it settles.
    pub async fn execute(&self, input: A::Input) -> Settlement<A::Output> {
        // The token only moves under the watch lock, so a settlement that
        // checks it under the same lock cannot interleave with a new call.
        let mut token = 0;
        self.state.send_modify(|state| {
            token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            state.phase = Phase::Loading;
            state.error = None;
            state.fault = None;
            state.field_errors = None;
        });
        tracing::debug!(token, "execute started");

        let mut guard = CompletionGuard {
            controller: self,
            token,
            settled: false,
        };

        let outcome = self.invoke(input).await;
        guard.settled = true;
        self.settle(token, outcome)
    }

    async fn invoke(&self, input: A::Input) -> Result<ActionState<A::Output>, ActionError> {
        let call = AssertUnwindSafe(self.action.call(input)).catch_unwind();

        let result = match self.config.timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => return Err(ActionError::Timeout(limit)),
            },
            None => call.await,
        };

        match result {
            Ok(outcome) => outcome,
            Err(payload) => Err(ActionError::Panicked(panic_message(payload.as_ref()))),
        }
    }

    fn settle(
        &self,
        token: u64,
        outcome: Result<ActionState<A::Output>, ActionError>,
    ) -> Settlement<A::Output> {
        let outcome = outcome.unwrap_or_else(|err| ActionState::fault(err.to_string()));
        if let ActionState::Fault { cause, .. } = &outcome {
            tracing::warn!(token, cause = %cause, "action faulted");
        }

        let applied = self.state.send_if_modified(|state| {
            if !self.is_latest(token) {
                return false;
            }
            apply(state, &outcome);
            true
        });
        if !applied {
            tracing::debug!(token, "discarding stale settlement");
            return Settlement::Superseded;
        }

        match outcome {
            ActionState::Success { data, message, .. } => {
                let message = if message.is_empty() {
                    self.config.default_success_message.as_str()
                } else {
                    message.as_str()
                };
                self.callbacks.success(&data, message);
                Settlement::Success(data)
            }
            ActionState::ValidationError { field_errors, .. } => Settlement::Invalid(field_errors),
            ActionState::DomainError { error, .. } => {
                self.callbacks.error(&error);
                Settlement::Failed(error)
            }
            ActionState::Fault { cause, .. } => {
                self.callbacks.error(&cause);
                Settlement::Fault(cause)
            }
        }
    }
}

/// Writes a settled outcome into the published state.
fn apply<T: Clone>(state: &mut ControllerState<T>, outcome: &ActionState<T>) {
    let kind = outcome.kind();
    state.phase = Phase::Settled(kind);
    state.kind = Some(kind);
    state.message = Some(outcome.message().to_owned());

    match outcome {
        ActionState::Success { data, status, .. } => {
            state.status_code = Some(*status);
            state.data = Some(data.clone());
            state.is_success = true;
            state.error = None;
            state.fault = None;
            state.field_errors = None;
        }
        ActionState::ValidationError {
            field_errors,
            status,
            ..
        } => {
            state.status_code = Some(*status);
            state.field_errors = Some(field_errors.clone());
        }
        ActionState::DomainError { error, status, .. } => {
            state.status_code = Some(*status);
            state.error = Some(error.clone());
        }
        ActionState::Fault { cause, .. } => {
            state.fault = Some(cause.clone());
        }
    }
}

impl<A: Action> ActionController<A> {
    /// Callers must hold the watch lock for the answer to stay true.
    fn is_latest(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

impl<A: Action> std::fmt::Debug for ActionController<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionController")
            .field("config", &self.config)
            .field("callbacks", &self.callbacks)
            .field("latest", &self.latest.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Fires `on_complete` when an `execute` call ends, however it ends.
struct CompletionGuard<'a, A: Action> {
    controller: &'a ActionController<A>,
    token: u64,
    settled: bool,
}

impl<A: Action> Drop for CompletionGuard<'_, A> {
    fn drop(&mut self) {
        let controller = self.controller;
        let token = self.token;
        if !self.settled {
            let reset = controller.state.send_if_modified(|state| {
                if !controller.is_latest(token) || state.phase != Phase::Loading {
                    return false;
                }
                state.phase = Phase::Idle;
                true
            });
            if reset {
                tracing::debug!(token, "execute dropped before settling");
            }
        }
        controller.callbacks.complete();
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}
