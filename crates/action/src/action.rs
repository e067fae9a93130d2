use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::ActionError;
use crate::state::ActionState;

/// A callable action as seen by its caller.
///
/// `Ok` carries the outcome the action reported, including validation and
/// domain failures. `Err` means the call itself broke down (transport,
/// encoding, malformed response) and no outcome is available.
///
/// # Object Safety
///
/// This trait is object-safe for fixed `Input`/`Output` and can be used as
/// `Arc<dyn Action<Input = I, Output = O>>`.
#[async_trait]
pub trait Action: Send + Sync {
    /// Input accepted by the call.
    type Input: Send;
    /// Output carried by a success.
    type Output: Send;

    /// Invokes the action.
    async fn call(&self, input: Self::Input) -> Result<ActionState<Self::Output>, ActionError>;
}

#[async_trait]
impl<A> Action for Arc<A>
where
    A: Action + ?Sized,
{
    type Input = A::Input;
    type Output = A::Output;

    async fn call(&self, input: Self::Input) -> Result<ActionState<Self::Output>, ActionError> {
        (**self).call(input).await
    }
}

/// Action built from an async closure. See [`action_fn`].
pub struct ActionFn<F, I, O> {
    f: F,
    _marker: PhantomData<fn(I) -> O>,
}

/// Adapts an async closure into an [`Action`].
///
/// Useful for wiring a transport by hand and for driving a controller in
/// tests.
pub fn action_fn<F, Fut, I, O>(f: F) -> ActionFn<F, I, O>
where
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ActionState<O>, ActionError>> + Send + 'static,
{
    ActionFn {
        f,
        _marker: PhantomData,
    }
}

#[async_trait]
impl<F, Fut, I, O> Action for ActionFn<F, I, O>
where
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ActionState<O>, ActionError>> + Send + 'static,
    I: Send + 'static,
    O: Send + 'static,
{
    type Input = I;
    type Output = O;

    async fn call(&self, input: I) -> Result<ActionState<O>, ActionError> {
        (self.f)(input).await
    }
}

impl<F, I, O> std::fmt::Debug for ActionFn<F, I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionFn").finish_non_exhaustive()
    }
}

/// Typed front for an action that takes raw JSON.
///
/// Serialises `I` into a [`Value`] before delegating, so callers keep their
/// input type while the runner still validates the raw shape.
///
/// ```rust
/// use safeact_action::{ActionError, ActionState, Typed, action_fn};
/// use serde::Serialize;
/// use serde_json::Value;
///
/// #[derive(Serialize)]
/// struct Ping {
///     id: u32,
/// }
///
/// let echo = action_fn(|raw: Value| async move {
///     Ok::<_, ActionError>(ActionState::success(raw, "Success"))
/// });
/// let typed: Typed<_, Ping> = Typed::new(echo);
/// ```
pub struct Typed<A, I> {
    inner: A,
    _marker: PhantomData<fn(I)>,
}

impl<A, I> Typed<A, I> {
    /// Wraps a raw-input action.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// The wrapped action.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

#[async_trait]
impl<A, I> Action for Typed<A, I>
where
    A: Action<Input = Value>,
    I: Serialize + Send + 'static,
{
    type Input = I;
    type Output = A::Output;

    async fn call(&self, input: I) -> Result<ActionState<A::Output>, ActionError> {
        let raw = serde_json::to_value(&input).map_err(ActionError::encode)?;
        self.inner.call(raw).await
    }
}

impl<A: std::fmt::Debug, I> std::fmt::Debug for Typed<A, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typed").field("inner", &self.inner).finish()
    }
}
