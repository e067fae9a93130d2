//! Business handlers invoked after validation.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::state::ActionState;

/// Business logic behind an action.
///
/// Receives input that already passed the schema and classifies the
/// outcome of its remote call as success or domain error. Handlers are
/// trusted code: they are expected to catch their own collaborator
/// failures and return a [`ActionState::DomainError`] instead of panicking.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use safeact_action::{ActionHandler, ActionState};
///
/// struct Greet;
///
/// #[async_trait]
/// impl ActionHandler for Greet {
///     type Input = String;
///     type Output = String;
///
///     async fn handle(&self, name: String) -> ActionState<String> {
///         ActionState::success(format!("hello {name}"), "Success")
///     }
/// }
/// ```
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Validated input type.
    type Input: Send;
    /// Output carried by a success.
    type Output: Send;

    /// Runs the business logic.
    async fn handle(&self, input: Self::Input) -> ActionState<Self::Output>;
}

#[async_trait]
impl<H> ActionHandler for Arc<H>
where
    H: ActionHandler + ?Sized,
{
    type Input = H::Input;
    type Output = H::Output;

    async fn handle(&self, input: Self::Input) -> ActionState<Self::Output> {
        (**self).handle(input).await
    }
}

/// Handler built from an async closure. See [`handler_fn`].
pub struct HandlerFn<F, I, O> {
    f: F,
    _marker: PhantomData<fn(I) -> O>,
}

/// Adapts an async closure into an [`ActionHandler`].
///
/// ```rust
/// use safeact_action::{ActionState, handler_fn};
///
/// let double = handler_fn(|n: u32| async move { ActionState::success(n * 2, "Success") });
/// ```
pub fn handler_fn<F, Fut, I, O>(f: F) -> HandlerFn<F, I, O>
where
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ActionState<O>> + Send + 'static,
{
    HandlerFn {
        f,
        _marker: PhantomData,
    }
}

#[async_trait]
impl<F, Fut, I, O> ActionHandler for HandlerFn<F, I, O>
where
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ActionState<O>> + Send + 'static,
    I: Send + 'static,
    O: Send + 'static,
{
    type Input = I;
    type Output = O;

    async fn handle(&self, input: I) -> ActionState<O> {
        (self.f)(input).await
    }
}

impl<F, I, O> std::fmt::Debug for HandlerFn<F, I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerFn").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn closure_handler_runs() {
        let handler = handler_fn(|n: u32| async move {
            if n > 10 {
                ActionState::domain_error("too big", "Rejected")
            } else {
                ActionState::success(n * 2, "Success")
            }
        });

        assert_eq!(handler.handle(4).await.data(), Some(&8));
        assert_eq!(handler.handle(11).await.error(), Some("too big"));
    }

    #[tokio::test]
    async fn arc_handler_delegates() {
        let handler = Arc::new(handler_fn(|s: String| async move {
            ActionState::success(s.len(), "Success")
        }));
        assert_eq!(handler.handle("abc".into()).await.data(), Some(&3));
    }
}
