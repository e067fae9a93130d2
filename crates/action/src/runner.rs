//! Validation + dispatch wrapper around a business handler.

use std::borrow::Cow;

use async_trait::async_trait;
use safeact_validator::schema::Schema;
use serde_json::Value;

use crate::action::Action;
use crate::config::RunnerConfig;
use crate::error::ActionError;
use crate::handler::ActionHandler;
use crate::state::ActionState;

/// Wraps an [`ActionHandler`] with a [`Schema`].
///
/// [`run`](Self::run) never fails: raw input is validated first, rejected
/// input produces a [`ActionState::ValidationError`] without invoking the
/// handler, and valid input is handed to the handler in its coerced form.
///
/// # Example
///
/// ```rust
/// # tokio_test_block(async {
/// use safeact_action::{ActionRunner, ActionState, handler_fn};
/// use safeact_validator::schema::{ObjectSchema, StringField};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize)]
/// struct Rename {
///     name: String,
/// }
///
/// let runner = ActionRunner::new(
///     "rename",
///     ObjectSchema::<Rename>::new().field("name", StringField::new().required()),
///     handler_fn(|input: Rename| async move { ActionState::success(input.name, "Renamed") }),
/// );
///
/// let state = runner.run(&json!({"name": ""})).await;
/// assert_eq!(state.field_errors().unwrap().get("name"), Some(&["Required".to_string()][..]));
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug)]
pub struct ActionRunner<S, H> {
    name: Cow<'static, str>,
    schema: S,
    handler: H,
    config: RunnerConfig,
}

impl<S, H> ActionRunner<S, H>
where
    S: Schema,
    H: ActionHandler<Input = S::Output>,
{
    /// Creates a runner with the default [`RunnerConfig`].
    pub fn new(name: impl Into<Cow<'static, str>>, schema: S, handler: H) -> Self {
        Self {
            name: name.into(),
            schema,
            handler,
            config: RunnerConfig::default(),
        }
    }

    /// Replaces the runner configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    /// Name used in tracing spans and registry lookups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema applied to raw input.
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Validates `raw` and, if it passes, runs the handler.
    #[tracing::instrument(name = "action.run", skip_all, fields(action = %self.name))]
    pub async fn run(&self, raw: &Value) -> ActionState<H::Output> {
        let input = match self.schema.safe_parse(raw) {
            Ok(input) => input,
            Err(field_errors) => {
                tracing::debug!(fields = field_errors.len(), "input rejected by schema");
                return ActionState::validation_error_with_status(
                    field_errors,
                    self.config.validation_message.clone(),
                    self.config.status(),
                );
            }
        };

        let state = self.handler.handle(input).await;
        tracing::debug!(kind = %state.kind(), status = state.status().as_u16(), "action settled");
        state
    }
}

#[async_trait]
impl<S, H> Action for ActionRunner<S, H>
where
    S: Schema,
    S::Output: Send,
    H: ActionHandler<Input = S::Output>,
{
    type Input = Value;
    type Output = H::Output;

    async fn call(&self, input: Value) -> Result<ActionState<H::Output>, ActionError> {
        Ok(self.run(&input).await)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use http::StatusCode;
    use pretty_assertions::assert_eq;
    use safeact_validator::foundation::FieldErrors;
    use safeact_validator::schema::{ObjectSchema, StringField};
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::handler::handler_fn;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    fn counting_runner(
        calls: Arc<AtomicUsize>,
    ) -> ActionRunner<ObjectSchema<Named>, impl ActionHandler<Input = Named, Output = String>> {
        ActionRunner::new(
            "greet",
            ObjectSchema::<Named>::new().field("name", StringField::new().required()),
            handler_fn(move |input: Named| {
                let calls = Arc::clone(&calls);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    ActionState::success(format!("hi {}", input.name), "Success")
                }
            }),
        )
    }

    #[tokio::test]
    async fn invalid_input_skips_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let runner = counting_runner(Arc::clone(&calls));

        let state = runner.run(&json!({"name": ""})).await;

        let expected: FieldErrors = [("name", "Required")].into_iter().collect();
        assert_eq!(
            state,
            ActionState::validation_error(expected, "Bad request")
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_input_reaches_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let runner = counting_runner(Arc::clone(&calls));

        let state = runner.run(&json!({"name": "ada"})).await;

        assert_eq!(state.data().map(String::as_str), Some("hi ada"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn config_controls_validation_envelope() {
        let runner = counting_runner(Arc::new(AtomicUsize::new(0))).with_config(
            RunnerConfig::default()
                .with_validation_status(StatusCode::UNPROCESSABLE_ENTITY)
                .with_validation_message("Invalid form"),
        );

        let state = runner.run(&json!({})).await;
        assert_eq!(state.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.message(), "Invalid form");
    }

    #[tokio::test]
    async fn call_never_errors() {
        let runner = counting_runner(Arc::new(AtomicUsize::new(0)));
        assert!(runner.call(json!("not an object")).await.is_ok());
    }
}
