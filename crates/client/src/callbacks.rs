//! Lifecycle callbacks fired by the controller.

use std::fmt;

type SuccessFn<T> = Box<dyn Fn(&T, &str) + Send + Sync>;
type ErrorFn = Box<dyn Fn(&str) + Send + Sync>;
type CompleteFn = Box<dyn Fn() + Send + Sync>;

/// The three named callbacks, supplied once when the controller is built.
///
/// - `on_success(data, message)` fires after a successful settlement is
///   stored.
/// - `on_error(message)` fires after a domain error (with the error text)
///   or a fault (with the cause) is stored.
/// - `on_complete()` fires exactly once per `execute` call, on every exit
///   path, after the other callbacks.
///
/// ```
/// use safeact_client::ActionCallbacks;
///
/// let callbacks = ActionCallbacks::<String>::new()
///     .on_success(|data, message| println!("{message}: {data}"))
///     .on_error(|error| eprintln!("{error}"))
///     .on_complete(|| println!("done"));
/// ```
pub struct ActionCallbacks<T> {
    on_success: Option<SuccessFn<T>>,
    on_error: Option<ErrorFn>,
    on_complete: Option<CompleteFn>,
}

impl<T> Default for ActionCallbacks<T> {
    fn default() -> Self {
        Self {
            on_success: None,
            on_error: None,
            on_complete: None,
        }
    }
}

impl<T> ActionCallbacks<T> {
    /// No callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the success callback.
    #[must_use = "builder methods must be chained or built"]
    pub fn on_success(mut self, f: impl Fn(&T, &str) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    /// Sets the error callback.
    #[must_use = "builder methods must be chained or built"]
    pub fn on_error(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Sets the completion callback.
    #[must_use = "builder methods must be chained or built"]
    pub fn on_complete(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub(crate) fn success(&self, data: &T, message: &str) {
        if let Some(f) = &self.on_success {
            f(data, message);
        }
    }

    pub(crate) fn error(&self, message: &str) {
        if let Some(f) = &self.on_error {
            f(message);
        }
    }

    pub(crate) fn complete(&self) {
        if let Some(f) = &self.on_complete {
            f();
        }
    }
}

impl<T> fmt::Debug for ActionCallbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCallbacks")
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
