//! # safeact actions
//!
//! Server-side half of the safe-action contract: a validated, fallible,
//! asynchronous operation that always settles into one uniform outcome.
//!
//! ## Core Types
//!
//! - [`ActionState`]: the outcome sum type (success, validation error,
//!   domain error, fault)
//! - [`ActionEnvelope`]: flat camelCase wire form of an outcome
//! - [`ActionHandler`]: business logic run on validated input
//! - [`ActionRunner`]: schema validation + handler dispatch
//! - [`Action`]: callable seen by clients; `Err` means a fault
//! - [`Typed`]: typed input front for raw-JSON actions
//! - [`ActionRegistry`]: named actions behind a JSON boundary
//! - [`RemoteAction`] / [`Transport`]: decoding client for envelopes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use safeact_action::prelude::*;
//! use safeact_validator::prelude::*;
//!
//! let runner = ActionRunner::new(
//!     "login",
//!     ObjectSchema::<Credentials>::new()
//!         .field("email", StringField::new().required().rule(email()))
//!         .field("password", StringField::new().required()),
//!     handler_fn(|creds: Credentials| async move {
//!         match auth.sign_in(&creds).await {
//!             Ok(session) => ActionState::success(session, "Login success!"),
//!             Err(e) => ActionState::domain_error(e.to_string(), "Login error!"),
//!         }
//!     }),
//! );
//!
//! let state = runner.run(&raw_json).await;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Callable action trait and adapters.
pub mod action;
/// Runner configuration.
pub mod config;
/// Wire envelope for action outcomes.
pub mod envelope;
/// Error types for faults around an action call.
pub mod error;
/// Business handler trait and closure adapter.
pub mod handler;
/// Convenience re-exports for action authors.
pub mod prelude;
/// Action registry for name-based dispatch.
pub mod registry;
pub mod remote;
/// Validation + dispatch runner.
pub mod runner;
/// Outcome sum type.
pub mod state;

// ── Public re-exports ───────────────────────────────────────────────────────

pub use action::{Action, ActionFn, Typed, action_fn};
pub use config::RunnerConfig;
pub use envelope::ActionEnvelope;
pub use error::{ActionError, EnvelopeError};
pub use handler::{ActionHandler, HandlerFn, handler_fn};
pub use registry::ActionRegistry;
pub use remote::{RemoteAction, Transport};
pub use runner::ActionRunner;
pub use state::{ActionKind, ActionState, FAULT_MESSAGE};

// Re-export the status type so handlers can pick codes without depending
// on `http` directly.
pub use http::StatusCode;
