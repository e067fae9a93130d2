//! Convenience re-exports for action authors.
//!
//! ```rust
//! use safeact_action::prelude::*;
//! ```

pub use crate::action::{Action, Typed, action_fn};
pub use crate::config::RunnerConfig;
pub use crate::envelope::ActionEnvelope;
pub use crate::error::ActionError;
pub use crate::handler::{ActionHandler, handler_fn};
pub use crate::registry::ActionRegistry;
pub use crate::runner::ActionRunner;
pub use crate::state::{ActionKind, ActionState};
pub use http::StatusCode;
