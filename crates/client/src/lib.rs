//! # safeact client
//!
//! Client-side half of the safe-action contract. An [`ActionController`]
//! invokes an [`Action`](safeact_action::Action), tracks the in-flight call
//! and publishes the outcome as an observable [`ControllerState`].
//!
//! Guarantees:
//! - every `execute` call fires `on_complete` exactly once, even if its
//!   future is dropped;
//! - only the latest call's settlement is applied; older ones come back as
//!   [`Settlement::Superseded`];
//! - faults (transport errors, panics, timeouts) are surfaced as
//!   `kind = fault` with the cause in [`ControllerState::fault`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod callbacks;
/// Controller configuration.
pub mod config;
/// The controller and its settlement type.
pub mod controller;
/// Observable controller state.
pub mod state;

pub use callbacks::ActionCallbacks;
pub use config::ControllerConfig;
pub use controller::{ActionController, Settlement};
pub use state::{ControllerState, Phase};
