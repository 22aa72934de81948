//! # saga-runtime
//!
//! Ties the pipeline together for one conversational turn: collect the
//! parsed stream, dispatch the completed tool invocations strictly in
//! order, and drain the staged notifications for the transport.
//!
//! - [`dispatcher`] — sequential dispatch with lifecycle events and
//!   failure isolation
//! - [`event_emitter`] — broadcast-based observer channel for
//!   [`SagaEvent`](saga_core::events::SagaEvent)s
//! - [`turn`] — the per-turn composition

#![deny(unsafe_code)]

pub mod dispatcher;
pub mod errors;
pub mod event_emitter;
pub mod turn;

pub use dispatcher::{DispatchOutcome, dispatch_invocations};
pub use errors::RuntimeError;
pub use event_emitter::EventEmitter;
pub use turn::{TurnOutcome, run_turn};
