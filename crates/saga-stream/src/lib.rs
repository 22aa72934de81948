//! # saga-stream
//!
//! Parses the generative service's incremental event feed into typed
//! [`StreamEvent`](saga_core::events::StreamEvent)s and collects completed
//! turns.
//!
//! Pipeline stages:
//!
//! 1. [`sse`] — chunked byte stream → SSE data lines
//! 2. [`wire`] — data lines → low-level [`wire::WireFrame`]s
//! 3. [`handler`] — wire frames → stream events, accumulating tool-call
//!    fragments keyed by invocation id
//! 4. [`pipeline`] — composes 1–3 into a lazy [`TurnStream`], surfacing
//!    incomplete turns as errors
//! 5. [`collector`] — folds a [`TurnStream`] into a
//!    [`collector::CollectedTurn`] ready for dispatch

#![deny(unsafe_code)]

pub mod collector;
pub mod errors;
pub mod handler;
pub mod pipeline;
pub mod sse;
pub mod wire;

pub use errors::StreamError;

use std::pin::Pin;

use futures::Stream;
use saga_core::events::StreamEvent;

/// A lazy, ordered sequence of parsed stream events.
///
/// Items arrive in strict receipt order. An `Err` item terminates the
/// stream: either the service reported an error mid-turn or the transport
/// ended before the turn completed.
pub type TurnStream =
    Pin<Box<dyn Stream<Item = Result<StreamEvent, StreamError>> + Send>>;
