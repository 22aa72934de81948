//! # saga-consistency
//!
//! Keeps a multi-section scenario document consistent after a tool handler
//! changes a named entity.
//!
//! When a handler renames a character or rewrites a deep attribute
//! (motivation, backstory), every other section that references the entity
//! drifts. This crate decides what to do about it and does it:
//!
//! - [`classifier`] — maps an entity-change record to a propagation strategy
//! - [`propagator`] — safe mechanical text substitution for renames
//! - [`hints`] — structured follow-up instructions for deeper changes,
//!   resolved by the generative service itself on a later turn
//! - [`store`] — keyed storage of `(scope, section_id) -> text` shared by
//!   handlers and propagators
//! - [`notify`] — the per-session notification buffer drained after each turn
//!
//! Matching is literal, word-boundary-anchored, and case-sensitive; see
//! [`matcher`] for the one implementation both the propagator and the hint
//! builder use.

#![deny(unsafe_code)]

pub mod classifier;
pub mod hints;
pub mod matcher;
pub mod notify;
pub mod propagator;
pub mod store;

pub use classifier::detect_propagation_type;
pub use hints::build_hint;
pub use notify::{Notification, NotificationBuffer};
pub use propagator::propagate;
pub use store::SectionStore;
