//! # saga-tools
//!
//! The tool system for the saga agent: the [`traits::SagaTool`] trait every
//! handler implements, the [`registry::ToolRegistry`] the dispatcher looks
//! handlers up in, and the built-in scenario tools.
//!
//! Handlers are the only extension point of the pipeline. External stage
//! modules register additional tools on the same registry; the two built-in
//! ones here cover section authoring and character updates with
//! cross-section propagation.

#![deny(unsafe_code)]

pub mod errors;
pub mod registry;
pub mod scenario;
pub mod traits;

pub use errors::ToolError;
pub use registry::ToolRegistry;
pub use traits::{SagaTool, ToolContext};
