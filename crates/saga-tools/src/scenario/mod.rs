//! Built-in scenario tools.
//!
//! These two tools cover the content surface the generative service edits
//! directly: writing a section and updating a named character with
//! cross-section propagation. Stage-specific tools register alongside them
//! on the same registry.

pub mod character;
pub mod section;

pub use character::UpdateCharacterTool;
pub use section::SetSectionTool;
