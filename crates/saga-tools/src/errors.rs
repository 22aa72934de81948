//! Tool error types.
//!
//! Unified error enum for all tool execution failures. The dispatcher
//! converts any of these into an error `ToolResult` at the dispatch
//! boundary; they never propagate past it.

use thiserror::Error;

/// Errors that can occur during tool execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Parameter validation failed.
    #[error("validation error: {message}")]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Operation was cancelled.
    #[error("cancelled")]
    Cancelled,

    /// Tool not found in registry.
    #[error("unknown tool: {name}")]
    UnknownTool {
        /// The tool name that was not found.
        name: String,
    },

    /// Internal error (catch-all).
    #[error("{message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display() {
        let err = ToolError::validation("missing required field: sectionId");
        assert_eq!(
            err.to_string(),
            "validation error: missing required field: sectionId"
        );
    }

    #[test]
    fn unknown_tool_display_includes_name() {
        let err = ToolError::UnknownTool {
            name: "summon_dragon".into(),
        };
        assert_eq!(err.to_string(), "unknown tool: summon_dragon");
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let tool_err = ToolError::from(json_err);
        assert!(matches!(tool_err, ToolError::Json(_)));
    }

    #[test]
    fn cancelled_display() {
        assert_eq!(ToolError::Cancelled.to_string(), "cancelled");
    }
}
