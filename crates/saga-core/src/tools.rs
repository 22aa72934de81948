//! Tool definition, invocation, and result types.
//!
//! Defines the schema for tools the generative service can invoke, the
//! invocation record collected from the stream, and the result types
//! returned by tool execution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Tool schema
// ─────────────────────────────────────────────────────────────────────────────

/// JSON Schema-compatible parameter definition for a tool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolParameterSchema {
    /// Top-level JSON Schema type.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Property definitions (when type is `object`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Map<String, Value>>,
    /// Required property names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Description of the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Catch-all for additional JSON Schema properties.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ToolParameterSchema {
    /// An empty `object` schema with no declared properties.
    #[must_use]
    pub fn empty_object() -> Self {
        Self {
            schema_type: "object".into(),
            properties: None,
            required: None,
            description: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// A tool definition that can be sent to the generative service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (unique identifier).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema for the tool's parameters.
    pub parameters: ToolParameterSchema,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tool invocation
// ─────────────────────────────────────────────────────────────────────────────

/// A completed tool call collected from the stream.
///
/// Immutable once constructed. Exactly one invocation exists per tool call
/// made by the service within a turn; `id` is unique per turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Invocation ID, unique within the turn.
    pub id: String,
    /// Tool name.
    pub name: String,
    /// Structured input parsed from the accumulated argument fragments.
    pub input: serde_json::Map<String, Value>,
}

impl ToolInvocation {
    /// Create a new invocation.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        input: serde_json::Map<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tool results
// ─────────────────────────────────────────────────────────────────────────────

/// Result returned by a tool handler.
///
/// Handlers report expected validation failures with `is_error: true`
/// rather than returning an `Err`, so the service can adapt its next turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SagaToolResult {
    /// The tool output content.
    pub content: String,
    /// Optional structured details (tool-specific metadata).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Whether the execution resulted in an error.
    #[serde(default)]
    pub is_error: bool,
}

/// A tool result tied to its invocation, as delivered to the transport.
///
/// One per invocation, produced regardless of whether the tool name was
/// known. Turn-scoped and discarded after being handed to the transport
/// collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    /// ID of the invocation that produced this result.
    pub tool_invocation_id: String,
    /// The tool output content.
    pub content: String,
    /// Whether the execution resulted in an error.
    pub is_error: bool,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Factory helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Create a simple text result.
#[must_use]
pub fn text_result(content: impl Into<String>, is_error: bool) -> SagaToolResult {
    SagaToolResult {
        content: content.into(),
        details: None,
        is_error,
    }
}

/// Create an error result.
#[must_use]
pub fn error_result(message: impl Into<String>) -> SagaToolResult {
    text_result(message, true)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tool_serde_roundtrip() {
        let tool = Tool {
            name: "set_section_content".into(),
            description: "Write a content section".into(),
            parameters: ToolParameterSchema {
                schema_type: "object".into(),
                properties: Some({
                    let mut m = serde_json::Map::new();
                    let _ = m.insert(
                        "sectionId".into(),
                        json!({"type": "string", "description": "Section to write"}),
                    );
                    m
                }),
                required: Some(vec!["sectionId".into()]),
                description: None,
                extra: serde_json::Map::new(),
            },
        };
        let value = serde_json::to_value(&tool).unwrap();
        let back: Tool = serde_json::from_value(value).unwrap();
        assert_eq!(tool, back);
    }

    #[test]
    fn empty_object_schema() {
        let schema = ToolParameterSchema::empty_object();
        assert_eq!(schema.schema_type, "object");
        assert!(schema.properties.is_none());
    }

    #[test]
    fn invocation_new() {
        let mut input = serde_json::Map::new();
        let _ = input.insert("content".into(), json!("Aldric waits."));
        let inv = ToolInvocation::new("call-1", "set_section_content", input);
        assert_eq!(inv.id, "call-1");
        assert_eq!(inv.name, "set_section_content");
        assert_eq!(inv.input["content"], "Aldric waits.");
    }

    #[test]
    fn text_result_success() {
        let r = text_result("done", false);
        assert!(!r.is_error);
        assert!(r.details.is_none());
    }

    #[test]
    fn error_result_is_error() {
        let r = error_result("something went wrong");
        assert!(r.is_error);
        assert_eq!(r.content, "something went wrong");
    }

    #[test]
    fn tool_result_serde_field_names() {
        let r = ToolResult {
            tool_invocation_id: "call-1".into(),
            content: "ok".into(),
            is_error: false,
            details: Some(json!({"replacements": 2})),
        };
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["toolInvocationId"], "call-1");
        assert_eq!(value["isError"], false);
        assert_eq!(value["details"]["replacements"], 2);
    }

    #[test]
    fn saga_tool_result_is_error_defaults_false() {
        let r: SagaToolResult =
            serde_json::from_value(json!({"content": "ok"})).unwrap();
        assert!(!r.is_error);
    }
}
