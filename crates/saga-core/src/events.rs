//! Event types for scenario authoring turns.
//!
//! Two event families:
//!
//! - **[`StreamEvent`]**: Low-level streaming events parsed from the
//!   generative service's wire feed (text deltas, tool invocation
//!   construction, turn end).
//! - **[`SagaEvent`]**: Higher-level lifecycle events with session context
//!   (turn boundaries, tool execution start/end).
//!
//! `StreamEvent` is purely in-memory (never persisted). `SagaEvent` is
//! broadcast to observers and handed to the transport collaborator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::{SagaToolResult, ToolInvocation};

// ─────────────────────────────────────────────────────────────────────────────
// StreamEvent — generative-service streaming events
// ─────────────────────────────────────────────────────────────────────────────

/// Token usage reported by the generative service at turn end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    /// Tokens consumed by the request.
    #[serde(default)]
    pub input_tokens: u64,
    /// Tokens produced by the response.
    #[serde(default)]
    pub output_tokens: u64,
}

/// Events emitted while parsing a generative-service response stream.
///
/// Produced in strict arrival order. Fragments for one invocation id are
/// concatenated in order before the corresponding
/// [`StreamEvent::ToolComplete`] is emitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StreamEvent {
    /// Incremental prose content.
    #[serde(rename = "text_delta")]
    TextDelta {
        /// Text fragment.
        text: String,
    },

    /// A tool invocation opened.
    #[serde(rename = "tool_start")]
    ToolStart {
        /// Invocation ID, unique within the turn.
        id: String,
        /// Tool name.
        name: String,
    },

    /// Incremental tool argument JSON for an open invocation.
    #[serde(rename = "tool_fragment")]
    ToolFragment {
        /// Invocation ID.
        id: String,
        /// Partial JSON arguments.
        #[serde(rename = "partialArgs")]
        partial_args: String,
    },

    /// A tool invocation fully constructed.
    #[serde(rename = "tool_complete")]
    ToolComplete {
        /// Complete invocation.
        invocation: ToolInvocation,
    },

    /// Turn completed.
    #[serde(rename = "turn_end")]
    TurnEnd {
        /// Token usage for the turn, if reported.
        #[serde(skip_serializing_if = "Option::is_none")]
        usage: Option<TokenUsage>,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// SagaEvent — lifecycle events
// ─────────────────────────────────────────────────────────────────────────────

/// Common fields for all lifecycle events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEvent {
    /// Session this event belongs to.
    pub session_id: String,
    /// ISO 8601 timestamp.
    pub timestamp: String,
}

impl BaseEvent {
    /// Create a new base event with the current UTC timestamp.
    #[must_use]
    pub fn now(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Lifecycle event with session context.
///
/// The transport collaborator relies on exact type strings and field names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SagaEvent {
    /// Turn started.
    #[serde(rename = "turn_start")]
    TurnStart {
        /// Base fields.
        #[serde(flatten)]
        base: BaseEvent,
        /// Turn number (1-based).
        turn: u32,
    },

    /// Turn completed.
    #[serde(rename = "turn_end")]
    TurnEnd {
        /// Base fields.
        #[serde(flatten)]
        base: BaseEvent,
        /// Turn number (1-based).
        turn: u32,
        /// Token usage, if reported by the service.
        #[serde(skip_serializing_if = "Option::is_none")]
        usage: Option<TokenUsage>,
    },

    /// Prose content update.
    #[serde(rename = "message_update")]
    MessageUpdate {
        /// Base fields.
        #[serde(flatten)]
        base: BaseEvent,
        /// Text fragment.
        content: String,
    },

    /// Tool execution started.
    #[serde(rename = "tool_execution_start")]
    ToolExecutionStart {
        /// Base fields.
        #[serde(flatten)]
        base: BaseEvent,
        /// Invocation ID.
        #[serde(rename = "toolInvocationId")]
        tool_invocation_id: String,
        /// Tool name.
        #[serde(rename = "toolName")]
        tool_name: String,
        /// Invocation input.
        #[serde(skip_serializing_if = "Option::is_none")]
        input: Option<Value>,
    },

    /// Tool execution finished (success or failure).
    #[serde(rename = "tool_execution_end")]
    ToolExecutionEnd {
        /// Base fields.
        #[serde(flatten)]
        base: BaseEvent,
        /// Invocation ID.
        #[serde(rename = "toolInvocationId")]
        tool_invocation_id: String,
        /// Tool name.
        #[serde(rename = "toolName")]
        tool_name: String,
        /// Whether the execution failed.
        #[serde(rename = "isError")]
        is_error: bool,
        /// The result handed back to the service.
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<SagaToolResult>,
    },
}

impl SagaEvent {
    /// Get the base event fields.
    #[must_use]
    pub fn base(&self) -> &BaseEvent {
        match self {
            Self::TurnStart { base, .. }
            | Self::TurnEnd { base, .. }
            | Self::MessageUpdate { base, .. }
            | Self::ToolExecutionStart { base, .. }
            | Self::ToolExecutionEnd { base, .. } => base,
        }
    }

    /// Get the event type string (for type discrimination).
    #[must_use]
    pub fn event_type(&self) -> &str {
        match self {
            Self::TurnStart { .. } => "turn_start",
            Self::TurnEnd { .. } => "turn_end",
            Self::MessageUpdate { .. } => "message_update",
            Self::ToolExecutionStart { .. } => "tool_execution_start",
            Self::ToolExecutionEnd { .. } => "tool_execution_end",
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.base().session_id
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
