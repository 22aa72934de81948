//! Low-level wire frame types for the incoming event feed.
//!
//! Each SSE data line deserializes into one [`WireFrame`]. Frames identify
//! text deltas, tool-call lifecycle (open / argument fragment / close), and
//! turn end with token usage. Argument fragments carry partial JSON text
//! that is only parsed once the close frame for that id arrives.

use serde::{Deserialize, Serialize};

use saga_core::events::TokenUsage;

/// One frame of the incoming event feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WireFrame {
    /// Incremental prose content.
    #[serde(rename = "text_delta")]
    TextDelta {
        /// Text fragment.
        text: String,
    },

    /// A tool call opened.
    #[serde(rename = "tool_call_begin")]
    ToolCallBegin {
        /// Invocation ID.
        id: String,
        /// Tool name.
        name: String,
    },

    /// An argument fragment for an open tool call.
    #[serde(rename = "tool_call_delta")]
    ToolCallDelta {
        /// Invocation ID.
        id: String,
        /// Partial JSON argument text.
        #[serde(rename = "partialInput")]
        partial_input: String,
    },

    /// A tool call closed; its accumulated arguments are now complete.
    #[serde(rename = "tool_call_end")]
    ToolCallEnd {
        /// Invocation ID.
        id: String,
    },

    /// Turn completed.
    #[serde(rename = "turn_end")]
    TurnEnd {
        /// Token usage for the turn.
        #[serde(skip_serializing_if = "Option::is_none")]
        usage: Option<TokenUsage>,
    },

    /// Keepalive. Carries nothing.
    #[serde(rename = "ping")]
    Ping,

    /// The service reported an error.
    #[serde(rename = "error")]
    Error {
        /// Error message.
        message: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_delta_from_json() {
        let frame: WireFrame =
            serde_json::from_str(r#"{"type":"text_delta","text":"The gate "}"#).unwrap();
        assert_eq!(
            frame,
            WireFrame::TextDelta {
                text: "The gate ".into()
            }
        );
    }

    #[test]
    fn tool_call_begin_from_json() {
        let frame: WireFrame = serde_json::from_str(
            r#"{"type":"tool_call_begin","id":"call-1","name":"set_section_content"}"#,
        )
        .unwrap();
        assert_eq!(
            frame,
            WireFrame::ToolCallBegin {
                id: "call-1".into(),
                name: "set_section_content".into()
            }
        );
    }

    #[test]
    fn tool_call_delta_uses_partial_input_field() {
        let frame: WireFrame = serde_json::from_str(
            r#"{"type":"tool_call_delta","id":"call-1","partialInput":"{\"sec"}"#,
        )
        .unwrap();
        assert_eq!(
            frame,
            WireFrame::ToolCallDelta {
                id: "call-1".into(),
                partial_input: "{\"sec".into()
            }
        );
    }

    #[test]
    fn turn_end_with_usage() {
        let frame: WireFrame = serde_json::from_str(
            r#"{"type":"turn_end","usage":{"inputTokens":100,"outputTokens":42}}"#,
        )
        .unwrap();
        match frame {
            WireFrame::TurnEnd { usage: Some(u) } => {
                assert_eq!(u.input_tokens, 100);
                assert_eq!(u.output_tokens, 42);
            }
            other => panic!("expected TurnEnd with usage, got {other:?}"),
        }
    }

    #[test]
    fn turn_end_without_usage() {
        let frame: WireFrame = serde_json::from_str(r#"{"type":"turn_end"}"#).unwrap();
        assert_eq!(frame, WireFrame::TurnEnd { usage: None });
    }

    #[test]
    fn ping_from_json() {
        let frame: WireFrame = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert_eq!(frame, WireFrame::Ping);
    }

    #[test]
    fn error_from_json() {
        let frame: WireFrame =
            serde_json::from_str(r#"{"type":"error","message":"overloaded"}"#).unwrap();
        assert_eq!(
            frame,
            WireFrame::Error {
                message: "overloaded".into()
            }
        );
    }

    #[test]
    fn unknown_frame_type_fails_to_parse() {
        let result: Result<WireFrame, _> =
            serde_json::from_str(r#"{"type":"mystery","x":1}"#);
        assert!(result.is_err());
    }
}
