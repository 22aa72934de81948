//! Wire-frame stream handler.
//!
//! Converts raw [`WireFrame`]s into typed [`StreamEvent`]s. The handler
//! maintains a [`StreamState`] that accumulates tool-call argument fragments
//! across delta frames, then emits a complete invocation on the close frame.
//!
//! Fragment buffers are keyed by invocation id. The service never interleaves
//! fragments for different ids on the wire today, but the handler does not
//! assume this: two open tool calls accumulate independently.

use indexmap::IndexMap;
use serde_json::Map;
use tracing::warn;

use saga_core::events::StreamEvent;
use saga_core::text::truncate_str;
use saga_core::tools::ToolInvocation;

use crate::wire::WireFrame;

/// An open tool call whose argument fragments are still arriving.
#[derive(Clone, Debug)]
struct OpenToolCall {
    name: String,
    buffer: String,
}

/// Stream state accumulated across wire frames.
///
/// Insertion order of open calls is preserved so incomplete turns report
/// their open ids in arrival order.
#[derive(Clone, Debug, Default)]
pub struct StreamState {
    open: IndexMap<String, OpenToolCall>,
    turn_ended: bool,
}

impl StreamState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of tool calls opened but not yet closed, in arrival order.
    #[must_use]
    pub fn open_invocation_ids(&self) -> Vec<String> {
        self.open.keys().cloned().collect()
    }

    /// Whether the turn-end frame has been observed.
    #[must_use]
    pub fn turn_ended(&self) -> bool {
        self.turn_ended
    }
}

/// Process a single wire frame and return zero or more [`StreamEvent`]s.
///
/// Call this for each frame received, in receipt order. The state is
/// mutated to track accumulated fragments across frames. Frames arriving
/// after the turn-end frame are ignored.
pub fn process_wire_frame(frame: &WireFrame, state: &mut StreamState) -> Vec<StreamEvent> {
    if state.turn_ended {
        warn!(frame = ?frame, "frame received after turn end, ignoring");
        return vec![];
    }

    match frame {
        WireFrame::TextDelta { text } => vec![StreamEvent::TextDelta { text: text.clone() }],

        WireFrame::ToolCallBegin { id, name } => {
            let previous = state.open.insert(
                id.clone(),
                OpenToolCall {
                    name: name.clone(),
                    buffer: String::with_capacity(512),
                },
            );
            if previous.is_some() {
                warn!(id, "tool call reopened before close, discarding buffered fragments");
            }
            vec![StreamEvent::ToolStart {
                id: id.clone(),
                name: name.clone(),
            }]
        }

        WireFrame::ToolCallDelta { id, partial_input } => {
            let Some(open) = state.open.get_mut(id) else {
                warn!(id, "fragment for unknown tool call, skipping");
                return vec![];
            };
            open.buffer.push_str(partial_input);
            vec![StreamEvent::ToolFragment {
                id: id.clone(),
                partial_args: partial_input.clone(),
            }]
        }

        WireFrame::ToolCallEnd { id } => {
            let Some(open) = state.open.shift_remove(id) else {
                // Emitting a ToolComplete here would fabricate an invocation
                // that never had a ToolStart.
                warn!(id, "close frame for unknown tool call, skipping");
                return vec![];
            };
            let input = parse_arguments(id, &open.buffer);
            vec![StreamEvent::ToolComplete {
                invocation: ToolInvocation::new(id.clone(), open.name, input),
            }]
        }

        WireFrame::TurnEnd { usage } => {
            state.turn_ended = true;
            vec![StreamEvent::TurnEnd {
                usage: usage.clone(),
            }]
        }

        // Error frames are surfaced by the pipeline as stream errors.
        WireFrame::Ping | WireFrame::Error { .. } => vec![],
    }
}

/// Parse the accumulated argument buffer into a structured record.
///
/// Only called once the close frame has arrived. An empty buffer yields an
/// empty map; malformed JSON degrades to an empty map with a warning rather
/// than aborting the turn.
fn parse_arguments(id: &str, buffer: &str) -> Map<String, serde_json::Value> {
    if buffer.is_empty() {
        return Map::new();
    }
    match serde_json::from_str(buffer) {
        Ok(map) => map,
        Err(e) => {
            warn!(
                id,
                error = %e,
                buffer_preview = truncate_str(buffer, 100),
                "malformed tool arguments, using empty input"
            );
            Map::new()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
