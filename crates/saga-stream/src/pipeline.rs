//! Stream pipeline composition.
//!
//! Converts the transport's chunked byte stream into a typed [`TurnStream`]:
//! SSE line parsing → wire frame deserialization → the stream state machine.
//! The pipeline owns the incomplete-turn check: if the feed ends while tool
//! calls are open or before the turn-end frame, the final item is an error,
//! never a fabricated event.

use bytes::Bytes;
use futures::Stream;
use tokio_stream::StreamExt;
use tracing::warn;

use saga_core::events::StreamEvent;
use saga_core::text::truncate_str;

use crate::TurnStream;
use crate::errors::StreamError;
use crate::handler::{StreamState, process_wire_frame};
use crate::sse::{SseParserOptions, parse_sse_lines};
use crate::wire::WireFrame;

/// Convert a chunked byte stream into a typed [`TurnStream`].
///
/// Parsing suspends only at I/O boundaries (awaiting the next chunk). The
/// stream ends after the turn-end event, or with a single terminal error:
///
/// - [`StreamError::Service`] if the service sent an error frame
/// - [`StreamError::IncompleteTurn`] if the feed ended with open tool calls
/// - [`StreamError::UnexpectedEnd`] if the feed ended before turn end
pub fn event_stream<S, E>(byte_stream: S, options: &SseParserOptions) -> TurnStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + Unpin + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let lines = parse_sse_lines(byte_stream, options);

    let events = async_stream::stream! {
        let mut state = StreamState::new();
        futures::pin_mut!(lines);

        while let Some(line) = lines.next().await {
            let frame: WireFrame = match serde_json::from_str(&line) {
                Ok(frame) => frame,
                Err(e) => {
                    warn!(
                        error = %e,
                        line_preview = truncate_str(&line, 100),
                        "unparseable wire frame, skipping"
                    );
                    continue;
                }
            };

            if let WireFrame::Error { message } = frame {
                yield Err(StreamError::Service { message });
                return;
            }

            for event in process_wire_frame(&frame, &mut state) {
                let terminal = matches!(event, StreamEvent::TurnEnd { .. });
                yield Ok(event);
                if terminal {
                    return;
                }
            }
        }

        // The transport ended before the turn did.
        let open_invocation_ids = state.open_invocation_ids();
        if open_invocation_ids.is_empty() {
            yield Err(StreamError::UnexpectedEnd);
        } else {
            yield Err(StreamError::IncompleteTurn { open_invocation_ids });
        }
    };

    Box::pin(events)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
