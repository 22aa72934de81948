//! Turn collector — folds a [`TurnStream`] into a completed turn.
//!
//! Accumulates prose text and completed tool invocations until the turn-end
//! event, preserving invocation order. Cancellation is observed between
//! events: once the token fires, no further events are consumed and the
//! partial turn is returned marked interrupted.

use tokio_stream::StreamExt;
use tokio_util::sync::CancellationToken;

use saga_core::events::{StreamEvent, TokenUsage};
use saga_core::tools::ToolInvocation;

use crate::TurnStream;
use crate::errors::StreamError;

/// A completed (or interrupted) turn, ready for dispatch.
#[derive(Clone, Debug, Default)]
pub struct CollectedTurn {
    /// Accumulated prose content.
    pub text: String,
    /// Completed tool invocations, in stream order.
    pub invocations: Vec<ToolInvocation>,
    /// Token usage reported at turn end.
    pub usage: Option<TokenUsage>,
    /// Whether collection stopped because the caller cancelled.
    pub interrupted: bool,
}

/// Collect a [`TurnStream`] into a [`CollectedTurn`].
///
/// Returns an error if the stream surfaces one (service error, incomplete
/// turn, unexpected end). An interrupted turn is not an error: the partial
/// text and any invocations completed before cancellation are returned with
/// `interrupted` set.
pub async fn collect_turn(
    mut stream: TurnStream,
    cancel: &CancellationToken,
) -> Result<CollectedTurn, StreamError> {
    let mut turn = CollectedTurn::default();

    loop {
        // biased: prefer cancellation when both an event and cancel are ready
        let item = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                turn.interrupted = true;
                return Ok(turn);
            }
            item = stream.next() => item,
        };

        match item {
            Some(Ok(event)) => match event {
                StreamEvent::TextDelta { text } => turn.text.push_str(&text),
                // Start/fragment bookkeeping already happened in the parser
                StreamEvent::ToolStart { .. } | StreamEvent::ToolFragment { .. } => {}
                StreamEvent::ToolComplete { invocation } => turn.invocations.push(invocation),
                StreamEvent::TurnEnd { usage } => {
                    turn.usage = usage;
                    return Ok(turn);
                }
            },
            Some(Err(e)) => return Err(e),
            // The pipeline always terminates with TurnEnd or an error; a bare
            // end here means the stream was constructed outside it.
            None => return Err(StreamError::UnexpectedEnd),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
