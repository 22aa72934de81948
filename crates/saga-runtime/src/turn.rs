//! Turn runner — one full request/response cycle.
//!
//! Collects the parsed stream into text and tool invocations, dispatches
//! the invocations strictly in order, drains the staged notifications, and
//! wraps it all in turn lifecycle events. The dispatch results, lifecycle
//! events, and notifications are handed to the transport collaborator and
//! discarded afterwards.

use std::sync::Arc;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use saga_consistency::{Notification, NotificationBuffer};
use saga_core::events::{BaseEvent, SagaEvent, StreamEvent, TokenUsage};
use saga_core::tools::ToolResult;
use saga_stream::TurnStream;
use saga_stream::collector::collect_turn;
use saga_tools::ToolRegistry;

use crate::dispatcher::dispatch_invocations;
use crate::errors::RuntimeError;
use crate::event_emitter::EventEmitter;

/// Everything one turn produced, ready for the transport collaborator.
#[derive(Clone, Debug)]
pub struct TurnOutcome {
    /// Accumulated prose content.
    pub text: String,
    /// One result per dispatched invocation, in input order.
    pub tool_results: Vec<ToolResult>,
    /// Tool lifecycle events, in dispatch order.
    pub lifecycle_events: Vec<SagaEvent>,
    /// Notifications staged by handlers during dispatch.
    pub notifications: Vec<Notification>,
    /// Token usage reported by the service.
    pub usage: Option<TokenUsage>,
    /// Whether the turn was interrupted by cancellation.
    pub interrupted: bool,
}

/// Run one turn: collect the stream, dispatch its invocations, drain the
/// notification buffer.
///
/// Stream-level failures (service error, incomplete turn) are returned as
/// errors; handler failures are not — they surface as error tool results
/// inside the outcome.
#[instrument(skip_all, fields(session_id, turn))]
pub async fn run_turn(
    stream: TurnStream,
    registry: &ToolRegistry,
    session_id: &str,
    turn: u32,
    emitter: &Arc<EventEmitter>,
    notifications: &Arc<NotificationBuffer>,
    cancel: &CancellationToken,
) -> Result<TurnOutcome, RuntimeError> {
    let _ = emitter.emit(SagaEvent::TurnStart {
        base: BaseEvent::now(session_id),
        turn,
    });

    // Re-broadcast prose deltas to observers as they arrive
    let delta_emitter = emitter.clone();
    let delta_session = session_id.to_owned();
    let stream: TurnStream = Box::pin(stream.inspect(move |item| {
        if let Ok(StreamEvent::TextDelta { text }) = item {
            let _ = delta_emitter.emit(SagaEvent::MessageUpdate {
                base: BaseEvent::now(delta_session.as_str()),
                content: text.clone(),
            });
        }
    }));

    let collected = collect_turn(stream, cancel).await?;
    debug!(
        text_len = collected.text.len(),
        invocation_count = collected.invocations.len(),
        interrupted = collected.interrupted,
        "turn collected"
    );

    // If collection was interrupted the token is already cancelled, so the
    // dispatcher will stop before its first invocation.
    let dispatch = dispatch_invocations(
        &collected.invocations,
        registry,
        session_id,
        emitter,
        cancel,
    )
    .await;

    let drained = notifications.drain_all();

    let _ = emitter.emit(SagaEvent::TurnEnd {
        base: BaseEvent::now(session_id),
        turn,
        usage: collected.usage.clone(),
    });

    Ok(TurnOutcome {
        text: collected.text,
        tool_results: dispatch.tool_results,
        lifecycle_events: dispatch.events,
        notifications: drained,
        usage: collected.usage,
        interrupted: collected.interrupted || dispatch.interrupted,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
