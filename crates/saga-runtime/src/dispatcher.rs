//! Tool dispatcher — strictly sequential execution with failure isolation.
//!
//! Invocations are dispatched in input-list order, never concurrently:
//! handlers mutate the shared section store, and later handlers in the same
//! turn may depend on earlier handlers' writes (a rename handler followed by
//! a propagation handler reading the renamed sections). Each handler is
//! awaited to completion before the next starts.
//!
//! Per invocation: a start lifecycle event, handler lookup and execution,
//! an end lifecycle event. Unknown tool names and handler failures are
//! converted to error tool results at this boundary — they never abort the
//! remaining dispatches and never propagate to the caller.

use std::sync::Arc;

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use saga_core::events::{BaseEvent, SagaEvent};
use saga_core::tools::{SagaToolResult, ToolInvocation, ToolResult, error_result};
use saga_tools::{ToolContext, ToolError, ToolRegistry};

use crate::event_emitter::EventEmitter;

/// Outcome of dispatching one turn's invocations.
#[derive(Clone, Debug, Default)]
pub struct DispatchOutcome {
    /// One result per dispatched invocation, in input order.
    pub tool_results: Vec<ToolResult>,
    /// Two lifecycle events (start, end) per dispatched invocation, in
    /// input order.
    pub events: Vec<SagaEvent>,
    /// Whether dispatch stopped early because cancellation was observed.
    /// Invocations after the stop point have no results.
    pub interrupted: bool,
}

/// Dispatch `invocations` strictly sequentially against `registry`.
///
/// Lifecycle events are both returned and broadcast through `emitter`.
/// Once `cancel` is observed, no further invocations are dispatched; the
/// one already running is allowed to finish.
#[instrument(skip_all, fields(session_id, invocation_count = invocations.len()))]
pub async fn dispatch_invocations(
    invocations: &[ToolInvocation],
    registry: &ToolRegistry,
    session_id: &str,
    emitter: &Arc<EventEmitter>,
    cancel: &CancellationToken,
) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();

    for invocation in invocations {
        if cancel.is_cancelled() {
            warn!(
                remaining = invocations.len() - outcome.tool_results.len(),
                "cancellation observed, stopping dispatch"
            );
            outcome.interrupted = true;
            break;
        }

        let start = SagaEvent::ToolExecutionStart {
            base: BaseEvent::now(session_id),
            tool_invocation_id: invocation.id.clone(),
            tool_name: invocation.name.clone(),
            input: Some(Value::Object(invocation.input.clone())),
        };
        let _ = emitter.emit(start.clone());
        outcome.events.push(start);
        debug!(
            tool_name = %invocation.name,
            tool_invocation_id = %invocation.id,
            "tool execution started"
        );

        let result = execute_one(invocation, registry, session_id, cancel).await;

        let tool_result = ToolResult {
            tool_invocation_id: invocation.id.clone(),
            content: result.content.clone(),
            is_error: result.is_error,
            details: result.details.clone(),
        };

        let end = SagaEvent::ToolExecutionEnd {
            base: BaseEvent::now(session_id),
            tool_invocation_id: invocation.id.clone(),
            tool_name: invocation.name.clone(),
            is_error: result.is_error,
            result: Some(result),
        };
        let _ = emitter.emit(end.clone());
        outcome.events.push(end);
        info!(
            tool_name = %invocation.name,
            is_error = tool_result.is_error,
            "tool executed"
        );

        outcome.tool_results.push(tool_result);
    }

    outcome
}

/// Execute a single invocation, converting every failure into an error
/// result.
async fn execute_one(
    invocation: &ToolInvocation,
    registry: &ToolRegistry,
    session_id: &str,
    cancel: &CancellationToken,
) -> SagaToolResult {
    let Some(tool) = registry.get(&invocation.name) else {
        error!(tool_name = %invocation.name, "unknown tool");
        return error_result(
            ToolError::UnknownTool {
                name: invocation.name.clone(),
            }
            .to_string(),
        );
    };

    let ctx = ToolContext {
        tool_invocation_id: invocation.id.clone(),
        session_id: session_id.to_owned(),
        cancellation: cancel.clone(),
    };

    match tool
        .execute(Value::Object(invocation.input.clone()), &ctx)
        .await
    {
        Ok(result) => result,
        Err(e) => error_result(e.to_string()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
