//! Core trait and execution context for the tool system.

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use saga_core::tools::{SagaToolResult, Tool};

use crate::errors::ToolError;

// ─────────────────────────────────────────────────────────────────────────────
// Tool context
// ─────────────────────────────────────────────────────────────────────────────

/// Execution context passed to every tool invocation.
#[derive(Clone, Debug)]
pub struct ToolContext {
    /// Unique ID of this tool invocation.
    pub tool_invocation_id: String,
    /// Session the invoking turn belongs to.
    pub session_id: String,
    /// Cancellation token for cooperative cancellation.
    pub cancellation: CancellationToken,
}

// ─────────────────────────────────────────────────────────────────────────────
// SagaTool trait
// ─────────────────────────────────────────────────────────────────────────────

/// The core trait that every tool must implement.
///
/// Each tool provides:
/// - **Schema** via [`definition()`](SagaTool::definition) — sent to the
///   generative service
/// - **Execution** via [`execute()`](SagaTool::execute) — invoked with the
///   JSON input collected from the stream
///
/// Tools deserialize and validate their input at the top of `execute` and
/// report expected validation failures as error results (or
/// [`ToolError::Validation`], which the dispatcher converts) rather than
/// panicking. Shared resources (section store, notification buffer) are
/// injected at construction, not through the context.
#[async_trait]
pub trait SagaTool: Send + Sync {
    /// Tool name — the exact string sent to/from the generative service.
    fn name(&self) -> &str;

    /// Generate the [`Tool`] schema for the generative service.
    fn definition(&self) -> Tool;

    /// Execute the tool with JSON input.
    async fn execute(&self, params: Value, ctx: &ToolContext)
    -> Result<SagaToolResult, ToolError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
