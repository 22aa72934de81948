//! # saga-agent
//!
//! Replays a recorded turn transcript (the SSE frame feed captured from the
//! generative service) through the full pipeline: parse → dispatch → drain,
//! printing the results. Useful for inspecting what a captured turn does to
//! a scenario without talking to the service.

#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use saga_consistency::{NotificationBuffer, SectionStore};
use saga_runtime::{EventEmitter, run_turn};
use saga_settings::get_settings;
use saga_stream::sse::SseParserOptions;
use saga_tools::ToolRegistry;
use saga_tools::scenario::{SetSectionTool, UpdateCharacterTool};

/// Saga agent transcript replayer.
#[derive(Parser, Debug)]
#[command(name = "saga-agent", about = "Replay a recorded turn transcript")]
struct Cli {
    /// Path to the recorded SSE transcript.
    #[arg(long)]
    transcript: PathBuf,

    /// Session ID to stamp on lifecycle events (random if omitted).
    #[arg(long)]
    session: Option<String>,
}

/// Create the tool registry with the built-in scenario tools.
fn create_tool_registry(
    store: &Arc<SectionStore>,
    notifications: &Arc<NotificationBuffer>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(SetSectionTool::new(
        store.clone(),
        notifications.clone(),
    )));
    registry.register(Arc::new(UpdateCharacterTool::new(
        store.clone(),
        notifications.clone(),
    )));
    registry
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = get_settings();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let session_id = cli
        .session
        .unwrap_or_else(|| uuid::Uuid::now_v7().to_string());

    let raw = tokio::fs::read(&cli.transcript)
        .await
        .with_context(|| format!("failed to read transcript: {}", cli.transcript.display()))?;
    info!(
        transcript = %cli.transcript.display(),
        bytes = raw.len(),
        session_id,
        "replaying transcript"
    );

    let options = SseParserOptions {
        process_remaining_buffer: settings.stream.process_remaining_buffer,
    };
    let chunks = futures::stream::iter(vec![Ok::<Bytes, std::io::Error>(Bytes::from(raw))]);
    let stream = saga_stream::pipeline::event_stream(chunks, &options);

    let store = Arc::new(SectionStore::new());
    let notifications = Arc::new(NotificationBuffer::new());
    let registry = create_tool_registry(&store, &notifications);
    let emitter = Arc::new(EventEmitter::with_capacity(
        settings.events.channel_capacity,
    ));

    let outcome = run_turn(
        stream,
        &registry,
        &session_id,
        1,
        &emitter,
        &notifications,
        &CancellationToken::new(),
    )
    .await
    .context("turn failed")?;

    if !outcome.text.is_empty() {
        println!("── prose ──");
        println!("{}", outcome.text);
    }

    if !outcome.tool_results.is_empty() {
        println!("── tool results ──");
        for result in &outcome.tool_results {
            let marker = if result.is_error { "error" } else { "ok" };
            println!("[{marker}] {}: {}", result.tool_invocation_id, result.content);
        }
    }

    if !outcome.notifications.is_empty() {
        println!("── notifications ──");
        for notification in &outcome.notifications {
            println!("{}", serde_json::to_string(notification)?);
        }
    }

    if let Some(usage) = &outcome.usage {
        println!(
            "── usage: {} in / {} out ──",
            usage.input_tokens, usage.output_tokens
        );
    }

    Ok(())
}
