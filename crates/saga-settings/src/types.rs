//! Settings type definitions.
//!
//! All fields have compiled defaults so a missing or partial settings file
//! always produces a usable configuration.

use serde::{Deserialize, Serialize};

/// Root settings for the saga agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SagaSettings {
    /// Settings schema version.
    pub version: String,
    /// Agent name.
    pub name: String,
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Stream parser configuration.
    pub stream: StreamSettings,
    /// Event emitter configuration.
    pub events: EventSettings,
}

impl Default for SagaSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".into(),
            name: "saga".into(),
            logging: LoggingSettings::default(),
            stream: StreamSettings::default(),
            events: EventSettings::default(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default log level filter (overridable via `RUST_LOG`).
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Stream parser configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamSettings {
    /// Whether to process a trailing unterminated buffer when the feed ends.
    pub process_remaining_buffer: bool,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            process_remaining_buffer: true,
        }
    }
}

/// Event emitter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventSettings {
    /// Broadcast channel capacity for lifecycle events.
    pub channel_capacity: usize,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            channel_capacity: 1024,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
