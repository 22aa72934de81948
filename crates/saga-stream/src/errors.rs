//! Stream parsing error types.

use thiserror::Error;

/// Errors surfaced while parsing or collecting a turn.
///
/// Retry policy belongs to the caller; the parser only reports.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The transport ended while tool-call blocks were still open.
    ///
    /// The open invocations are neither dropped nor fabricated; their ids
    /// are reported so the caller can decide what to do.
    #[error("incomplete turn: transport ended with open tool calls: {}", open_invocation_ids.join(", "))]
    IncompleteTurn {
        /// Ids of the invocations whose close frame never arrived.
        open_invocation_ids: Vec<String>,
    },

    /// The transport ended before the turn-end frame arrived.
    #[error("stream ended without a turn end frame")]
    UnexpectedEnd,

    /// The service reported an error mid-stream.
    #[error("service error: {message}")]
    Service {
        /// Error message from the service.
        message: String,
    },
}
