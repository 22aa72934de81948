//! Runtime error types.

use thiserror::Error;

use saga_stream::StreamError;

/// Errors surfaced while running a turn.
///
/// Handler failures are never runtime errors — they are isolated at the
/// dispatch boundary and reported as error tool results.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The stream parser reported a failure (service error, incomplete
    /// turn, unexpected end).
    #[error("{0}")]
    Stream(#[from] StreamError),

    /// Internal error (catch-all).
    #[error("{0}")]
    Internal(String),
}
