//! Error types for Rigstage.
//!
//! Only failures that must reach the caller become variants here: unknown
//! references, persistence problems, and the collaborator system not coming
//! up. Out-of-range edits (trims past their bounds, seeks past the end,
//! split points outside a clip) are clamped or rejected as no-ops at the
//! call site and never surface as errors.

use thiserror::Error;

/// Main error type for Rigstage operations.
#[derive(Error, Debug)]
pub enum RigstageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown animation: {0}")]
    UnknownAnimation(String),

    #[error("Unknown track: {0}")]
    UnknownTrack(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Animation system unavailable: {0}")]
    SystemUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Rigstage operations.
pub type Result<T> = std::result::Result<T, RigstageError>;
