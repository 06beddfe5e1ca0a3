//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while capturing or restoring a paused run
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The checkpoint could not be written as JSON or bincode
    #[error("Failed to encode checkpoint as {format}: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    /// The bytes or text do not hold a checkpoint for this automaton
    #[error("Failed to decode {format} checkpoint: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The recorded history does not lead to the recorded state
    #[error("Inconsistent checkpoint {id}: {reason}")]
    Inconsistent { id: String, reason: String },
}
