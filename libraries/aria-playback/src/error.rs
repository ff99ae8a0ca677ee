//! Error types for the playback engine
//!
//! Store commands never fail (invalid input is clamped or ignored); errors
//! only exist at the device boundary, where they are caught by the adapter
//! and resolved into a paused store.

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Device failed to load an audio source
    #[error("failed to load audio source {0}")]
    LoadFailed(String),

    /// Device refused to start playback (resource not ready, autoplay blocked)
    #[error("device rejected playback: {0}")]
    PlaybackRejected(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
