//! Core types for the playback engine

use crate::volume::Volume;
use aria_core::{Playlist, Track};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the queue ends
    Off,

    /// Loop the entire queue
    All,

    /// Loop the current track only
    One,
}

impl RepeatMode {
    /// Next mode in the toggle cycle: off, all, one, off
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Configuration for the player store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0-1.0, default: 0.7)
    pub volume: f32,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Start with shuffle enabled (default: false)
    pub shuffled: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 0.7,
            repeat: RepeatMode::Off,
            shuffled: false,
        }
    }
}

/// Player state snapshot
///
/// The single mutable resource of the engine. Owned by
/// [`PlayerStore`](crate::PlayerStore) and mutated exclusively through its
/// command set; everyone else observes it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// The track considered loaded
    pub current_track: Option<Track>,

    /// Playback intent (not necessarily device truth)
    pub is_playing: bool,

    /// Last known playback position
    pub progress: Duration,

    /// Duration of the current track, zero if none
    pub duration: Duration,

    /// Volume level and mute flag
    pub volume: Volume,

    /// The sequence actually being traversed (possibly shuffled)
    pub queue: Vec<Track>,

    /// Traversal order before shuffling, kept for exact restoration
    pub original_queue: Vec<Track>,

    /// Position of the active track within `queue`; `None` when no track
    /// is active
    pub queue_index: Option<usize>,

    /// Whether `queue` is currently a shuffled permutation
    pub is_shuffled: bool,

    /// Repeat mode
    pub repeat: RepeatMode,

    /// Playlist context for the UI; not consulted by traversal logic
    pub current_playlist: Option<Playlist>,
}

impl PlayerState {
    /// Create the initial state from configuration
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            current_track: None,
            is_playing: false,
            progress: Duration::ZERO,
            duration: Duration::ZERO,
            volume: Volume::new(config.volume),
            queue: Vec::new(),
            original_queue: Vec::new(),
            queue_index: None,
            is_shuffled: config.shuffled,
            repeat: config.repeat,
            current_playlist: None,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}
