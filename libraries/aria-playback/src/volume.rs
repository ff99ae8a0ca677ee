//! Volume control
//!
//! Linear volume level in [0.0, 1.0] plus an independent mute flag. Muting
//! does not alter the stored level; setting the level to exactly zero forces
//! mute on, and any non-zero set clears it.

use serde::{Deserialize, Serialize};

/// Volume controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f32,

    /// Mute state (preserves the level)
    muted: bool,
}

impl Volume {
    /// Create a new volume controller
    ///
    /// The level is clamped into [0.0, 1.0]; a zero level starts muted.
    pub fn new(level: f32) -> Self {
        let mut volume = Self {
            level: 0.0,
            muted: true,
        };
        volume.set(level);
        volume
    }

    /// Set the volume level
    ///
    /// Clamps into [0.0, 1.0], with NaN treated as zero. Mute is recomputed
    /// from the clamped value: exactly zero mutes, anything else unmutes.
    pub fn set(&mut self, level: f32) {
        let level = if level.is_nan() { 0.0 } else { level };
        self.level = level.clamp(0.0, 1.0);
        self.muted = self.level == 0.0;
    }

    /// Toggle mute, leaving the level unchanged
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Effective gain pushed to the playback device
    ///
    /// Zero when muted, otherwise the level.
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(0.7)
    }
}
