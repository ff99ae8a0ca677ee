//! Audio device capability trait
//!
//! Abstracts the external audio-rendering backend (HTML media element,
//! rodio sink, platform decoder). The engine only ever issues this command
//! set and observes position/end-of-track; decoding and rendering are the
//! device's business.

use crate::error::Result;
use std::time::Duration;

/// Playback device capability set
///
/// `load` and `play` may fail: a source can be unreachable, or the
/// environment can refuse to start playback (autoplay policies). Those
/// failures are non-fatal and are absorbed by the
/// [`DeviceAdapter`](crate::DeviceAdapter).
pub trait AudioDevice {
    /// Load an audio source, replacing whatever was loaded before
    fn load(&mut self, source: &str) -> Result<()>;

    /// Start or resume playback of the loaded source
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Current playback position within the loaded source
    fn position(&self) -> Duration;

    /// Jump to a position within the loaded source
    fn set_position(&mut self, position: Duration);

    /// Set the output gain (0.0-1.0)
    fn set_volume(&mut self, volume: f32);

    /// Whether the loaded source has played to its end
    fn is_finished(&self) -> bool;
}
