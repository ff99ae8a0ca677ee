//! Device adapter - store/device reconciliation
//!
//! Observes [`PlayerStore`] snapshots and drives an [`AudioDevice`] to
//! match: source loads on track change, play/pause on intent change,
//! effective volume pushes, and a per-frame tick that samples the device
//! position back into the store and advances the queue when a track ends.
//!
//! Device failures never propagate. A rejected load or play is logged and
//! resolved by forcing the store to paused, so `is_playing` never claims
//! playback the device is not actually performing. The user can simply
//! retry with `play`.

use crate::device::AudioDevice;
use crate::store::{seek_position, PlayerStore};
use aria_core::TrackId;
use std::time::Duration;
use tracing::{debug, warn};

/// Binds a [`PlayerStore`] to an [`AudioDevice`]
///
/// The host event loop calls [`sync`](DeviceAdapter::sync) after issuing
/// store commands and [`tick`](DeviceAdapter::tick) once per rendered frame.
/// Both run on the same thread as the store, so a tick and a user command
/// can never interleave mid-mutation.
pub struct DeviceAdapter<D: AudioDevice> {
    device: D,

    /// Track whose source is currently loaded into the device
    loaded: Option<TrackId>,

    /// Whether we believe the device is playing
    device_playing: bool,

    /// Effective volume last pushed to the device
    pushed_volume: Option<f32>,

    /// Guards against advancing more than once per finished source
    ended_handled: bool,
}

impl<D: AudioDevice> DeviceAdapter<D> {
    /// Create an adapter owning the device handle
    ///
    /// The adapter is the only component permitted to issue device commands.
    pub fn new(device: D) -> Self {
        Self {
            device,
            loaded: None,
            device_playing: false,
            pushed_volume: None,
            ended_handled: false,
        }
    }

    /// Borrow the wrapped device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Reconcile the device with the store's current state
    ///
    /// Idempotent: only the parts of the state that differ from what the
    /// device last saw produce device commands.
    pub fn sync(&mut self, store: &mut PlayerStore) {
        self.sync_track(store);
        self.sync_intent(store);
        self.sync_volume(store);
    }

    /// Per-frame reconciliation while playing
    ///
    /// Samples the device position into the store, and advances the queue
    /// when the loaded source has played to its end. Does nothing while the
    /// store says paused, so sampling halts the same tick intent drops.
    pub fn tick(&mut self, store: &mut PlayerStore) {
        if !store.state().is_playing {
            return;
        }

        if !self.device.is_finished() {
            // Device is advancing: re-arm the ended edge so a replayed
            // source can end naturally again
            self.ended_handled = false;
            store.set_progress(self.device.position());
            return;
        }

        if !self.ended_handled {
            self.ended_handled = true;
            self.on_track_ended(store);
        }
    }

    /// User-initiated seek
    ///
    /// Writes the device position and the store progress in the same call,
    /// so UI and device agree without waiting for the next sampling tick.
    pub fn seek(&mut self, store: &mut PlayerStore, seconds: f64) {
        self.device.set_position(seek_position(seconds));
        self.ended_handled = false;
        store.seek(seconds);
    }

    fn sync_track(&mut self, store: &mut PlayerStore) {
        let current = store.state().current_track.as_ref().map(|t| t.id.clone());
        if current == self.loaded {
            return;
        }

        match store.state().current_track.clone() {
            Some(track) => {
                debug!(track = %track.id, source = %track.audio_url, "loading track");
                self.ended_handled = false;
                // A freshly loaded source is never playing until told to be,
                // so intent reconciliation re-issues play after the load
                self.device_playing = false;
                match self.device.load(&track.audio_url) {
                    Ok(()) => self.loaded = Some(track.id),
                    Err(err) => {
                        warn!(track = %track.id, error = %err, "device failed to load source");
                        // Nothing is loaded now; the next sync retries the load
                        self.loaded = None;
                        store.pause();
                    }
                }
            }
            None => {
                self.device.pause();
                self.device_playing = false;
                self.loaded = None;
            }
        }
    }

    fn sync_intent(&mut self, store: &mut PlayerStore) {
        let wants_playing = store.state().is_playing && self.loaded.is_some();
        if wants_playing == self.device_playing {
            return;
        }

        if wants_playing {
            self.start_device(store);
        } else {
            self.device.pause();
            self.device_playing = false;
        }
    }

    fn sync_volume(&mut self, store: &PlayerStore) {
        let effective = store.state().volume.effective();
        if self.pushed_volume != Some(effective) {
            self.device.set_volume(effective);
            self.pushed_volume = Some(effective);
        }
    }

    /// Natural end of track: the sole path by which the device advances
    /// the queue.
    fn on_track_ended(&mut self, store: &mut PlayerStore) {
        store.next_track();

        let same_source =
            store.state().current_track.as_ref().map(|t| &t.id) == self.loaded.as_ref();
        if store.state().is_playing && same_source {
            // Repeat-one, or a single-track queue wrapping onto itself: the
            // source stays loaded, so rewind and start again
            self.device.set_position(Duration::ZERO);
            self.ended_handled = false;
            self.device_playing = false;
            self.start_device(store);
        } else {
            self.sync(store);
        }
    }

    fn start_device(&mut self, store: &mut PlayerStore) {
        match self.device.play() {
            Ok(()) => self.device_playing = true,
            Err(err) => {
                warn!(error = %err, "device rejected playback");
                self.device_playing = false;
                store.pause();
            }
        }
    }
}
