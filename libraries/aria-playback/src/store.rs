//! Player store - core state engine
//!
//! Owns the [`PlayerState`] singleton and exposes the command set that
//! mutates it. Every command is a synchronous, atomic transition: callers
//! never observe a partially applied update, and no command ever fails.
//! Invalid input is clamped (seek, volume) or ignored (navigation on an
//! empty queue).
//!
//! The store is pure state: it issues no device I/O. The
//! [`DeviceAdapter`](crate::DeviceAdapter) observes snapshots and drives the
//! audio backend to match.

use crate::shuffle::shuffled;
use crate::types::{PlayerConfig, PlayerState, RepeatMode};
use aria_core::{Playlist, Track, TrackId};
use std::time::Duration;

/// Pressing "previous" past this position restarts the current track
/// instead of moving back through the queue.
const PREVIOUS_RESTART_THRESHOLD: Duration = Duration::from_secs(3);

/// Upper bound on a seek target, in seconds
const MAX_SEEK_SECONDS: f64 = u32::MAX as f64;

/// Convert a user-supplied seek target into a position
///
/// NaN lands at zero; everything else clamps into [0, `MAX_SEEK_SECONDS`],
/// so the conversion cannot panic on any input.
pub(crate) fn seek_position(seconds: f64) -> Duration {
    let seconds = if seconds.is_nan() { 0.0 } else { seconds };
    Duration::from_secs_f64(seconds.clamp(0.0, MAX_SEEK_SECONDS))
}

/// Handle for removing a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&PlayerState)>;

/// Command-driven player state container
///
/// Listeners registered through [`PlayerStore::subscribe`] are invoked with
/// the post-transition snapshot after every state-changing command. Guarded
/// no-ops (playing while already playing, navigating an empty queue) do not
/// notify.
pub struct PlayerStore {
    state: PlayerState,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

impl PlayerStore {
    /// Create a store with the given initial configuration
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            state: PlayerState::new(config),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> PlayerState {
        self.state.clone()
    }

    /// Register a listener invoked after every state transition
    pub fn subscribe(&mut self, listener: impl FnMut(&PlayerState) + 'static) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        ListenerId(id)
    }

    /// Remove a previously registered listener
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id.0);
    }

    // ===== Playback controls =====

    /// Set playback intent to playing
    pub fn play(&mut self) {
        if self.state.is_playing {
            return;
        }
        self.state.is_playing = true;
        self.notify();
    }

    /// Set playback intent to paused
    pub fn pause(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.state.is_playing = false;
        self.notify();
    }

    /// Flip playback intent
    pub fn toggle_play(&mut self) {
        self.state.is_playing = !self.state.is_playing;
        self.notify();
    }

    /// Unload the current track and halt playback
    ///
    /// The queue itself is left intact; `next_track` afterwards starts over
    /// from the front.
    pub fn stop(&mut self) {
        self.state.is_playing = false;
        self.state.progress = Duration::ZERO;
        self.state.current_track = None;
        self.state.queue_index = None;
        self.state.duration = Duration::ZERO;
        self.notify();
    }

    // ===== Track navigation =====

    /// Advance to the next track
    ///
    /// Repeat-one restarts the current track. Past the end of the queue,
    /// repeat-all wraps to the front; otherwise playback stops with the last
    /// track still loaded.
    pub fn next_track(&mut self) {
        if self.state.queue.is_empty() {
            return;
        }

        if self.state.repeat == RepeatMode::One {
            self.state.progress = Duration::ZERO;
            self.notify();
            return;
        }

        let candidate = self.state.queue_index.map_or(0, |i| i + 1);

        if candidate < self.state.queue.len() {
            self.load_queue_index(candidate);
        } else if self.state.repeat == RepeatMode::All {
            self.load_queue_index(0);
        } else {
            // End of queue: stay on the last track, just stop advancing
            self.state.is_playing = false;
        }
        self.notify();
    }

    /// Move to the previous track
    ///
    /// More than three seconds into a track this restarts it instead,
    /// regardless of repeat mode. At the front of the queue, repeat-all
    /// wraps to the end; otherwise the first track restarts in place.
    pub fn previous_track(&mut self) {
        if self.state.queue.is_empty() {
            return;
        }

        if self.state.progress > PREVIOUS_RESTART_THRESHOLD {
            self.state.progress = Duration::ZERO;
            self.notify();
            return;
        }

        match self.state.queue_index {
            Some(i) if i > 0 => self.load_queue_index(i - 1),
            _ => {
                if self.state.repeat == RepeatMode::All {
                    self.load_queue_index(self.state.queue.len() - 1);
                } else {
                    self.state.progress = Duration::ZERO;
                }
            }
        }
        self.notify();
    }

    /// Load a specific track and start playing it
    ///
    /// If the track is already in the queue, jumps to its position. If not,
    /// a new queue is established: the supplied playlist's tracks, or a
    /// singleton queue of just this track. The new queue is shuffled first
    /// when shuffle is on.
    pub fn set_track(&mut self, track: &Track, playlist: Option<&Playlist>) {
        let mut index = self.locate(&track.id);

        if index.is_none() {
            let base: Vec<Track> =
                playlist.map_or_else(|| vec![track.clone()], |p| p.tracks.clone());

            self.state.original_queue = base.clone();
            self.state.queue = if self.state.is_shuffled {
                shuffled(&base)
            } else {
                base
            };
            self.state.current_playlist = playlist.cloned();

            // Locate again: shuffle may have moved the track
            index = self.locate(&track.id);
        }

        self.state.current_track = Some(track.clone());
        self.state.queue_index = index;
        self.state.progress = Duration::ZERO;
        self.state.duration = track.duration;
        self.state.is_playing = true;
        self.notify();
    }

    /// Replace the queue wholesale and start playback at `start_index`
    ///
    /// The unshuffled input becomes the original queue; with shuffle on, the
    /// traversal order is a fresh permutation of it. An out-of-bounds start
    /// index replaces the queue without loading a track.
    pub fn set_queue(&mut self, tracks: Vec<Track>, start_index: usize) {
        self.state.original_queue = tracks.clone();
        self.state.queue = if self.state.is_shuffled {
            shuffled(&tracks)
        } else {
            tracks
        };
        self.state.progress = Duration::ZERO;
        self.state.is_playing = true;

        match self.state.queue.get(start_index) {
            Some(track) => {
                self.state.current_track = Some(track.clone());
                self.state.duration = track.duration;
                self.state.queue_index = Some(start_index);
            }
            None => {
                self.state.current_track = None;
                self.state.duration = Duration::ZERO;
                self.state.queue_index = None;
            }
        }
        self.notify();
    }

    // ===== Progress and seeking =====

    /// Record the playback position reported by the device
    ///
    /// Feedback path for the device adapter; the value is stored verbatim.
    pub fn set_progress(&mut self, position: Duration) {
        self.state.progress = position;
        self.notify();
    }

    /// User-initiated seek, in seconds
    ///
    /// Negative and NaN input clamp to zero; anything past the seekable
    /// range caps instead of panicking.
    pub fn seek(&mut self, seconds: f64) {
        self.state.progress = seek_position(seconds);
        self.notify();
    }

    // ===== Volume controls =====

    /// Set the volume level, clamped into [0.0, 1.0]
    ///
    /// A clamped value of exactly zero mutes; any other value unmutes.
    pub fn set_volume(&mut self, level: f32) {
        self.state.volume.set(level);
        self.notify();
    }

    /// Flip mute without touching the stored volume level
    pub fn toggle_mute(&mut self) {
        self.state.volume.toggle_mute();
        self.notify();
    }

    // ===== Playback modes =====

    /// Toggle shuffle
    ///
    /// Turning shuffle on draws a fresh permutation of the current queue;
    /// turning it off restores the original order exactly. Either way the
    /// queue index is recomputed so it keeps pointing at the current track.
    pub fn toggle_shuffle(&mut self) {
        if self.state.is_shuffled {
            self.state.queue = self.state.original_queue.clone();
            self.state.is_shuffled = false;
        } else {
            self.state.queue = shuffled(&self.state.queue);
            self.state.is_shuffled = true;
        }
        self.state.queue_index = self.reindexed_current();
        self.notify();
    }

    /// Cycle the repeat mode: off, all, one, off
    pub fn toggle_repeat(&mut self) {
        self.state.repeat = self.state.repeat.cycled();
        self.notify();
    }

    // ===== Playlist context =====

    /// Set or clear the playlist context shown by the UI
    pub fn set_current_playlist(&mut self, playlist: Option<Playlist>) {
        self.state.current_playlist = playlist;
        self.notify();
    }

    // ===== Internals =====

    /// Make `queue[index]` the current track, resetting progress
    fn load_queue_index(&mut self, index: usize) {
        let track = self.state.queue[index].clone();
        self.state.duration = track.duration;
        self.state.current_track = Some(track);
        self.state.queue_index = Some(index);
        self.state.progress = Duration::ZERO;
    }

    /// Position of a track id within the traversal queue
    fn locate(&self, id: &TrackId) -> Option<usize> {
        self.state.queue.iter().position(|t| t.id == *id)
    }

    /// Index of the current track after a queue reordering
    ///
    /// Defaults to the front of the queue when the current track is defined
    /// but missing from the new order.
    fn reindexed_current(&self) -> Option<usize> {
        let current = self.state.current_track.as_ref()?;
        if self.state.queue.is_empty() {
            return None;
        }
        Some(self.locate(&current.id).unwrap_or(0))
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}
