//! Aria Player - Playback Engine
//!
//! Command-driven playback state for Aria Player.
//!
//! This crate provides:
//! - The [`PlayerStore`]: current track, queue, shuffle/repeat modes,
//!   volume/mute and playback intent, mutated only through atomic commands
//! - Queue shuffling (Fisher-Yates, reversible via the preserved original
//!   order)
//! - Repeat modes (off, all, one) and the next/previous state machines
//! - The [`AudioDevice`] capability trait and the [`DeviceAdapter`] that
//!   reconciles an external audio backend with the store
//!
//! # Architecture
//!
//! The store is pure state: commands in, snapshot out, no I/O. All device
//! side effects live in the adapter, which diffs consecutive snapshots and
//! issues the minimal device commands to catch up. That split is what makes
//! the command set testable without a real audio backend.
//!
//! Everything runs single-threaded and cooperatively: commands are
//! synchronous `&mut self` calls applied in invocation order, and the
//! adapter's frame tick serializes through the same path.
//!
//! # Example: Driving the store
//!
//! ```rust
//! use aria_core::Track;
//! use aria_playback::PlayerStore;
//! use std::time::Duration;
//!
//! let mut store = PlayerStore::default();
//!
//! let tracks = vec![
//!     Track::new("First", "Artist", "Album").with_duration(Duration::from_secs(120)),
//!     Track::new("Second", "Artist", "Album").with_duration(Duration::from_secs(90)),
//! ];
//! store.set_queue(tracks, 0);
//! assert!(store.state().is_playing);
//!
//! store.next_track();
//! assert_eq!(store.state().queue_index, Some(1));
//! assert_eq!(store.state().duration, Duration::from_secs(90));
//! ```
//!
//! # Example: Binding a device
//!
//! ```rust
//! use aria_playback::{AudioDevice, DeviceAdapter, PlayerStore, Result};
//! use std::time::Duration;
//!
//! struct NullDevice {
//!     position: Duration,
//! }
//!
//! impl AudioDevice for NullDevice {
//!     fn load(&mut self, _source: &str) -> Result<()> {
//!         self.position = Duration::ZERO;
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) {}
//!     fn position(&self) -> Duration {
//!         self.position
//!     }
//!     fn set_position(&mut self, position: Duration) {
//!         self.position = position;
//!     }
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn is_finished(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let mut store = PlayerStore::default();
//! let mut adapter = DeviceAdapter::new(NullDevice { position: Duration::ZERO });
//!
//! store.set_volume(0.4);
//! adapter.sync(&mut store); // host calls this after each command batch
//! adapter.tick(&mut store); // and this once per rendered frame
//! ```

#![forbid(unsafe_code)]

mod adapter;
mod device;
mod error;
mod shuffle;
mod store;
pub mod types;
mod volume;

// Public exports
pub use adapter::DeviceAdapter;
pub use device::AudioDevice;
pub use error::{PlaybackError, Result};
pub use shuffle::shuffled;
pub use store::{ListenerId, PlayerStore};
pub use types::{PlayerConfig, PlayerState, RepeatMode};
pub use volume::Volume;
