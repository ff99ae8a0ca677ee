//! Aria Player Core
//!
//! Domain types and the read-only catalog interface for Aria Player.
//!
//! This crate defines:
//! - **Domain Types**: [`Track`], [`Playlist`] and their id newtypes
//! - **Catalog Interface**: the [`Catalog`] trait supplying those values to
//!   the playback engine, plus an in-memory implementation
//!
//! Tracks and playlists are immutable values: they are created by a catalog
//! provider and never mutated by the playback engine.
//!
//! # Example
//!
//! ```rust
//! use aria_core::{Catalog, MemoryCatalog, Playlist, Track};
//! use std::time::Duration;
//!
//! let track = Track::new("Midnight Drive", "Nova Waves", "City Lights")
//!     .with_duration(Duration::from_secs(212));
//! let playlist = Playlist::new("Late Night", vec![track.clone()]);
//!
//! let catalog = MemoryCatalog::new(vec![track.clone()], vec![playlist]);
//! assert_eq!(catalog.track(&track.id).unwrap().title, "Midnight Drive");
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, MemoryCatalog};
pub use types::{Playlist, PlaylistId, Track, TrackId};
