//! Read-only catalog interface
//!
//! The catalog supplies [`Track`] and [`Playlist`] values to the playback
//! engine and the presentation layer. The engine never writes back: playlist
//! edits and library management live behind this boundary.

use crate::types::{Playlist, PlaylistId, Track, TrackId};
use std::collections::HashMap;

/// Read-only provider of tracks and playlists
pub trait Catalog {
    /// Look up a track by id
    fn track(&self, id: &TrackId) -> Option<Track>;

    /// Look up a playlist by id
    fn playlist(&self, id: &PlaylistId) -> Option<Playlist>;

    /// All tracks, in catalog order
    fn tracks(&self) -> Vec<Track>;

    /// All playlists, in catalog order
    fn playlists(&self) -> Vec<Playlist>;
}

/// In-memory catalog
///
/// Holds a fixed set of tracks and playlists. Suitable for sample data and
/// tests; a real application would put its library store behind [`Catalog`]
/// instead.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    track_index: HashMap<TrackId, usize>,
    playlist_index: HashMap<PlaylistId, usize>,
}

impl MemoryCatalog {
    /// Create a catalog from fixed track and playlist sets
    pub fn new(tracks: Vec<Track>, playlists: Vec<Playlist>) -> Self {
        let track_index = tracks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        let playlist_index = playlists
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        Self {
            tracks,
            playlists,
            track_index,
            playlist_index,
        }
    }
}

impl Catalog for MemoryCatalog {
    fn track(&self, id: &TrackId) -> Option<Track> {
        self.track_index.get(id).map(|&i| self.tracks[i].clone())
    }

    fn playlist(&self, id: &PlaylistId) -> Option<Playlist> {
        self.playlist_index
            .get(id)
            .map(|&i| self.playlists[i].clone())
    }

    fn tracks(&self) -> Vec<Track> {
        self.tracks.clone()
    }

    fn playlists(&self) -> Vec<Playlist> {
        self.playlists.clone()
    }
}
