/// Playlist domain type
use crate::types::{PlaylistId, Track};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist
///
/// An ordered sequence of tracks. Duplicate tracks (by identity) are
/// allowed. Read-only input to the playback engine; edits are a catalog
/// concern and are not persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Cover artwork reference
    pub cover_url: String,

    /// Ordered tracks
    pub tracks: Vec<Track>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new playlist with a generated id
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        let now = Utc::now();
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            description: None,
            cover_url: String::new(),
            tracks,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Total playlist duration
    pub fn total_duration(&self) -> std::time::Duration {
        self.tracks.iter().map(|t| t.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn playlist_creation() {
        let tracks = vec![
            Track::new("One", "A", "X").with_duration(Duration::from_secs(100)),
            Track::new("Two", "B", "X").with_duration(Duration::from_secs(50)),
        ];
        let playlist = Playlist::new("Mix", tracks).with_description("test mix");

        assert_eq!(playlist.name, "Mix");
        assert_eq!(playlist.tracks.len(), 2);
        assert_eq!(playlist.total_duration(), Duration::from_secs(150));
        assert_eq!(playlist.description.as_deref(), Some("test mix"));
    }

    #[test]
    fn playlist_allows_duplicate_tracks() {
        let track = Track::new("One", "A", "X");
        let playlist = Playlist::new("Loop", vec![track.clone(), track.clone()]);

        assert_eq!(playlist.tracks[0].id, playlist.tracks[1].id);
    }
}
