/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Audio track
///
/// Immutable value supplied by the catalog. The playback engine carries
/// tracks through its queue by value and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Track duration
    pub duration: Duration,

    /// Cover artwork reference
    pub cover_url: String,

    /// Audio source reference loaded into the playback device
    pub audio_url: String,
}

impl Track {
    /// Create a new track with a generated id and zero duration
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration: Duration::ZERO,
            cover_url: String::new(),
            audio_url: String::new(),
        }
    }

    /// Set the track duration
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the audio source reference
    #[must_use]
    pub fn with_audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio_url = url.into();
        self
    }

    /// Set the cover artwork reference
    #[must_use]
    pub fn with_cover_url(mut self, url: impl Into<String>) -> Self {
        self.cover_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new("Song", "Artist", "Album")
            .with_duration(Duration::from_secs(180))
            .with_audio_url("/audio/song.mp3");

        assert_eq!(track.title, "Song");
        assert_eq!(track.duration, Duration::from_secs(180));
        assert_eq!(track.audio_url, "/audio/song.mp3");
    }
}
