//! Catalog domain model: artists, albums, songs.
//!
//! # Responsibility
//! - Define the owned entity records of the music catalog.
//! - Keep single-owner attributes (`Album::artist`, `Song::album`) on the
//!   record so every entity names its owner directly.
//!
//! # Invariants
//! - `uuid` is generated once and never reused for another entity.
//! - Display names and titles are not identity: duplicates are distinct
//!   entities with distinct ids.
//! - `likes` counters start at zero, only grow, and are maintained by the
//!   repository, never set by callers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an artist.
pub type ArtistId = Uuid;
/// Stable identifier for an album.
pub type AlbumId = Uuid;
/// Stable identifier for a song.
pub type SongId = Uuid;

/// A performing artist registered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Stable global ID used by relationship indexes.
    pub uuid: ArtistId,
    /// Display name. Not unique; name lookups resolve the first
    /// registration.
    pub name: String,
    /// Count of like events across all of this artist's songs. A user
    /// liking two songs by the same artist contributes two.
    pub likes: u64,
}

impl Artist {
    /// Creates an artist with a generated stable ID and zero likes.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an artist with a caller-provided stable ID.
    ///
    /// Used by tests that need deterministic identity.
    pub fn with_id(uuid: ArtistId, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
            likes: 0,
        }
    }
}

/// An album owned by exactly one artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Stable global ID used by relationship indexes.
    pub uuid: AlbumId,
    /// Display title. Not unique; title lookups resolve the first
    /// registration.
    pub title: String,
    /// Owning artist. The artist exists before the album does.
    pub artist: ArtistId,
}

impl Album {
    /// Creates an album with a generated stable ID under `artist`.
    pub fn new(title: impl Into<String>, artist: ArtistId) -> Self {
        Self::with_id(Uuid::new_v4(), title, artist)
    }

    /// Creates an album with a caller-provided stable ID.
    pub fn with_id(uuid: AlbumId, title: impl Into<String>, artist: ArtistId) -> Self {
        Self {
            uuid,
            title: title.into(),
            artist,
        }
    }
}

/// A song contained in exactly one album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Stable global ID used by relationship indexes.
    pub uuid: SongId,
    /// Display title. Not unique; title lookups resolve catalog order.
    pub title: String,
    /// Owning album. The album exists before the song does.
    pub album: AlbumId,
    /// Playback length in whole seconds. Duration-based playlist
    /// selection matches this value exactly.
    pub duration_secs: u32,
    /// Count of distinct users that liked this song.
    pub likes: u64,
}

impl Song {
    /// Creates a song with a generated stable ID on `album`.
    pub fn new(title: impl Into<String>, album: AlbumId, duration_secs: u32) -> Self {
        Self::with_id(Uuid::new_v4(), title, album, duration_secs)
    }

    /// Creates a song with a caller-provided stable ID.
    pub fn with_id(
        uuid: SongId,
        title: impl Into<String>,
        album: AlbumId,
        duration_secs: u32,
    ) -> Self {
        Self {
            uuid,
            title: title.into(),
            album,
            duration_secs,
            likes: 0,
        }
    }
}
