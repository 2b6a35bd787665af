//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for catalog growth and popularity
//!   queries.
//! - Delegate collection and index maintenance to repository
//!   implementations.

use crate::model::catalog::{Album, AlbumId, Artist, ArtistId, Song};
use crate::repo::catalog_repo::{CatalogRepository, RepoResult};
use log::info;

/// Use-case service for catalog mutations and popularity queries.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new artist with zero likes.
    ///
    /// Duplicate display names are allowed and produce distinct entities;
    /// name lookups keep resolving the first registration.
    pub fn create_artist(&self, name: &str) -> RepoResult<Artist> {
        let artist = self.repo.create_artist(name)?;
        info!(
            "event=artist_created module=catalog status=ok artist_id={}",
            artist.uuid
        );
        Ok(artist)
    }

    /// Registers an album under the named artist.
    ///
    /// A missing artist is created implicitly; this is the documented
    /// fallback path of album creation, not an error.
    pub fn create_album(&self, title: &str, artist_name: &str) -> RepoResult<Album> {
        let album = self.repo.create_album(title, artist_name)?;
        info!(
            "event=album_created module=catalog status=ok album_id={} artist_id={}",
            album.uuid, album.artist
        );
        Ok(album)
    }

    /// Registers a song on an existing album.
    ///
    /// # Errors
    /// - `RepoError::NotFound(EntityKind::Album)` when no album carries
    ///   the given title. Nothing is mutated in that case.
    pub fn create_song(
        &self,
        title: &str,
        album_title: &str,
        duration_secs: u32,
    ) -> RepoResult<Song> {
        let song = self.repo.create_song(title, album_title, duration_secs)?;
        info!(
            "event=song_created module=catalog status=ok song_id={} album_id={} duration_secs={}",
            song.uuid, song.album, song.duration_secs
        );
        Ok(song)
    }

    /// Name of the artist with the most like events, when any artist
    /// exists. Later registrations win ties.
    pub fn most_liked_artist(&self) -> RepoResult<Option<String>> {
        self.repo.most_liked_artist()
    }

    /// Title of the most liked song, when any song exists. Later
    /// registrations win ties.
    pub fn most_liked_song(&self) -> RepoResult<Option<String>> {
        self.repo.most_liked_song()
    }

    /// First artist registered under the display name.
    pub fn find_artist_by_name(&self, name: &str) -> RepoResult<Option<Artist>> {
        self.repo.find_artist_by_name(name)
    }

    /// First album registered under the title.
    pub fn find_album_by_title(&self, title: &str) -> RepoResult<Option<Album>> {
        self.repo.find_album_by_title(title)
    }

    /// First catalog song carrying the title.
    pub fn find_song_by_title(&self, title: &str) -> RepoResult<Option<Song>> {
        self.repo.find_song_by_title(title)
    }

    /// All artists in registration order.
    pub fn list_artists(&self) -> RepoResult<Vec<Artist>> {
        self.repo.list_artists()
    }

    /// All albums in registration order.
    pub fn list_albums(&self) -> RepoResult<Vec<Album>> {
        self.repo.list_albums()
    }

    /// All songs in registration order.
    pub fn list_songs(&self) -> RepoResult<Vec<Song>> {
        self.repo.list_songs()
    }

    /// Albums owned by the artist, in registration order.
    pub fn artist_albums(&self, artist: ArtistId) -> RepoResult<Vec<Album>> {
        self.repo.artist_albums(artist)
    }

    /// Songs contained in the album, in registration order.
    pub fn album_songs(&self, album: AlbumId) -> RepoResult<Vec<Song>> {
        self.repo.album_songs(album)
    }
}
