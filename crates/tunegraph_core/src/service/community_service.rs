//! Community use-case service: users, playlists, likes.
//!
//! # Responsibility
//! - Provide stable entry points for listener accounts, playlist
//!   lifecycle and like bookkeeping.
//! - Delegate relationship-index maintenance to repository
//!   implementations.
//!
//! # Invariants
//! - Duplicate like and duplicate join calls are successful no-ops.
//! - Log records never include mobile numbers or display names.

use crate::model::catalog::{Song, SongId};
use crate::model::community::{Playlist, PlaylistId, User, UserId};
use crate::repo::catalog_repo::{CatalogRepository, RepoResult};
use log::info;

/// Use-case service for the social half of the repository.
pub struct CommunityService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CommunityService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a listener account.
    ///
    /// Mobile uniqueness is not enforced at this layer; the first user
    /// registered under a mobile keeps winning lookups.
    pub fn create_user(&self, name: &str, mobile: &str) -> RepoResult<User> {
        let user = self.repo.create_user(name, mobile)?;
        info!(
            "event=user_created module=community status=ok user_id={}",
            user.uuid
        );
        Ok(user)
    }

    /// Creates a playlist from every catalog song of exactly the given
    /// duration, snapshotted at call time.
    ///
    /// # Errors
    /// - `RepoError::NotFound(EntityKind::User)` when the mobile resolves
    ///   no user.
    pub fn create_playlist_by_duration(
        &self,
        mobile: &str,
        title: &str,
        duration_secs: u32,
    ) -> RepoResult<Playlist> {
        let playlist = self
            .repo
            .create_playlist_by_duration(mobile, title, duration_secs)?;
        info!(
            "event=playlist_created module=community status=ok mode=duration playlist_id={}",
            playlist.uuid
        );
        Ok(playlist)
    }

    /// Creates a playlist from every catalog song matching the requested
    /// titles, in requested-title order then catalog order.
    ///
    /// # Errors
    /// - `RepoError::NotFound(EntityKind::User)` when the mobile resolves
    ///   no user.
    pub fn create_playlist_by_titles(
        &self,
        mobile: &str,
        title: &str,
        song_titles: &[String],
    ) -> RepoResult<Playlist> {
        let playlist = self
            .repo
            .create_playlist_by_titles(mobile, title, song_titles)?;
        info!(
            "event=playlist_created module=community status=ok mode=titles playlist_id={}",
            playlist.uuid
        );
        Ok(playlist)
    }

    /// Adds the user as a listener of the named playlist and returns it.
    ///
    /// The creator and existing listeners join as a no-op: the playlist
    /// is returned unchanged and nobody is duplicated.
    ///
    /// # Errors
    /// - `RepoError::NotFound(EntityKind::User)` for an unknown mobile.
    /// - `RepoError::NotFound(EntityKind::Playlist)` for an unknown
    ///   title.
    pub fn join_playlist(&self, mobile: &str, playlist_title: &str) -> RepoResult<Playlist> {
        let playlist = self.repo.join_playlist(mobile, playlist_title)?;
        info!(
            "event=playlist_joined module=community status=ok playlist_id={}",
            playlist.uuid
        );
        Ok(playlist)
    }

    /// Records a like for the named song; the owning artist is auto-liked.
    ///
    /// A (user, song) pair is counted once: repeat calls return the song
    /// unchanged.
    ///
    /// # Errors
    /// - `RepoError::NotFound(EntityKind::User)` for an unknown mobile.
    /// - `RepoError::NotFound(EntityKind::Song)` for an unknown title.
    pub fn like_song(&self, mobile: &str, song_title: &str) -> RepoResult<Song> {
        let song = self.repo.like_song(mobile, song_title)?;
        info!(
            "event=song_liked module=community status=ok song_id={} likes={}",
            song.uuid, song.likes
        );
        Ok(song)
    }

    /// First user registered under the mobile number.
    pub fn find_user_by_mobile(&self, mobile: &str) -> RepoResult<Option<User>> {
        self.repo.find_user_by_mobile(mobile)
    }

    /// First playlist registered under the title.
    pub fn find_playlist_by_title(&self, title: &str) -> RepoResult<Option<Playlist>> {
        self.repo.find_playlist_by_title(title)
    }

    /// All users in registration order.
    pub fn list_users(&self) -> RepoResult<Vec<User>> {
        self.repo.list_users()
    }

    /// All playlists in registration order.
    pub fn list_playlists(&self) -> RepoResult<Vec<Playlist>> {
        self.repo.list_playlists()
    }

    /// Member songs snapshotted at playlist creation time.
    pub fn playlist_songs(&self, playlist: PlaylistId) -> RepoResult<Vec<Song>> {
        self.repo.playlist_songs(playlist)
    }

    /// Listeners of the playlist; the creator is always first.
    pub fn playlist_listeners(&self, playlist: PlaylistId) -> RepoResult<Vec<User>> {
        self.repo.playlist_listeners(playlist)
    }

    /// Playlists the user follows, including those the user created.
    pub fn user_playlists(&self, user: UserId) -> RepoResult<Vec<Playlist>> {
        self.repo.user_playlists(user)
    }

    /// Playlists the user created, in creation order.
    pub fn created_playlists(&self, user: UserId) -> RepoResult<Vec<Playlist>> {
        self.repo.created_playlists(user)
    }

    /// Users that liked the song, in like order.
    pub fn song_likers(&self, song: SongId) -> RepoResult<Vec<User>> {
        self.repo.song_likers(song)
    }
}
