//! Catalog/social repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own every entity collection and derived relationship index.
//! - Maintain all indexes incrementally as entities are created and
//!   relationships change; there is no separate indexing pass.
//!
//! # Invariants
//! - Every index slot for an entity is registered before the entity is
//!   returned to the caller.
//! - Relationship index values are ordered, duplicate-free id sequences.
//! - Natural-key lookups resolve the first registration of a key.
//! - `Song::likes` equals the size of the song's liker index at all times;
//!   `Artist::likes` counts like events across the artist's songs.

use crate::model::catalog::{Album, AlbumId, Artist, ArtistId, Song, SongId};
use crate::model::community::{normalize_mobile, Playlist, PlaylistId, User, UserId};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Entity kinds named by not-found errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Artist,
    Album,
    Song,
    Playlist,
}

impl EntityKind {
    /// Lowercase noun used in error messages and log records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Song => "song",
            Self::Playlist => "playlist",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-input error for repository operations.
///
/// Idempotent no-ops (duplicate like, duplicate join) are successes, not
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoError {
    /// Lookup by natural key or id found no entity of this kind.
    NotFound(EntityKind),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(kind) => write!(f, "{kind} does not exist"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for catalog and social-graph operations.
pub trait CatalogRepository {
    /// Registers a user. Mobile uniqueness is not enforced; the first
    /// user registered under a mobile wins lookups.
    fn create_user(&self, name: &str, mobile: &str) -> RepoResult<User>;
    /// Registers an artist with zero likes and an empty album index.
    fn create_artist(&self, name: &str) -> RepoResult<Artist>;
    /// Registers an album under the named artist, creating the artist
    /// when absent.
    fn create_album(&self, title: &str, artist_name: &str) -> RepoResult<Album>;
    /// Registers a song on an existing album.
    fn create_song(&self, title: &str, album_title: &str, duration_secs: u32)
        -> RepoResult<Song>;

    /// Creates a playlist from every catalog song of exactly the given
    /// duration.
    fn create_playlist_by_duration(
        &self,
        mobile: &str,
        title: &str,
        duration_secs: u32,
    ) -> RepoResult<Playlist>;
    /// Creates a playlist from every catalog song matching the requested
    /// titles, in requested-title order then catalog order.
    fn create_playlist_by_titles(
        &self,
        mobile: &str,
        title: &str,
        song_titles: &[String],
    ) -> RepoResult<Playlist>;
    /// Adds the user as a listener of the named playlist. Idempotent for
    /// the creator and existing listeners.
    fn join_playlist(&self, mobile: &str, playlist_title: &str) -> RepoResult<Playlist>;
    /// Records a like for the named song and its owning artist.
    /// Idempotent per (user, song) pair.
    fn like_song(&self, mobile: &str, song_title: &str) -> RepoResult<Song>;

    /// Name of the artist with the most like events, or `None` when no
    /// artists exist. Later registrations win ties.
    fn most_liked_artist(&self) -> RepoResult<Option<String>>;
    /// Title of the song with the most likes, or `None` when no songs
    /// exist. Later registrations win ties.
    fn most_liked_song(&self) -> RepoResult<Option<String>>;

    fn find_user_by_mobile(&self, mobile: &str) -> RepoResult<Option<User>>;
    fn find_artist_by_name(&self, name: &str) -> RepoResult<Option<Artist>>;
    fn find_album_by_title(&self, title: &str) -> RepoResult<Option<Album>>;
    /// First catalog song carrying the title, when any.
    fn find_song_by_title(&self, title: &str) -> RepoResult<Option<Song>>;
    fn find_playlist_by_title(&self, title: &str) -> RepoResult<Option<Playlist>>;

    fn list_users(&self) -> RepoResult<Vec<User>>;
    fn list_artists(&self) -> RepoResult<Vec<Artist>>;
    fn list_albums(&self) -> RepoResult<Vec<Album>>;
    fn list_songs(&self) -> RepoResult<Vec<Song>>;
    fn list_playlists(&self) -> RepoResult<Vec<Playlist>>;

    /// Albums owned by the artist, in registration order.
    fn artist_albums(&self, artist: ArtistId) -> RepoResult<Vec<Album>>;
    /// Songs contained in the album, in registration order.
    fn album_songs(&self, album: AlbumId) -> RepoResult<Vec<Song>>;
    /// Member songs snapshotted at playlist creation time.
    fn playlist_songs(&self, playlist: PlaylistId) -> RepoResult<Vec<Song>>;
    /// Listeners of the playlist; the creator is always first.
    fn playlist_listeners(&self, playlist: PlaylistId) -> RepoResult<Vec<User>>;
    /// Playlists the user follows, including those the user created.
    fn user_playlists(&self, user: UserId) -> RepoResult<Vec<Playlist>>;
    /// Playlists the user created, in creation order.
    fn created_playlists(&self, user: UserId) -> RepoResult<Vec<Playlist>>;
    /// Users that liked the song, in like order.
    fn song_likers(&self, song: SongId) -> RepoResult<Vec<User>>;
}

/// Insertion-ordered entity storage.
///
/// Iteration order is registration order; popularity scans and listings
/// depend on it.
struct Table<T> {
    rows: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn insert(&mut self, id: Uuid, row: T) {
        self.order.push(id);
        self.rows.insert(id, row);
    }

    /// Panics when `id` was never registered. Ids handed out by this
    /// repository are always registered before they escape.
    fn row(&self, id: &Uuid) -> &T {
        self.rows.get(id).expect("row registered for issued id")
    }

    fn row_mut(&mut self, id: &Uuid) -> &mut T {
        self.rows.get_mut(id).expect("row registered for issued id")
    }

    fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().map(|id| &self.rows[id])
    }
}

/// All repository state, guarded by one lock in the owning repository.
#[derive(Default)]
struct CatalogState {
    users: Table<User>,
    artists: Table<Artist>,
    albums: Table<Album>,
    songs: Table<Song>,
    playlists: Table<Playlist>,

    // Natural-key lookup indexes. Unique-key maps keep the first
    // registration; the song map keeps every match in catalog order.
    user_by_mobile: HashMap<String, UserId>,
    artist_by_name: HashMap<String, ArtistId>,
    album_by_title: HashMap<String, AlbumId>,
    songs_by_title: HashMap<String, Vec<SongId>>,
    playlist_by_title: HashMap<String, PlaylistId>,

    // Relationship indexes keyed by entity identity.
    artist_albums: HashMap<ArtistId, Vec<AlbumId>>,
    album_songs: HashMap<AlbumId, Vec<SongId>>,
    playlist_songs: HashMap<PlaylistId, Vec<SongId>>,
    playlist_listeners: HashMap<PlaylistId, Vec<UserId>>,
    created_playlists: HashMap<UserId, Vec<PlaylistId>>,
    user_playlists: HashMap<UserId, Vec<PlaylistId>>,
    song_likers: HashMap<SongId, Vec<UserId>>,
}

impl CatalogState {
    fn resolve_user(&self, mobile: &str) -> RepoResult<UserId> {
        self.user_by_mobile
            .get(&normalize_mobile(mobile))
            .copied()
            .ok_or(RepoError::NotFound(EntityKind::User))
    }

    fn insert_artist(&mut self, name: &str) -> Artist {
        let artist = Artist::new(name);
        self.artist_by_name
            .entry(name.to_string())
            .or_insert(artist.uuid);
        self.artist_albums.insert(artist.uuid, Vec::new());
        self.artists.insert(artist.uuid, artist.clone());
        artist
    }

    fn insert_playlist(&mut self, title: &str, creator: UserId, members: Vec<SongId>) -> Playlist {
        let playlist = Playlist::new(title, creator);
        self.playlist_by_title
            .entry(title.to_string())
            .or_insert(playlist.uuid);
        self.playlist_songs.insert(playlist.uuid, members);
        // The creator is always listener[0].
        self.playlist_listeners.insert(playlist.uuid, vec![creator]);
        self.created_playlists
            .get_mut(&creator)
            .expect("created-playlists slot registered at user creation")
            .push(playlist.uuid);
        self.user_playlists
            .get_mut(&creator)
            .expect("followed-playlists slot registered at user creation")
            .push(playlist.uuid);
        self.playlists.insert(playlist.uuid, playlist.clone());
        playlist
    }
}

/// In-memory repository with shared ownership.
///
/// Cloning is cheap and shares one underlying state; all mutating
/// operations serialize on the internal write lock, read-only queries take
/// the read lock.
#[derive(Clone)]
pub struct MemoryCatalogRepository {
    state: Arc<RwLock<CatalogState>>,
}

impl MemoryCatalogRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(CatalogState::default())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().expect("catalog state lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().expect("catalog state lock poisoned")
    }
}

impl Default for MemoryCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for MemoryCatalogRepository {
    fn create_user(&self, name: &str, mobile: &str) -> RepoResult<User> {
        let mut state = self.write();
        let user = User::new(name, mobile);
        state
            .user_by_mobile
            .entry(user.mobile.clone())
            .or_insert(user.uuid);
        state.created_playlists.insert(user.uuid, Vec::new());
        state.user_playlists.insert(user.uuid, Vec::new());
        state.users.insert(user.uuid, user.clone());
        Ok(user)
    }

    fn create_artist(&self, name: &str) -> RepoResult<Artist> {
        Ok(self.write().insert_artist(name))
    }

    fn create_album(&self, title: &str, artist_name: &str) -> RepoResult<Album> {
        let mut state = self.write();
        let artist_id = match state.artist_by_name.get(artist_name).copied() {
            Some(id) => id,
            // Documented fallback path: album creation registers a
            // missing artist instead of failing.
            None => state.insert_artist(artist_name).uuid,
        };
        let album = Album::new(title, artist_id);
        state
            .album_by_title
            .entry(title.to_string())
            .or_insert(album.uuid);
        state.album_songs.insert(album.uuid, Vec::new());
        state
            .artist_albums
            .get_mut(&artist_id)
            .expect("album index registered at artist creation")
            .push(album.uuid);
        state.albums.insert(album.uuid, album.clone());
        Ok(album)
    }

    fn create_song(
        &self,
        title: &str,
        album_title: &str,
        duration_secs: u32,
    ) -> RepoResult<Song> {
        let mut state = self.write();
        let album_id = state
            .album_by_title
            .get(album_title)
            .copied()
            .ok_or(RepoError::NotFound(EntityKind::Album))?;
        let song = Song::new(title, album_id, duration_secs);
        state
            .songs_by_title
            .entry(title.to_string())
            .or_default()
            .push(song.uuid);
        state.song_likers.insert(song.uuid, Vec::new());
        state
            .album_songs
            .get_mut(&album_id)
            .expect("song index registered at album creation")
            .push(song.uuid);
        state.songs.insert(song.uuid, song.clone());
        Ok(song)
    }

    fn create_playlist_by_duration(
        &self,
        mobile: &str,
        title: &str,
        duration_secs: u32,
    ) -> RepoResult<Playlist> {
        let mut state = self.write();
        let creator = state.resolve_user(mobile)?;
        let members: Vec<SongId> = state
            .songs
            .iter()
            .filter(|song| song.duration_secs == duration_secs)
            .map(|song| song.uuid)
            .collect();
        Ok(state.insert_playlist(title, creator, members))
    }

    fn create_playlist_by_titles(
        &self,
        mobile: &str,
        title: &str,
        song_titles: &[String],
    ) -> RepoResult<Playlist> {
        let mut state = self.write();
        let creator = state.resolve_user(mobile)?;
        let mut members: Vec<SongId> = Vec::new();
        for requested in song_titles {
            let Some(ids) = state.songs_by_title.get(requested) else {
                continue;
            };
            for id in ids {
                // Repeated requested titles must not duplicate members.
                if !members.contains(id) {
                    members.push(*id);
                }
            }
        }
        Ok(state.insert_playlist(title, creator, members))
    }

    fn join_playlist(&self, mobile: &str, playlist_title: &str) -> RepoResult<Playlist> {
        let mut state = self.write();
        let user = state.resolve_user(mobile)?;
        let playlist_id = state
            .playlist_by_title
            .get(playlist_title)
            .copied()
            .ok_or(RepoError::NotFound(EntityKind::Playlist))?;

        let is_creator = state
            .created_playlists
            .get(&user)
            .is_some_and(|created| created.contains(&playlist_id));
        let is_listener = state
            .playlist_listeners
            .get(&playlist_id)
            .expect("listener index registered at playlist creation")
            .contains(&user);

        if !is_creator && !is_listener {
            state
                .playlist_listeners
                .get_mut(&playlist_id)
                .expect("listener index registered at playlist creation")
                .push(user);
            state
                .user_playlists
                .get_mut(&user)
                .expect("followed-playlists slot registered at user creation")
                .push(playlist_id);
        }

        Ok(state.playlists.row(&playlist_id).clone())
    }

    fn like_song(&self, mobile: &str, song_title: &str) -> RepoResult<Song> {
        let mut state = self.write();
        let user = state.resolve_user(mobile)?;
        let song_id = state
            .songs_by_title
            .get(song_title)
            .and_then(|ids| ids.first())
            .copied()
            .ok_or(RepoError::NotFound(EntityKind::Song))?;

        let already_liked = state
            .song_likers
            .get(&song_id)
            .expect("liker index registered at song creation")
            .contains(&user);
        if already_liked {
            return Ok(state.songs.row(&song_id).clone());
        }

        let album_id = state.songs.row(&song_id).album;
        let artist_id = state.albums.row(&album_id).artist;

        state
            .song_likers
            .get_mut(&song_id)
            .expect("liker index registered at song creation")
            .push(user);
        state.songs.row_mut(&song_id).likes += 1;
        // Artist likes count like events, not distinct users.
        state.artists.row_mut(&artist_id).likes += 1;

        Ok(state.songs.row(&song_id).clone())
    }

    fn most_liked_artist(&self) -> RepoResult<Option<String>> {
        let state = self.read();
        let mut best: Option<&Artist> = None;
        for artist in state.artists.iter() {
            // `>=` keeps the later registration on ties.
            if best.map_or(true, |current| artist.likes >= current.likes) {
                best = Some(artist);
            }
        }
        Ok(best.map(|artist| artist.name.clone()))
    }

    fn most_liked_song(&self) -> RepoResult<Option<String>> {
        let state = self.read();
        let mut best: Option<&Song> = None;
        for song in state.songs.iter() {
            if best.map_or(true, |current| song.likes >= current.likes) {
                best = Some(song);
            }
        }
        Ok(best.map(|song| song.title.clone()))
    }

    fn find_user_by_mobile(&self, mobile: &str) -> RepoResult<Option<User>> {
        let state = self.read();
        Ok(state
            .user_by_mobile
            .get(&normalize_mobile(mobile))
            .map(|id| state.users.row(id).clone()))
    }

    fn find_artist_by_name(&self, name: &str) -> RepoResult<Option<Artist>> {
        let state = self.read();
        Ok(state
            .artist_by_name
            .get(name)
            .map(|id| state.artists.row(id).clone()))
    }

    fn find_album_by_title(&self, title: &str) -> RepoResult<Option<Album>> {
        let state = self.read();
        Ok(state
            .album_by_title
            .get(title)
            .map(|id| state.albums.row(id).clone()))
    }

    fn find_song_by_title(&self, title: &str) -> RepoResult<Option<Song>> {
        let state = self.read();
        Ok(state
            .songs_by_title
            .get(title)
            .and_then(|ids| ids.first())
            .map(|id| state.songs.row(id).clone()))
    }

    fn find_playlist_by_title(&self, title: &str) -> RepoResult<Option<Playlist>> {
        let state = self.read();
        Ok(state
            .playlist_by_title
            .get(title)
            .map(|id| state.playlists.row(id).clone()))
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.read().users.iter().cloned().collect())
    }

    fn list_artists(&self) -> RepoResult<Vec<Artist>> {
        Ok(self.read().artists.iter().cloned().collect())
    }

    fn list_albums(&self) -> RepoResult<Vec<Album>> {
        Ok(self.read().albums.iter().cloned().collect())
    }

    fn list_songs(&self) -> RepoResult<Vec<Song>> {
        Ok(self.read().songs.iter().cloned().collect())
    }

    fn list_playlists(&self) -> RepoResult<Vec<Playlist>> {
        Ok(self.read().playlists.iter().cloned().collect())
    }

    fn artist_albums(&self, artist: ArtistId) -> RepoResult<Vec<Album>> {
        let state = self.read();
        let ids = state
            .artist_albums
            .get(&artist)
            .ok_or(RepoError::NotFound(EntityKind::Artist))?;
        Ok(ids.iter().map(|id| state.albums.row(id).clone()).collect())
    }

    fn album_songs(&self, album: AlbumId) -> RepoResult<Vec<Song>> {
        let state = self.read();
        let ids = state
            .album_songs
            .get(&album)
            .ok_or(RepoError::NotFound(EntityKind::Album))?;
        Ok(ids.iter().map(|id| state.songs.row(id).clone()).collect())
    }

    fn playlist_songs(&self, playlist: PlaylistId) -> RepoResult<Vec<Song>> {
        let state = self.read();
        let ids = state
            .playlist_songs
            .get(&playlist)
            .ok_or(RepoError::NotFound(EntityKind::Playlist))?;
        Ok(ids.iter().map(|id| state.songs.row(id).clone()).collect())
    }

    fn playlist_listeners(&self, playlist: PlaylistId) -> RepoResult<Vec<User>> {
        let state = self.read();
        let ids = state
            .playlist_listeners
            .get(&playlist)
            .ok_or(RepoError::NotFound(EntityKind::Playlist))?;
        Ok(ids.iter().map(|id| state.users.row(id).clone()).collect())
    }

    fn user_playlists(&self, user: UserId) -> RepoResult<Vec<Playlist>> {
        let state = self.read();
        let ids = state
            .user_playlists
            .get(&user)
            .ok_or(RepoError::NotFound(EntityKind::User))?;
        Ok(ids
            .iter()
            .map(|id| state.playlists.row(id).clone())
            .collect())
    }

    fn created_playlists(&self, user: UserId) -> RepoResult<Vec<Playlist>> {
        let state = self.read();
        let ids = state
            .created_playlists
            .get(&user)
            .ok_or(RepoError::NotFound(EntityKind::User))?;
        Ok(ids
            .iter()
            .map(|id| state.playlists.row(id).clone())
            .collect())
    }

    fn song_likers(&self, song: SongId) -> RepoResult<Vec<User>> {
        let state = self.read();
        let ids = state
            .song_likers
            .get(&song)
            .ok_or(RepoError::NotFound(EntityKind::Song))?;
        Ok(ids.iter().map(|id| state.users.row(id).clone()).collect())
    }
}
