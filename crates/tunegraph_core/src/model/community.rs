//! Community domain model: users and playlists.
//!
//! # Responsibility
//! - Define listener-side entity records.
//! - Normalize mobile numbers, the natural lookup key for users.
//!
//! # Invariants
//! - `User::mobile` is always stored in normalized form.
//! - A playlist names its creator; the creator is also always the first
//!   listener in the playlist's listener index.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static MOBILE_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-().]+").expect("valid mobile separator regex"));

/// Stable identifier for a user.
pub type UserId = Uuid;
/// Stable identifier for a playlist.
pub type PlaylistId = Uuid;

/// A listener account identified externally by mobile number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable global ID used by relationship indexes.
    pub uuid: UserId,
    /// Display name. Not a lookup key.
    pub name: String,
    /// Normalized mobile number, the external lookup key. Uniqueness is
    /// not enforced; lookups resolve the first registration.
    pub mobile: String,
}

impl User {
    /// Creates a user with a generated stable ID and normalized mobile.
    pub fn new(name: impl Into<String>, mobile: &str) -> Self {
        Self::with_id(Uuid::new_v4(), name, mobile)
    }

    /// Creates a user with a caller-provided stable ID.
    pub fn with_id(uuid: UserId, name: impl Into<String>, mobile: &str) -> Self {
        Self {
            uuid,
            name: name.into(),
            mobile: normalize_mobile(mobile),
        }
    }
}

/// A playlist created by one user and followed by one or more listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Stable global ID used by relationship indexes.
    pub uuid: PlaylistId,
    /// Display title. Not unique; title lookups resolve the first
    /// registration.
    pub title: String,
    /// Creating user. Always listed first in the listener index.
    pub creator: UserId,
}

impl Playlist {
    /// Creates a playlist with a generated stable ID for `creator`.
    pub fn new(title: impl Into<String>, creator: UserId) -> Self {
        Self::with_id(Uuid::new_v4(), title, creator)
    }

    /// Creates a playlist with a caller-provided stable ID.
    pub fn with_id(uuid: PlaylistId, title: impl Into<String>, creator: UserId) -> Self {
        Self {
            uuid,
            title: title.into(),
            creator,
        }
    }
}

/// Normalizes a mobile number for storage and lookup.
///
/// Strips whitespace and common separator punctuation so the same number
/// written in different formatting resolves to the same key. Digits and a
/// leading `+` pass through unchanged; already-normalized input is
/// returned as-is.
pub fn normalize_mobile(raw: &str) -> String {
    MOBILE_SEPARATOR_RE.replace_all(raw.trim(), "").into_owned()
}
