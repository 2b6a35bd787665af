use tunegraph_core::{Album, Artist, Playlist, Song, User};
use uuid::Uuid;

#[test]
fn artist_new_sets_defaults() {
    let artist = Artist::new("Nina Simone");

    assert!(!artist.uuid.is_nil());
    assert_eq!(artist.name, "Nina Simone");
    assert_eq!(artist.likes, 0);
}

#[test]
fn song_new_sets_defaults_under_album() {
    let album = Album::new("Pastel Blues", Uuid::new_v4());
    let song = Song::new("Sinnerman", album.uuid, 621);

    assert!(!song.uuid.is_nil());
    assert_eq!(song.album, album.uuid);
    assert_eq!(song.duration_secs, 621);
    assert_eq!(song.likes, 0);
}

#[test]
fn user_new_normalizes_mobile() {
    let user = User::new("Alice", " 98-76 543(210) ");
    assert_eq!(user.mobile, "9876543210");
}

#[test]
fn song_serialization_uses_expected_wire_fields() {
    let album_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let song_id = Uuid::parse_str("66666666-7777-4888-8999-000000000000").unwrap();
    let song = Song::with_id(song_id, "Feeling Good", album_id, 178);

    let json = serde_json::to_value(&song).unwrap();
    assert_eq!(json["uuid"], song_id.to_string());
    assert_eq!(json["title"], "Feeling Good");
    assert_eq!(json["album"], album_id.to_string());
    assert_eq!(json["duration_secs"], 178);
    assert_eq!(json["likes"], 0);

    let decoded: Song = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, song);
}

#[test]
fn playlist_serialization_names_its_creator() {
    let creator = Uuid::parse_str("aaaaaaaa-bbbb-4ccc-8ddd-eeeeeeeeeeee").unwrap();
    let playlist = Playlist::with_id(
        Uuid::parse_str("12121212-3434-4565-8787-909090909090").unwrap(),
        "late night",
        creator,
    );

    let json = serde_json::to_value(&playlist).unwrap();
    assert_eq!(json["title"], "late night");
    assert_eq!(json["creator"], creator.to_string());

    let decoded: Playlist = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, playlist);
}
