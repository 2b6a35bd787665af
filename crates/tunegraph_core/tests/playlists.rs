use tunegraph_core::{
    CatalogRepository, CommunityService, EntityKind, MemoryCatalogRepository, PlaylistId,
    RepoError, SongId,
};

fn seeded_repo() -> MemoryCatalogRepository {
    let repo = MemoryCatalogRepository::new();
    repo.create_album("Views", "Drake").unwrap();
    repo.create_album("Anti", "Rihanna").unwrap();
    repo.create_user("Alice", "111").unwrap();
    repo.create_user("Bob", "222").unwrap();
    repo
}

fn member_ids(repo: &MemoryCatalogRepository, playlist: PlaylistId) -> Vec<SongId> {
    repo.playlist_songs(playlist)
        .unwrap()
        .into_iter()
        .map(|song| song.uuid)
        .collect()
}

#[test]
fn by_duration_snapshots_equal_duration_songs_at_call_time() {
    let repo = seeded_repo();
    let a = repo.create_song("One Dance", "Views", 180).unwrap();
    repo.create_song("Hotline Bling", "Views", 267).unwrap();
    let b = repo.create_song("Work", "Anti", 180).unwrap();

    let playlist = repo
        .create_playlist_by_duration("111", "three minutes", 180)
        .unwrap();

    assert_eq!(member_ids(&repo, playlist.uuid), vec![a.uuid, b.uuid]);

    // Songs added later do not join the snapshot.
    repo.create_song("Too Good", "Views", 180).unwrap();
    assert_eq!(member_ids(&repo, playlist.uuid), vec![a.uuid, b.uuid]);
}

#[test]
fn by_duration_requires_existing_user() {
    let repo = seeded_repo();

    let err = repo
        .create_playlist_by_duration("999", "nobody", 180)
        .unwrap_err();

    assert_eq!(err, RepoError::NotFound(EntityKind::User));
    assert!(repo.list_playlists().unwrap().is_empty());
}

#[test]
fn by_titles_keeps_requested_title_order_then_catalog_order() {
    let repo = seeded_repo();
    let intro_views = repo.create_song("Intro", "Views", 90).unwrap();
    let work = repo.create_song("Work", "Anti", 219).unwrap();
    let intro_anti = repo.create_song("Intro", "Anti", 75).unwrap();

    let playlist = repo
        .create_playlist_by_titles(
            "111",
            "mixed",
            &["Work".to_string(), "Intro".to_string()],
        )
        .unwrap();

    assert_eq!(
        member_ids(&repo, playlist.uuid),
        vec![work.uuid, intro_views.uuid, intro_anti.uuid]
    );
}

#[test]
fn by_titles_allows_zero_and_multiple_matches() {
    let repo = seeded_repo();
    let work = repo.create_song("Work", "Anti", 219).unwrap();

    let playlist = repo
        .create_playlist_by_titles(
            "111",
            "sparse",
            &["No Such Song".to_string(), "Work".to_string()],
        )
        .unwrap();

    assert_eq!(member_ids(&repo, playlist.uuid), vec![work.uuid]);

    let empty = repo
        .create_playlist_by_titles("111", "empty", &["Still Missing".to_string()])
        .unwrap();
    assert!(member_ids(&repo, empty.uuid).is_empty());
}

#[test]
fn by_titles_skips_repeated_requested_titles() {
    let repo = seeded_repo();
    let work = repo.create_song("Work", "Anti", 219).unwrap();

    let playlist = repo
        .create_playlist_by_titles("111", "twice", &["Work".to_string(), "Work".to_string()])
        .unwrap();

    assert_eq!(member_ids(&repo, playlist.uuid), vec![work.uuid]);
}

#[test]
fn creator_is_sole_initial_listener_and_follows_playlist() {
    let repo = seeded_repo();
    let alice = repo.find_user_by_mobile("111").unwrap().unwrap();

    let playlist = repo
        .create_playlist_by_duration("111", "mine", 180)
        .unwrap();

    assert_eq!(playlist.creator, alice.uuid);
    let listeners = repo.playlist_listeners(playlist.uuid).unwrap();
    assert_eq!(listeners.len(), 1);
    assert_eq!(listeners[0].uuid, alice.uuid);

    let followed = repo.user_playlists(alice.uuid).unwrap();
    assert_eq!(followed.len(), 1);
    assert_eq!(followed[0].uuid, playlist.uuid);
    let created = repo.created_playlists(alice.uuid).unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].uuid, playlist.uuid);
}

#[test]
fn multiple_created_playlists_are_all_recorded() {
    let repo = seeded_repo();
    let alice = repo.find_user_by_mobile("111").unwrap().unwrap();

    let first = repo.create_playlist_by_duration("111", "first", 180).unwrap();
    let second = repo
        .create_playlist_by_titles("111", "second", &[])
        .unwrap();

    let created: Vec<_> = repo
        .created_playlists(alice.uuid)
        .unwrap()
        .into_iter()
        .map(|playlist| playlist.uuid)
        .collect();
    assert_eq!(created, vec![first.uuid, second.uuid]);
}

#[test]
fn join_adds_listener_once() {
    let repo = seeded_repo();
    let alice = repo.find_user_by_mobile("111").unwrap().unwrap();
    let bob = repo.find_user_by_mobile("222").unwrap().unwrap();
    let playlist = repo
        .create_playlist_by_duration("111", "shared", 180)
        .unwrap();

    let joined = repo.join_playlist("222", "shared").unwrap();
    assert_eq!(joined.uuid, playlist.uuid);

    let listener_ids: Vec<_> = repo
        .playlist_listeners(playlist.uuid)
        .unwrap()
        .into_iter()
        .map(|user| user.uuid)
        .collect();
    assert_eq!(listener_ids, vec![alice.uuid, bob.uuid]);

    // Joining again, or joining as the creator, changes nothing.
    repo.join_playlist("222", "shared").unwrap();
    repo.join_playlist("111", "shared").unwrap();
    assert_eq!(repo.playlist_listeners(playlist.uuid).unwrap().len(), 2);
    assert_eq!(repo.user_playlists(bob.uuid).unwrap().len(), 1);
    assert_eq!(repo.user_playlists(alice.uuid).unwrap().len(), 1);
}

#[test]
fn join_unknown_user_or_playlist_fails() {
    let repo = seeded_repo();
    repo.create_playlist_by_duration("111", "shared", 180)
        .unwrap();

    let err = repo.join_playlist("999", "shared").unwrap_err();
    assert_eq!(err, RepoError::NotFound(EntityKind::User));

    let err = repo.join_playlist("222", "no such playlist").unwrap_err();
    assert_eq!(err, RepoError::NotFound(EntityKind::Playlist));
}

#[test]
fn duplicate_playlist_titles_resolve_to_first_registration() {
    let repo = seeded_repo();
    let first = repo
        .create_playlist_by_duration("111", "favorites", 180)
        .unwrap();
    let second = repo
        .create_playlist_by_duration("222", "favorites", 180)
        .unwrap();
    assert_ne!(first.uuid, second.uuid);

    let joined = repo.join_playlist("222", "favorites").unwrap();
    assert_eq!(joined.uuid, first.uuid);
    assert_eq!(repo.playlist_listeners(first.uuid).unwrap().len(), 2);
    assert_eq!(repo.playlist_listeners(second.uuid).unwrap().len(), 1);
}

#[test]
fn mobile_lookup_ignores_separator_formatting() {
    let repo = MemoryCatalogRepository::new();
    repo.create_user("Alice", "98 76-54").unwrap();

    let playlist = repo
        .create_playlist_by_duration("987-654", "reachable", 180)
        .unwrap();

    let found = repo.find_user_by_mobile("9876 54").unwrap().unwrap();
    assert_eq!(found.uuid, playlist.creator);
}

#[test]
fn service_wraps_repository_calls() {
    let repo = seeded_repo();
    let service = CommunityService::new(repo.clone());
    repo.create_song("Work", "Anti", 219).unwrap();

    let playlist = service
        .create_playlist_by_titles("111", "via service", &["Work".to_string()])
        .unwrap();
    service.join_playlist("222", "via service").unwrap();

    assert_eq!(service.playlist_songs(playlist.uuid).unwrap().len(), 1);
    assert_eq!(service.playlist_listeners(playlist.uuid).unwrap().len(), 2);
    assert_eq!(repo.playlist_listeners(playlist.uuid).unwrap().len(), 2);
}
