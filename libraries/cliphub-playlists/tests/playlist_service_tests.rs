/// Playlist service integration tests against the in-memory store
use chrono::Utc;
use cliphub_core::{
    collections, to_document, HubError, UpdatePlaylist, User, UserId, Video, VideoId,
};
use cliphub_playlists::PlaylistService;
use cliphub_store::MemoryStore;
use std::sync::Arc;

fn setup() -> (Arc<MemoryStore>, PlaylistService<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let service = PlaylistService::new(Arc::clone(&store));
    (store, service)
}

async fn seed_user(store: &MemoryStore, username: &str) -> UserId {
    use cliphub_core::EntityStore;

    let user = User {
        id: UserId::generate(),
        username: username.to_string(),
        full_name: format!("{username} Example"),
        avatar: Some(format!("https://cdn.cliphub.io/avatars/{username}.png")),
    };
    store
        .insert(collections::USERS, to_document(&user).unwrap())
        .await
        .unwrap();
    user.id
}

async fn seed_video(store: &MemoryStore, owner: &UserId, title: &str) -> VideoId {
    use cliphub_core::EntityStore;

    let video = Video {
        id: VideoId::generate(),
        owner: owner.clone(),
        title: title.to_string(),
        thumbnail: format!("https://cdn.cliphub.io/thumbs/{title}.jpg"),
        description: "uploaded clip".to_string(),
        duration: 42.5,
        views: 7,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    store
        .insert(collections::VIDEOS, to_document(&video).unwrap())
        .await
        .unwrap();
    video.id
}

#[tokio::test]
async fn create_then_detail_view_round_trip() {
    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;

    let playlist = service.create("Favorites", "my favs", &owner).await.unwrap();
    assert_eq!(playlist.name, "Favorites");
    assert_eq!(playlist.description, "my favs");
    assert_eq!(playlist.owner, owner);
    assert!(playlist.videos.is_empty());

    let view = service.get_by_id(playlist.id.as_str()).await.unwrap();
    assert_eq!(view.id, playlist.id);
    assert_eq!(view.name, "Favorites");
    assert_eq!(view.description, "my favs");
    assert!(view.videos.is_empty());
    assert_eq!(view.created_by.unwrap().username, "alice");
}

#[tokio::test]
async fn create_rejects_empty_fields() {
    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;

    let err = service.create("", "desc", &owner).await.unwrap_err();
    assert!(matches!(err, HubError::InvalidArgument(_)));

    let err = service.create("Favorites", "   ", &owner).await.unwrap_err();
    assert!(matches!(err, HubError::InvalidArgument(_)));
}

#[tokio::test]
async fn duplicate_name_is_per_owner() {
    let (store, service) = setup();
    let alice = seed_user(&store, "alice").await;
    let bob = seed_user(&store, "bob").await;

    service.create("Favorites", "my favs", &alice).await.unwrap();

    let err = service
        .create("Favorites", "another", &alice)
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::Conflict(_)));

    // Same name under a different owner is fine.
    service.create("Favorites", "bob's favs", &bob).await.unwrap();
}

#[tokio::test]
async fn add_video_requires_ownership() {
    let (store, service) = setup();
    let alice = seed_user(&store, "alice").await;
    let bob = seed_user(&store, "bob").await;
    let video = seed_video(&store, &alice, "sunset").await;

    let playlist = service.create("Favorites", "my favs", &alice).await.unwrap();

    let err = service
        .add_video(playlist.id.as_str(), video.as_str(), &bob)
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::Forbidden(_)));
}

#[tokio::test]
async fn readding_a_member_video_conflicts() {
    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;
    let video = seed_video(&store, &owner, "sunset").await;
    let playlist = service.create("Favorites", "my favs", &owner).await.unwrap();

    let updated = service
        .add_video(playlist.id.as_str(), video.as_str(), &owner)
        .await
        .unwrap();
    assert_eq!(updated.videos, vec![video.clone()]);

    let err = service
        .add_video(playlist.id.as_str(), video.as_str(), &owner)
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::Conflict(_)));

    // The membership still holds exactly one entry.
    let view = service.get_by_id(playlist.id.as_str()).await.unwrap();
    assert_eq!(view.videos.len(), 1);
    assert_eq!(view.videos[0].id, video);
}

#[tokio::test]
async fn detail_view_embeds_video_owner_summary() {
    let (store, service) = setup();
    let alice = seed_user(&store, "alice").await;
    let bob = seed_user(&store, "bob").await;
    let video = seed_video(&store, &bob, "drone-footage").await;

    let playlist = service.create("Watch later", "queue", &alice).await.unwrap();
    service
        .add_video(playlist.id.as_str(), video.as_str(), &alice)
        .await
        .unwrap();

    let view = service.get_by_id(playlist.id.as_str()).await.unwrap();
    assert_eq!(view.created_by.as_ref().unwrap().username, "alice");

    let item = &view.videos[0];
    assert_eq!(item.title, "drone-footage");
    assert_eq!(item.views, 7);
    assert_eq!(item.owner.as_ref().unwrap().username, "bob");
}

#[tokio::test]
async fn removing_a_non_member_video_is_not_found() {
    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;
    let video = seed_video(&store, &owner, "sunset").await;
    let playlist = service.create("Favorites", "my favs", &owner).await.unwrap();

    let err = service
        .remove_video(playlist.id.as_str(), video.as_str(), &owner)
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::NotFound(_)));
}

#[tokio::test]
async fn removal_preserves_relative_order() {
    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;
    let v1 = seed_video(&store, &owner, "one").await;
    let v2 = seed_video(&store, &owner, "two").await;
    let v3 = seed_video(&store, &owner, "three").await;

    let playlist = service.create("Favorites", "my favs", &owner).await.unwrap();
    for video in [&v1, &v2, &v3] {
        service
            .add_video(playlist.id.as_str(), video.as_str(), &owner)
            .await
            .unwrap();
    }

    let updated = service
        .remove_video(playlist.id.as_str(), v2.as_str(), &owner)
        .await
        .unwrap();
    assert_eq!(updated.videos, vec![v1, v3]);
}

#[tokio::test]
async fn list_by_owner_without_playlists_is_not_found() {
    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;

    let err = service.list_by_owner(owner.as_str()).await.unwrap_err();
    assert!(matches!(err, HubError::NotFound(_)));
}

#[tokio::test]
async fn list_by_owner_composes_every_playlist() {
    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;
    let video = seed_video(&store, &owner, "sunset").await;

    let first = service.create("Favorites", "my favs", &owner).await.unwrap();
    service.create("Watch later", "queue", &owner).await.unwrap();
    service.create("Tutorials", "learning", &owner).await.unwrap();

    service
        .add_video(first.id.as_str(), video.as_str(), &owner)
        .await
        .unwrap();

    let views = service.list_by_owner(owner.as_str()).await.unwrap();
    assert_eq!(views.len(), 3);
    for view in &views {
        assert_eq!(view.created_by.as_ref().unwrap().username, "alice");
    }

    let favorites = views.iter().find(|v| v.name == "Favorites").unwrap();
    assert_eq!(favorites.videos.len(), 1);
    assert_eq!(favorites.videos[0].title, "sunset");
    assert_eq!(favorites.videos[0].owner.as_ref().unwrap().username, "alice");
}

#[tokio::test]
async fn malformed_ids_short_circuit() {
    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;

    let err = service.list_by_owner("not-an-id").await.unwrap_err();
    assert!(matches!(err, HubError::InvalidArgument(_)));

    let err = service.get_by_id("123").await.unwrap_err();
    assert!(matches!(err, HubError::InvalidArgument(_)));

    let err = service
        .add_video("not-an-id", VideoId::generate().as_str(), &owner)
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::InvalidArgument(_)));

    let err = service
        .remove_video("507f1f77bcf86cd799439011", "xyz", &owner)
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::InvalidArgument(_)));

    let err = service.delete("short", &owner).await.unwrap_err();
    assert!(matches!(err, HubError::InvalidArgument(_)));
}

#[tokio::test]
async fn membership_on_missing_playlist_is_not_found() {
    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;
    let video = seed_video(&store, &owner, "sunset").await;

    let err = service
        .add_video(
            cliphub_core::PlaylistId::generate().as_str(),
            video.as_str(),
            &owner,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::NotFound(_)));
}

#[tokio::test]
async fn update_renames_and_rechecks_uniqueness() {
    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;
    let other = seed_user(&store, "bob").await;

    let playlist = service.create("Favorites", "my favs", &owner).await.unwrap();
    service.create("Watch later", "queue", &owner).await.unwrap();

    // Renaming onto another of the owner's playlists conflicts.
    let err = service
        .update(
            playlist.id.as_str(),
            UpdatePlaylist {
                name: Some("Watch later".to_string()),
                description: None,
            },
            &owner,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::Conflict(_)));

    // An empty patch is rejected.
    let err = service
        .update(playlist.id.as_str(), UpdatePlaylist::default(), &owner)
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::InvalidArgument(_)));

    // Non-owners may not update.
    let err = service
        .update(
            playlist.id.as_str(),
            UpdatePlaylist {
                name: Some("Stolen".to_string()),
                description: None,
            },
            &other,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::Forbidden(_)));

    let updated = service
        .update(
            playlist.id.as_str(),
            UpdatePlaylist {
                name: Some("Best of".to_string()),
                description: Some("curated".to_string()),
            },
            &owner,
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Best of");
    assert_eq!(updated.description, "curated");
    assert_eq!(updated.owner, owner);
    assert!(updated.updated_at >= updated.created_at);
}

#[tokio::test]
async fn delete_is_owner_restricted_and_keeps_borrowed_videos() {
    use cliphub_core::EntityStore;

    let (store, service) = setup();
    let owner = seed_user(&store, "alice").await;
    let other = seed_user(&store, "bob").await;
    let video = seed_video(&store, &owner, "sunset").await;

    let playlist = service.create("Favorites", "my favs", &owner).await.unwrap();
    service
        .add_video(playlist.id.as_str(), video.as_str(), &owner)
        .await
        .unwrap();

    let err = service.delete(playlist.id.as_str(), &other).await.unwrap_err();
    assert!(matches!(err, HubError::Forbidden(_)));

    service.delete(playlist.id.as_str(), &owner).await.unwrap();

    let err = service.get_by_id(playlist.id.as_str()).await.unwrap_err();
    assert!(matches!(err, HubError::NotFound(_)));

    // Deleting a playlist never deletes the referenced videos.
    let still_there = store
        .find_by_id(collections::VIDEOS, video.as_str())
        .await
        .unwrap();
    assert!(still_there.is_some());
}

/// The end-to-end scenario from the service contract: create, add,
/// duplicate add, read back, remove, remove again.
#[tokio::test]
async fn favorites_scenario() {
    let (store, service) = setup();
    let user = seed_user(&store, "alice").await;
    let video = seed_video(&store, &user, "sunset").await;

    let playlist = service.create("Favorites", "my favs", &user).await.unwrap();

    service
        .add_video(playlist.id.as_str(), video.as_str(), &user)
        .await
        .unwrap();
    let err = service
        .add_video(playlist.id.as_str(), video.as_str(), &user)
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::Conflict(_)));

    let view = service.get_by_id(playlist.id.as_str()).await.unwrap();
    assert_eq!(view.videos.len(), 1);
    assert_eq!(view.videos[0].id, video);
    assert_eq!(view.created_by.unwrap().username, "alice");

    service
        .remove_video(playlist.id.as_str(), video.as_str(), &user)
        .await
        .unwrap();
    let err = service
        .remove_video(playlist.id.as_str(), video.as_str(), &user)
        .await
        .unwrap_err();
    assert!(matches!(err, HubError::NotFound(_)));
}
