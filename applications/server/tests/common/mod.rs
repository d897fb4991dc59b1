/// Common test utilities and fixtures
use chrono::Utc;
use cliphub_core::{collections, to_document, EntityStore, User, UserId, Video, VideoId};
use cliphub_server::{api, services::auth::Claims, services::TokenVerifier, state::AppState};
use cliphub_store::MemoryStore;
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;

/// Shared secret the test tokens are signed with
pub const TEST_SECRET: &str = "test-secret-key";

/// Build the full application router over a fresh in-memory store
pub fn create_test_app() -> (axum::Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let verifier = Arc::new(TokenVerifier::new(TEST_SECRET.to_string()));
    let state = AppState::new(Arc::clone(&store));
    (api::router(state, verifier), store)
}

/// Mint an access token the way the platform's auth service would
pub fn access_token_for(user_id: &UserId) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.as_str().to_string(),
        exp: now + 3600,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Seed a user into the borrowed users collection
pub async fn seed_user(store: &MemoryStore, username: &str) -> UserId {
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

/// Seed a video into the borrowed videos collection
pub async fn seed_video(store: &MemoryStore, owner: &UserId, title: &str) -> VideoId {
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
