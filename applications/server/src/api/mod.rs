/// API route modules
pub mod health;
pub mod playlists;

use crate::{middleware, services::TokenVerifier, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router.
///
/// Playlist routes sit behind the token verification middleware; the
/// health check stays public.
pub fn router(state: AppState, verifier: Arc<TokenVerifier>) -> Router {
    let public_routes = Router::new().route("/health", get(health::health));

    let protected_routes = Router::new()
        .route("/playlists", post(playlists::create_playlist))
        .route("/playlists/user/:user_id", get(playlists::get_user_playlists))
        .route("/playlists/:id", get(playlists::get_playlist))
        .route("/playlists/:id", patch(playlists::update_playlist))
        .route("/playlists/:id", delete(playlists::delete_playlist))
        .route(
            "/playlists/:id/videos/:video_id",
            post(playlists::add_video_to_playlist),
        )
        .route(
            "/playlists/:id/videos/:video_id",
            delete(playlists::remove_video_from_playlist),
        )
        .layer(axum_middleware::from_fn_with_state(
            verifier,
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
