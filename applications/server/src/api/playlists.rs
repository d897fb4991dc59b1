/// Playlists API routes
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use cliphub_core::types::{Playlist, PlaylistDetailView, PlaylistListView, UpdatePlaylist};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
}

/// POST /api/playlists
/// Create a new playlist owned by the authenticated user
pub async fn create_playlist(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<Json<Playlist>> {
    let playlist = state
        .service
        .create(&req.name, &req.description, auth.user_id())
        .await?;
    Ok(Json(playlist))
}

/// GET /api/playlists/user/:user_id
/// Get the composed list views of a user's playlists
pub async fn get_user_playlists(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<Vec<PlaylistListView>>> {
    let views = state.service.list_by_owner(&user_id).await?;
    Ok(Json(views))
}

/// GET /api/playlists/:id
/// Get a playlist's composed detail view
pub async fn get_playlist(
    Path(id): Path<String>,
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<PlaylistDetailView>> {
    let view = state.service.get_by_id(&id).await?;
    Ok(Json(view))
}

/// PATCH /api/playlists/:id
/// Rename a playlist or change its description
pub async fn update_playlist(
    Path(id): Path<String>,
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Json(fields): Json<UpdatePlaylist>,
) -> Result<Json<Playlist>> {
    let playlist = state.service.update(&id, fields, auth.user_id()).await?;
    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id
/// Delete a playlist
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    state.service.delete(&id, auth.user_id()).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// POST /api/playlists/:id/videos/:video_id
/// Add a video to a playlist
pub async fn add_video_to_playlist(
    Path((id, video_id)): Path<(String, String)>,
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Playlist>> {
    let playlist = state
        .service
        .add_video(&id, &video_id, auth.user_id())
        .await?;
    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id/videos/:video_id
/// Remove a video from a playlist
pub async fn remove_video_from_playlist(
    Path((id, video_id)): Path<(String, String)>,
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Playlist>> {
    let playlist = state
        .service
        .remove_video(&id, &video_id, auth.user_id())
        .await?;
    Ok(Json(playlist))
}
