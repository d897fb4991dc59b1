/// Membership mutation rules
///
/// Adding and removing a video are ownership-gated and go through the
/// store's atomic array primitives, so the presence check and the write
/// cannot interleave with a concurrent mutation of the same playlist.
use cliphub_core::{
    collections, from_document, ArrayUpdate, EntityStore, HubError, Playlist, PlaylistId, Result,
    UserId, VideoId,
};
use serde_json::Value;

const VIDEOS_FIELD: &str = "videos";

/// Load a playlist and require the requester to be its owner.
pub(crate) async fn load_owned_playlist<S: EntityStore>(
    store: &S,
    playlist_id: &PlaylistId,
    requester: &UserId,
) -> Result<Playlist> {
    let doc = store
        .find_by_id(collections::PLAYLISTS, playlist_id.as_str())
        .await?
        .ok_or_else(|| HubError::not_found(format!("playlist {playlist_id}")))?;
    let playlist: Playlist = from_document(doc)?;

    if playlist.owner != *requester {
        return Err(HubError::forbidden(
            "only the playlist owner may modify it",
        ));
    }
    Ok(playlist)
}

/// Append a video to a playlist owned by the requester.
///
/// Re-adding a present video is rejected with a conflict rather than
/// silently accepted.
pub async fn add_video<S: EntityStore>(
    store: &S,
    playlist_id: &PlaylistId,
    video_id: &VideoId,
    requester: &UserId,
) -> Result<Playlist> {
    load_owned_playlist(store, playlist_id, requester).await?;

    let outcome = store
        .array_push_if_absent(
            collections::PLAYLISTS,
            playlist_id.as_str(),
            VIDEOS_FIELD,
            Value::String(video_id.as_str().to_string()),
        )
        .await?;

    match outcome {
        ArrayUpdate::Updated(doc) => from_document(*doc),
        ArrayUpdate::Duplicate => Err(HubError::conflict(format!(
            "video {video_id} is already in playlist {playlist_id}"
        ))),
        ArrayUpdate::NotMember | ArrayUpdate::DocumentMissing => {
            Err(HubError::storage("playlist update was not persisted"))
        }
    }
}

/// Remove a video from a playlist owned by the requester.
///
/// The removal is order-preserving for the remaining members.
pub async fn remove_video<S: EntityStore>(
    store: &S,
    playlist_id: &PlaylistId,
    video_id: &VideoId,
    requester: &UserId,
) -> Result<Playlist> {
    load_owned_playlist(store, playlist_id, requester).await?;

    let outcome = store
        .array_pull(
            collections::PLAYLISTS,
            playlist_id.as_str(),
            VIDEOS_FIELD,
            &Value::String(video_id.as_str().to_string()),
        )
        .await?;

    match outcome {
        ArrayUpdate::Updated(doc) => from_document(*doc),
        ArrayUpdate::NotMember => Err(HubError::not_found(format!(
            "video {video_id} is not in playlist {playlist_id}"
        ))),
        ArrayUpdate::Duplicate | ArrayUpdate::DocumentMissing => {
            Err(HubError::storage("playlist update was not persisted"))
        }
    }
}
