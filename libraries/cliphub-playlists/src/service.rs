/// Playlist service orchestration
///
/// The single component exposed to external collaborators. Raw ids from
/// callers are validated here before anything touches the store, and
/// the requester identity is always an explicit parameter.
use crate::{membership, views};
use cliphub_core::{
    collections, from_document, to_document, Document, EntityStore, Filter, HubError, Playlist,
    PlaylistDetailView, PlaylistId, PlaylistListView, Result, UpdatePlaylist, UserId, VideoId,
};
use serde_json::Value;
use std::sync::Arc;

/// Public operations of the playlist subsystem.
pub struct PlaylistService<S> {
    store: Arc<S>,
}

impl<S> Clone for PlaylistService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: EntityStore> PlaylistService<S> {
    /// Create a service over a shared entity store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a playlist for its owner.
    ///
    /// Name and description are required; the `(name, owner)` pair must
    /// be unique among the owner's playlists.
    pub async fn create(&self, name: &str, description: &str, owner: &UserId) -> Result<Playlist> {
        let name = name.trim();
        let description = description.trim();
        if name.is_empty() || description.is_empty() {
            return Err(HubError::invalid_argument(
                "name and description are required",
            ));
        }

        let duplicate = Filter::new().eq("name", name).eq("owner", owner.as_str());
        if self
            .store
            .find_one(collections::PLAYLISTS, &duplicate)
            .await?
            .is_some()
        {
            return Err(HubError::conflict(format!(
                "a playlist named {name:?} already exists for this user"
            )));
        }

        let playlist = Playlist::new(owner.clone(), name, description);
        let doc = self
            .store
            .insert(collections::PLAYLISTS, to_document(&playlist)?)
            .await?;
        from_document(doc)
    }

    /// List view of every playlist owned by `user_id`.
    pub async fn list_by_owner(&self, user_id: &str) -> Result<Vec<PlaylistListView>> {
        let owner = UserId::parse(user_id)?;
        views::compose_list_view(self.store.as_ref(), &owner).await
    }

    /// Detail view of a single playlist.
    pub async fn get_by_id(&self, playlist_id: &str) -> Result<PlaylistDetailView> {
        let playlist_id = PlaylistId::parse(playlist_id)?;
        views::compose_detail_view(self.store.as_ref(), &playlist_id).await
    }

    /// Add a video to a playlist the requester owns.
    pub async fn add_video(
        &self,
        playlist_id: &str,
        video_id: &str,
        requester: &UserId,
    ) -> Result<Playlist> {
        let playlist_id = PlaylistId::parse(playlist_id)?;
        let video_id = VideoId::parse(video_id)?;
        membership::add_video(self.store.as_ref(), &playlist_id, &video_id, requester).await
    }

    /// Remove a video from a playlist the requester owns.
    pub async fn remove_video(
        &self,
        playlist_id: &str,
        video_id: &str,
        requester: &UserId,
    ) -> Result<Playlist> {
        let playlist_id = PlaylistId::parse(playlist_id)?;
        let video_id = VideoId::parse(video_id)?;
        membership::remove_video(self.store.as_ref(), &playlist_id, &video_id, requester).await
    }

    /// Rename a playlist or change its description.
    ///
    /// A rename keeps the `(name, owner)` uniqueness invariant from
    /// [`Self::create`].
    pub async fn update(
        &self,
        playlist_id: &str,
        fields: UpdatePlaylist,
        requester: &UserId,
    ) -> Result<Playlist> {
        let playlist_id = PlaylistId::parse(playlist_id)?;
        if fields.is_empty() {
            return Err(HubError::invalid_argument("nothing to update"));
        }

        let name = fields.name.as_deref().map(str::trim);
        let description = fields.description.as_deref().map(str::trim);
        if name == Some("") || description == Some("") {
            return Err(HubError::invalid_argument(
                "name and description must not be empty",
            ));
        }

        let playlist =
            membership::load_owned_playlist(self.store.as_ref(), &playlist_id, requester).await?;

        if let Some(new_name) = name {
            if new_name != playlist.name {
                let duplicate = Filter::new()
                    .eq("name", new_name)
                    .eq("owner", requester.as_str());
                if self
                    .store
                    .find_one(collections::PLAYLISTS, &duplicate)
                    .await?
                    .is_some()
                {
                    return Err(HubError::conflict(format!(
                        "a playlist named {new_name:?} already exists for this user"
                    )));
                }
            }
        }

        let mut patch = Document::new();
        if let Some(new_name) = name {
            patch.insert("name".to_string(), Value::String(new_name.to_string()));
        }
        if let Some(new_description) = description {
            patch.insert(
                "description".to_string(),
                Value::String(new_description.to_string()),
            );
        }
        patch.insert(
            "updatedAt".to_string(),
            serde_json::to_value(chrono::Utc::now())?,
        );

        let updated = self
            .store
            .update_by_id(collections::PLAYLISTS, playlist_id.as_str(), patch)
            .await?
            .ok_or_else(|| HubError::storage("playlist update was not persisted"))?;
        from_document(updated)
    }

    /// Delete a playlist the requester owns.
    ///
    /// Member videos are borrowed entities and are left untouched.
    pub async fn delete(&self, playlist_id: &str, requester: &UserId) -> Result<()> {
        let playlist_id = PlaylistId::parse(playlist_id)?;
        membership::load_owned_playlist(self.store.as_ref(), &playlist_id, requester).await?;

        if !self
            .store
            .delete_by_id(collections::PLAYLISTS, playlist_id.as_str())
            .await?
        {
            return Err(HubError::not_found(format!("playlist {playlist_id}")));
        }
        Ok(())
    }
}
