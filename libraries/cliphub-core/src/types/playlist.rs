/// Playlist domain types
use crate::types::{PlaylistId, UserId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist entity as stored in the `playlists` collection.
///
/// The owner is fixed at creation. `videos` is an ordered reference
/// list with set semantics: a video id appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    #[serde(rename = "_id")]
    pub id: PlaylistId,

    /// Playlist name, unique per owner
    pub name: String,

    /// Playlist description
    pub description: String,

    /// Owning user, immutable after creation
    pub owner: UserId,

    /// Ordered video references, duplicates forbidden
    #[serde(default)]
    pub videos: Vec<VideoId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(owner: UserId, name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            description: description.into(),
            owner,
            videos: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a video id is a member of this playlist
    pub fn contains(&self, video_id: &VideoId) -> bool {
        self.videos.contains(video_id)
    }
}

/// Patch applied by the playlist update operation.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlaylist {
    /// New playlist name
    pub name: Option<String>,

    /// New playlist description
    pub description: Option<String>,
}

impl UpdatePlaylist {
    /// Whether the patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_playlist_is_empty() {
        let owner = UserId::generate();
        let playlist = Playlist::new(owner.clone(), "Favorites", "my favs");

        assert_eq!(playlist.owner, owner);
        assert_eq!(playlist.name, "Favorites");
        assert!(playlist.videos.is_empty());
        assert!(playlist.created_at <= Utc::now());
    }

    #[test]
    fn membership_check() {
        let mut playlist = Playlist::new(UserId::generate(), "Watch later", "queue");
        let video = VideoId::generate();
        assert!(!playlist.contains(&video));

        playlist.videos.push(video.clone());
        assert!(playlist.contains(&video));
    }

    #[test]
    fn playlist_document_uses_store_field_names() {
        let playlist = Playlist::new(UserId::generate(), "Favorites", "my favs");
        let value = serde_json::to_value(&playlist).unwrap();

        assert!(value.get("_id").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["videos"], serde_json::json!([]));
    }
}
