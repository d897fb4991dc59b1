/// Video domain types
use crate::types::{UserId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video entity as stored in the `videos` collection.
///
/// Videos are owned by the upload lifecycle elsewhere on the platform.
/// Playlists hold them by id only; this subsystem never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Unique video identifier
    #[serde(rename = "_id")]
    pub id: VideoId,

    /// Uploading user
    pub owner: UserId,

    /// Video title
    pub title: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Video description
    pub description: String,

    /// Duration in seconds
    pub duration: f64,

    /// View counter
    pub views: u64,

    /// Upload timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_round_trips_through_json() {
        let video = Video {
            id: VideoId::generate(),
            owner: UserId::generate(),
            title: "Sunset timelapse".to_string(),
            thumbnail: "https://cdn.cliphub.io/t/1.jpg".to_string(),
            description: "4k timelapse".to_string(),
            duration: 182.5,
            views: 12,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["createdAt"], serde_json::to_value(video.created_at).unwrap());

        let back: Video = serde_json::from_value(value).unwrap();
        assert_eq!(back, video);
    }
}
