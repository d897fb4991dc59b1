/// Composed playlist view types
///
/// These are read-time assemblies produced by the view composer:
/// a playlist plus embedded owner and video summaries. They are never
/// persisted; the pipeline projections define exactly which fields of
/// the borrowed entities get copied in.
use crate::types::{PlaylistId, UserSummary, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video summary embedded in a playlist list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListItem {
    /// Video identifier
    #[serde(rename = "_id")]
    pub id: VideoId,

    /// Video title
    pub title: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Video description
    pub description: String,

    /// Uploader summary; absent when the user record is gone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserSummary>,
}

/// Video summary embedded in a playlist detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetailItem {
    /// Video identifier
    #[serde(rename = "_id")]
    pub id: VideoId,

    /// Video title
    pub title: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Duration in seconds
    pub duration: f64,

    /// View counter
    pub views: u64,

    /// Uploader summary; absent when the user record is gone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserSummary>,

    /// Upload timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// One playlist in the list-by-owner view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistListView {
    /// Playlist identifier
    #[serde(rename = "_id")]
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Playlist description
    pub description: String,

    /// Owner summary; absent when the user record is gone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserSummary>,

    /// Member videos with their own owner summaries embedded
    #[serde(default)]
    pub videos: Vec<VideoListItem>,
}

/// The single-playlist detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetailView {
    /// Playlist identifier
    #[serde(rename = "_id")]
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Playlist description
    pub description: String,

    /// Owner summary; absent when the user record is gone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserSummary>,

    /// Member videos with their own owner summaries embedded
    #[serde(default)]
    pub videos: Vec<VideoDetailItem>,
}
