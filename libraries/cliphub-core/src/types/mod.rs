//! Domain types for the playlist subsystem

mod ids;
mod playlist;
mod user;
mod video;
mod views;

pub use ids::{is_valid_object_id, PlaylistId, UserId, VideoId};
pub use playlist::{Playlist, UpdatePlaylist};
pub use user::{User, UserSummary};
pub use video::Video;
pub use views::{PlaylistDetailView, PlaylistListView, VideoDetailItem, VideoListItem};
