//! ClipHub Core
//!
//! Shared types, traits, and error handling for the ClipHub playlist
//! subsystem.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `User`, `Video`, the typed ids, and
//!   the composed view types
//! - **Store Seam**: the [`EntityStore`] trait plus the [`Filter`] and
//!   [`Stage`] pipeline vocabulary
//! - **Error Handling**: unified [`HubError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use cliphub_core::types::{Playlist, UserId, VideoId};
//!
//! let owner = UserId::generate();
//! let mut playlist = Playlist::new(owner, "Favorites", "my favs");
//!
//! let video = VideoId::generate();
//! playlist.videos.push(video.clone());
//! assert!(playlist.contains(&video));
//! ```

#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod query;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use document::{collections, document_id, from_document, to_document, Document, ID_FIELD};
pub use error::{HubError, Result};
pub use query::{Filter, Stage};
pub use store::{ArrayUpdate, EntityStore};
pub use types::{
    is_valid_object_id,
    // Entities
    Playlist, UpdatePlaylist, User, Video,
    // Composed views
    PlaylistDetailView, PlaylistListView, UserSummary, VideoDetailItem, VideoListItem,
    // Ids
    PlaylistId, UserId, VideoId,
};
