//! ClipHub Store
//!
//! In-memory document store for the playlist subsystem: per-collection
//! CRUD, atomic membership array operations, and the staged aggregation
//! pipeline used to compose denormalized playlist views.
//!
//! The store implements the [`cliphub_core::EntityStore`] trait, so the
//! domain layer stays decoupled from this particular backend.
//!
//! # Example
//!
//! ```rust
//! use cliphub_core::{collections, to_document, EntityStore};
//! use cliphub_core::types::{Playlist, UserId};
//! use cliphub_store::MemoryStore;
//!
//! # async fn example() -> cliphub_core::Result<()> {
//! let store = MemoryStore::new();
//!
//! let playlist = Playlist::new(UserId::generate(), "Favorites", "my favs");
//! store
//!     .insert(collections::PLAYLISTS, to_document(&playlist)?)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod memory;
mod pipeline;

pub use memory::MemoryStore;
