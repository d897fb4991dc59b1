//! ClipHub Playlists
//!
//! The playlist domain layer: ownership-gated membership mutation,
//! denormalized view composition, and the service facade consumed by
//! the HTTP surface.
//!
//! Works against any [`cliphub_core::EntityStore`] implementation; the
//! requester identity is threaded explicitly through every operation,
//! never taken from ambient state.

pub mod membership;
pub mod service;
pub mod views;

pub use service::PlaylistService;
