/// Shared application state
use cliphub_playlists::PlaylistService;
use cliphub_store::MemoryStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: PlaylistService<MemoryStore>,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            service: PlaylistService::new(store),
        }
    }
}
