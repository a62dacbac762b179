//! Shared application state

use std::sync::{Arc, Mutex};
use vidcat_store::VideoStore;

/// Shared state across all handlers
#[derive(Clone)]
pub struct AppState {
    /// The catalog, behind the one lock every read-modify-write goes through
    pub store: Arc<Mutex<VideoStore>>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: VideoStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
