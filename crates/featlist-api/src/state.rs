//! Application state for the featlist API

use std::sync::Arc;

use featlist_core::ListStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Storage backend the handlers operate on
    store: Arc<dyn ListStore>,
}

impl AppState {
    /// Create a new AppState with the given store
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    /// Get the storage backend
    pub fn store(&self) -> &Arc<dyn ListStore> {
        &self.store
    }
}
