//! Application state for the web layer.

use std::sync::Arc;

use crate::controller::FgcController;
use crate::store::MemoryStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Validating controller over the in-memory stores
    pub controller: Arc<FgcController<MemoryStore>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(controller: FgcController<MemoryStore>) -> Self {
        Self {
            controller: Arc::new(controller),
        }
    }
}
