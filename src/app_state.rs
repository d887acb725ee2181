use std::sync::Arc;

use crate::services::{catalog::WineCatalog, winery_directory::WineryDirectory};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<WineCatalog>,
    pub wineries: Arc<WineryDirectory>,
}

impl AppState {
    pub fn new(catalog: WineCatalog, wineries: WineryDirectory) -> Self {
        Self {
            catalog: Arc::new(catalog),
            wineries: Arc::new(wineries),
        }
    }
}
