use std::sync::Arc;

use crate::storage::ClubStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ClubStore>,
    /// Allowed CORS origin ("*" for any).
    pub cors_origin: String,
}

impl AppState {
    pub fn new(store: Arc<ClubStore>, cors_origin: String) -> Self {
        Self { store, cors_origin }
    }
}
