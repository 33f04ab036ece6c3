use std::sync::Arc;

use database::MatchStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MatchStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MatchStore>) -> Self {
        Self { store }
    }
}
