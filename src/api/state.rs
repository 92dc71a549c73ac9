use std::sync::Arc;

use tokio::sync::RwLock;

use crate::engine::TournamentEngine;
use crate::storage::TournamentStore;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<TournamentEngine>>,
    pub store: Arc<TournamentStore>,
}

impl AppState {
    pub fn new(engine: TournamentEngine, store: TournamentStore) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
            store: Arc::new(store),
        }
    }
}
