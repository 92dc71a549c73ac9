//! Tournament snapshot.

use std::fs;

use tracing::debug;

use super::{StorageConfig, StorageError};
use crate::models::TournamentState;

/// Reads and writes one tournament's snapshot under the data directory.
#[derive(Debug, Clone)]
pub struct TournamentStore {
    config: StorageConfig,
}

impl TournamentStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Load the saved snapshot, or a fresh state if none exists.
    pub fn load_state(&self) -> Result<TournamentState, StorageError> {
        let path = self.config.snapshot_path();
        if !path.exists() {
            debug!("No snapshot at {:?}, starting fresh", path);
            return Ok(TournamentState::default());
        }

        let contents = fs::read_to_string(&path)?;
        let state: TournamentState = serde_json::from_str(&contents)?;
        debug!(
            "Loaded snapshot: round {}, {} players, {} completed rounds",
            state.round,
            state.players.len(),
            state.history.len()
        );
        Ok(state)
    }

    /// Replace the snapshot via a temp file and rename.
    pub fn save_state(&self, state: &TournamentState) -> Result<(), StorageError> {
        let path = self.config.snapshot_path();
        fs::create_dir_all(self.config.state_dir())?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(state)?)?;
        fs::rename(&tmp, &path)?;

        debug!("Saved snapshot to {:?}", path);
        Ok(())
    }
}
