pub mod players;
pub mod rounds;
pub mod tournament;

use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::engine::{EngineError, TournamentEngine};
use crate::models::{RoundPhase, TournamentState};

/// Snapshot plus the control gates a client needs to enable buttons.
#[derive(Debug, Serialize)]
pub struct TournamentView {
    #[serde(flatten)]
    pub state: TournamentState,
    pub phase: RoundPhase,
    pub can_start: bool,
    pub can_complete_round: bool,
    pub can_start_next_round: bool,
    pub min_players: usize,
}

impl TournamentView {
    pub fn from_engine(engine: &TournamentEngine) -> Self {
        Self {
            state: engine.state().clone(),
            phase: engine.phase(),
            can_start: engine.can_start(),
            can_complete_round: engine.can_complete_round(),
            can_start_next_round: engine.can_start_next_round(),
            min_players: engine.min_players(),
        }
    }
}

/// Apply `op` to a copy of the engine and swap it in once its snapshot is saved.
///
/// A failed operation or a failed write leaves the live engine untouched.
pub(crate) async fn commit<T>(
    state: &AppState,
    op: impl FnOnce(&mut TournamentEngine) -> Result<T, EngineError>,
) -> Result<T, ApiError> {
    let mut engine = state.engine.write().await;
    let mut draft = engine.clone();
    let out = op(&mut draft)?;
    state.store.save_state(draft.state())?;
    *engine = draft;
    Ok(out)
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::engine::{EngineError, TournamentEngine};
    use crate::storage::{StorageConfig, TournamentStore};

    pub fn setup_test_state(dir: &std::path::Path) -> AppState {
        let store = TournamentStore::new(StorageConfig::new(dir.to_path_buf()));
        AppState::new(TournamentEngine::seeded(2024), store)
    }

    pub async fn send(
        state: &AppState,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get_json(state: &AppState, uri: &str) -> (StatusCode, Value) {
        send(state, "GET", uri, None).await
    }

    pub async fn post_json(state: &AppState, uri: &str, body: &str) -> (StatusCode, Value) {
        send(state, "POST", uri, Some(body)).await
    }

    /// Add players directly through the engine.
    pub async fn seed_players(state: &AppState, names: &[&str]) {
        let mut engine = state.engine.write().await;
        for name in names {
            engine.add_player(name).unwrap();
        }
    }
}
