use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{commit, TournamentView};
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{standings_table, StandingRow};

pub async fn get_tournament(State(state): State<AppState>) -> Json<TournamentView> {
    let engine = state.engine.read().await;
    Json(TournamentView::from_engine(&engine))
}

pub async fn start(State(state): State<AppState>) -> Result<Json<TournamentView>, ApiError> {
    let view = commit(&state, |engine| {
        engine.start()?;
        Ok(TournamentView::from_engine(engine))
    })
    .await?;
    Ok(Json(view))
}

#[derive(Debug, Default, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

/// Destructive; the caller must send `{"confirm": true}`.
pub async fn reset(
    State(state): State<AppState>,
    Json(req): Json<ResetRequest>,
) -> Result<Json<TournamentView>, ApiError> {
    if !req.confirm {
        return Err(ApiError::BadRequest(
            "Reset all players, rounds, and results? Send confirm=true".to_string(),
        ));
    }

    let view = commit(&state, |engine| {
        engine.reset();
        Ok(TournamentView::from_engine(engine))
    })
    .await?;
    Ok(Json(view))
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub round: u32,
    pub standings: Vec<StandingRow>,
}

pub async fn standings(State(state): State<AppState>) -> Json<StandingsResponse> {
    let engine = state.engine.read().await;
    Json(StandingsResponse {
        round: engine.state().round,
        standings: standings_table(&engine.state().players),
    })
}
