use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{commit, TournamentView};
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{GameResult, Pairing, RoundRecord};

#[derive(Debug, Deserialize)]
pub struct SetResultRequest {
    /// `"1-0"`, `"0-1"`, `"1/2-1/2"`, or null to clear
    pub result: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PairingResponse {
    pub index: usize,
    pub pairing: Pairing,
}

pub async fn set_result(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<SetResultRequest>,
) -> Result<Json<PairingResponse>, ApiError> {
    let result = req
        .result
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<GameResult>)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let pairing = commit(&state, |engine| {
        engine.set_pairing_result(index, result)?;
        Ok(engine.state().active_pairings[index].clone())
    })
    .await?;
    Ok(Json(PairingResponse { index, pairing }))
}

pub async fn complete_round(State(state): State<AppState>) -> Result<Json<RoundRecord>, ApiError> {
    let record = commit(&state, |engine| engine.complete_round()).await?;
    Ok(Json(record))
}

pub async fn next_round(State(state): State<AppState>) -> Result<Json<TournamentView>, ApiError> {
    let view = commit(&state, |engine| {
        engine.next_round()?;
        Ok(TournamentView::from_engine(engine))
    })
    .await?;
    Ok(Json(view))
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub rounds: Vec<RoundRecord>,
}

pub async fn history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let engine = state.engine.read().await;
    Json(HistoryResponse {
        rounds: engine.state().history.clone(),
    })
}
