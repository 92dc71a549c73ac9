use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::commit;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Player, PlayerId};

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    /// `None` when nothing changed (blank name, unknown id)
    pub player: Option<Player>,
}

pub async fn add_player(
    State(state): State<AppState>,
    Json(req): Json<AddPlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let player = commit(&state, |engine| {
        let id = engine.add_player(&req.name)?;
        Ok(id.and_then(|id| engine.player(&id).cloned()))
    })
    .await?;

    let status = if player.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(PlayerResponse { player })))
}

pub async fn remove_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let id = PlayerId::from(id);
    let removed = commit(&state, |engine| engine.remove_player(&id)).await?;
    Ok(Json(PlayerResponse { player: removed }))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_add_player_created() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());

        let (status, json) = post_json(&state, "/api/players", r#"{"name": "  Anna "}"#).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["player"]["name"], "Anna");
        assert_eq!(json["player"]["points"], 0.0);
        assert!(state.store.config().snapshot_path().exists());
    }

    #[tokio::test]
    async fn test_add_blank_name_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());

        let (status, json) = post_json(&state, "/api/players", r#"{"name": "   "}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["player"].is_null());
        assert!(state.engine.read().await.state().players.is_empty());
    }

    #[tokio::test]
    async fn test_add_duplicate_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());
        seed_players(&state, &["Anna"]).await;

        let (status, json) = post_json(&state, "/api/players", r#"{"name": "anna"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "DUPLICATE_NAME");
        assert_eq!(state.engine.read().await.state().players.len(), 1);
    }

    #[tokio::test]
    async fn test_add_after_start_conflict() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());
        seed_players(&state, &["Anna", "Boris"]).await;
        state.engine.write().await.start().unwrap();

        let (status, json) = post_json(&state, "/api/players", r#"{"name": "Clara"}"#).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"]["code"], "ALREADY_STARTED");
    }

    #[tokio::test]
    async fn test_remove_player() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());
        seed_players(&state, &["Anna", "Boris"]).await;
        let id = state.engine.read().await.state().players[0].id.clone();

        let (status, json) = send(&state, "DELETE", &format!("/api/players/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["player"]["name"], "Anna");

        let (status, json) = send(&state, "DELETE", "/api/players/missing", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["player"].is_null());
        assert_eq!(state.engine.read().await.state().players.len(), 1);
    }
}
