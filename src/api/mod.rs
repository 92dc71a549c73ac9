//! REST API endpoints.
//!
//! Axum-based HTTP API over a single shared tournament engine. Mutating
//! routes only change the live engine once its snapshot is on disk.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::engine::EngineError;
use crate::storage::StorageError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

fn engine_status(err: &EngineError) -> StatusCode {
    match err {
        EngineError::DuplicateName(_) | EngineError::NotABoard(_) => StatusCode::BAD_REQUEST,
        EngineError::PairingOutOfRange { .. } => StatusCode::NOT_FOUND,
        EngineError::AlreadyStarted { .. }
        | EngineError::NotEnoughPlayers { .. }
        | EngineError::NotStarted
        | EngineError::ResultsIncomplete { .. }
        | EngineError::RoundInProgress
        | EngineError::NoActiveRound => StatusCode::CONFLICT,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Engine(err) => {
                tracing::warn!(code = err.code(), "Rejected: {}", err);
                (engine_status(err), err.code())
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// CORS policy for the configured origin; `*` allows any.
pub fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if origin == "*" {
        return layer.allow_origin(Any);
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            tracing::warn!("Invalid CORS origin {:?}, allowing any", origin);
            layer.allow_origin(Any)
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/tournament", get(routes::tournament::get_tournament))
        .route("/api/tournament/start", post(routes::tournament::start))
        .route("/api/tournament/reset", post(routes::tournament::reset))
        .route("/api/players", post(routes::players::add_player))
        .route("/api/players/:id", delete(routes::players::remove_player))
        .route(
            "/api/rounds/current/pairings/:index",
            put(routes::rounds::set_result),
        )
        .route(
            "/api/rounds/current/complete",
            post(routes::rounds::complete_round),
        )
        .route("/api/rounds/next", post(routes::rounds::next_round))
        .route("/api/standings", get(routes::tournament::standings))
        .route("/api/history", get(routes::rounds::history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
