//! # Pairing Desk
//!
//! A local chess tournament desk: roster, random round pairings with
//! alternating colors, result entry, and cumulative standings.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, pairings, rounds, state)
//! - **engine**: Tournament state machine, pairing and scoring
//! - **calculate**: Standings ordering and derived figures
//! - **storage**: Tournament snapshot on the local filesystem
//! - **api**: REST API endpoints
//! - **render**: Plain-text views for the terminal
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod engine;
pub mod models;
pub mod render;
pub mod storage;

pub use engine::{EngineError, TournamentEngine};
pub use models::*;
