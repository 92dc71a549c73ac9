//! Archived rounds and the overall tournament state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Pairing, Player, PlayerId};

/// Immutable snapshot of a completed round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (1-based)
    pub round: u32,

    /// Color-parity counter in effect for this round
    pub color_switch: u32,

    /// Pairings with their final results
    pub pairings: Vec<Pairing>,

    /// When the round was completed
    pub completed_at: DateTime<Utc>,
}

impl RoundRecord {
    pub fn new(round: u32, color_switch: u32, pairings: Vec<Pairing>) -> Self {
        Self {
            round,
            color_switch,
            pairings,
            completed_at: Utc::now(),
        }
    }

    pub fn board_count(&self) -> usize {
        self.pairings.iter().filter(|p| p.is_board()).count()
    }

    pub fn bye_count(&self) -> usize {
        self.pairings.iter().filter(|p| p.is_bye()).count()
    }

    /// Total points handed out by this round (one per board, one per bye).
    pub fn points_awarded(&self) -> f64 {
        self.pairings
            .iter()
            .map(|p| match p {
                Pairing::Bye { .. } => 1.0,
                Pairing::Board { result, .. } => result
                    .map(|r| {
                        let (w, b) = r.points();
                        w + b
                    })
                    .unwrap_or(0.0),
            })
            .sum()
    }
}

/// Where the tournament sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    NotStarted,
    InRound,
    RoundComplete,
}

/// The full mutable state of one tournament session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentState {
    /// Roster in insertion order
    pub players: Vec<Player>,

    /// Current round number, 0 before start
    pub round: u32,

    /// Color-parity counter, 0 before start
    pub color_switch: u32,

    /// Pairings of the round in progress
    pub active_pairings: Vec<Pairing>,

    /// Completed rounds, oldest first
    pub history: Vec<RoundRecord>,

    pub started: bool,
}

impl TournamentState {
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    /// Name for display; unknown ids render as "Unknown".
    pub fn player_name(&self, id: &PlayerId) -> &str {
        self.player(id).map(|p| p.name.as_str()).unwrap_or("Unknown")
    }

    pub fn phase(&self) -> RoundPhase {
        if !self.started {
            RoundPhase::NotStarted
        } else if self.active_pairings.is_empty() {
            RoundPhase::RoundComplete
        } else {
            RoundPhase::InRound
        }
    }
}
