//! Player model — a roster entry and its running tally.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A tournament participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier
    pub id: PlayerId,

    /// Display name, trimmed, unique case-insensitively
    pub name: String,

    /// Accumulated points (multiples of 0.5)
    pub points: f64,

    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub byes: u32,

    /// Games played with the white pieces
    pub whites: u32,

    /// Games played with the black pieces
    pub blacks: u32,
}

impl Player {
    /// Create a new Player with a fresh ID and zeroed counters.
    pub fn new(name: String) -> Self {
        Self {
            id: PlayerId::generate(),
            name,
            points: 0.0,
            wins: 0,
            draws: 0,
            losses: 0,
            byes: 0,
            whites: 0,
            blacks: 0,
        }
    }

    /// Rounds this player has completed (games plus byes).
    pub fn rounds_played(&self) -> u32 {
        self.wins + self.draws + self.losses + self.byes
    }

    /// Games actually played over the board.
    pub fn games_played(&self) -> u32 {
        self.whites + self.blacks
    }

    /// Case-insensitive name comparison used for duplicate detection.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
