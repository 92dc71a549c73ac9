//! Pairing model — one bye or one board for a round.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::PlayerId;

/// Outcome of a game, in the usual score notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
}

impl GameResult {
    /// Score notation, e.g. `"1-0"`.
    pub fn notation(&self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }

    /// Points earned by (white, black).
    pub fn points(&self) -> (f64, f64) {
        match self {
            GameResult::WhiteWins => (1.0, 0.0),
            GameResult::BlackWins => (0.0, 1.0),
            GameResult::Draw => (0.5, 0.5),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// A result string that matches none of the known notations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown result '{0}' (expected 1-0, 0-1 or 1/2-1/2)")]
pub struct ParseResultError(pub String);

impl FromStr for GameResult {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1-0" | "white" => Ok(GameResult::WhiteWins),
            "0-1" | "black" => Ok(GameResult::BlackWins),
            "1/2-1/2" | "½-½" | "draw" => Ok(GameResult::Draw),
            _ => Err(ParseResultError(s.to_string())),
        }
    }
}

/// A single entry in a round's pairing list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Pairing {
    /// Unpaired player in an odd-sized round; scores a full point.
    Bye { player_id: PlayerId },

    /// A game between two players with assigned colors.
    Board {
        /// 1-based board number, counting boards only
        board: u32,
        white_id: PlayerId,
        black_id: PlayerId,
        #[serde(default)]
        result: Option<GameResult>,
    },
}

impl Pairing {
    /// Create a board with no result yet.
    pub fn board(board: u32, white_id: PlayerId, black_id: PlayerId) -> Self {
        Pairing::Board {
            board,
            white_id,
            black_id,
            result: None,
        }
    }

    pub fn bye(player_id: PlayerId) -> Self {
        Pairing::Bye { player_id }
    }

    pub fn is_board(&self) -> bool {
        matches!(self, Pairing::Board { .. })
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Pairing::Bye { .. })
    }

    /// A board without a result. Byes are never pending.
    pub fn is_pending(&self) -> bool {
        matches!(self, Pairing::Board { result: None, .. })
    }

    /// Players referenced by this pairing.
    pub fn player_ids(&self) -> Vec<&PlayerId> {
        match self {
            Pairing::Bye { player_id } => vec![player_id],
            Pairing::Board {
                white_id, black_id, ..
            } => vec![white_id, black_id],
        }
    }
}
