//! Standings calculation.
//!
//! Ranks players and derives the per-player figures shown next to the
//! standings:
//! - Ordering by points, wins, then name
//! - Score percentage over rounds played
//! - Color balance (whites minus blacks)

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::Player;

/// Standings order: more points first, then more wins, then name ascending.
pub fn standings_order(a: &Player, b: &Player) -> Ordering {
    b.points
        .total_cmp(&a.points)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| a.name.cmp(&b.name))
}

/// All players ranked by [`standings_order`].
pub fn compute_standings(players: &[Player]) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| standings_order(a, b));
    ranked
}

/// Calculate score percentage from points and rounds played.
pub fn calculate_score_percentage(points: f64, rounds: u32) -> f64 {
    if rounds == 0 {
        0.0
    } else {
        points / rounds as f64
    }
}

/// Whites minus blacks; positive means the player has had white more often.
pub fn calculate_color_balance(player: &Player) -> i64 {
    player.whites as i64 - player.blacks as i64
}

/// One row of the standings table.
#[derive(Debug, Clone, Serialize)]
pub struct StandingRow {
    /// 1-based position
    pub rank: usize,
    pub player: Player,
    pub score_percentage: f64,
    pub color_balance: i64,
}

/// Build the full standings table.
pub fn standings_table(players: &[Player]) -> Vec<StandingRow> {
    compute_standings(players)
        .into_iter()
        .enumerate()
        .map(|(i, p)| StandingRow {
            rank: i + 1,
            player: p.clone(),
            score_percentage: calculate_score_percentage(p.points, p.rounds_played()),
            color_balance: calculate_color_balance(p),
        })
        .collect()
}
