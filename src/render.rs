//! Plain-text views of the tournament for the terminal.

use std::fmt::Write;

use crate::calculate::standings_table;
use crate::models::{Pairing, TournamentState};

/// Roster list.
pub fn render_players(state: &TournamentState) -> String {
    if state.players.is_empty() {
        return "No players yet.\n".to_string();
    }

    let mut out = String::new();
    for player in &state.players {
        let _ = writeln!(out, "- {}  ({})", player.name, player.id);
    }
    out
}

/// Which shuffle-order player gets white this round.
///
/// The label follows the actual color assignment: on odd parity the second
/// player of each shuffled pair takes white, so the first player is Black.
pub fn render_round_meta(state: &TournamentState) -> String {
    if !state.started {
        return "Tournament not started.".to_string();
    }
    let first = if state.color_switch % 2 == 1 {
        "Black"
    } else {
        "White"
    };
    format!(
        "Color switch state: {} (First player = {})",
        state.color_switch, first
    )
}

fn render_pairing(state: &TournamentState, idx: usize, pairing: &Pairing) -> String {
    match pairing {
        Pairing::Bye { player_id } => format!(
            "[{}] Bye: {} (earns 1 point on round completion)",
            idx,
            state.player_name(player_id)
        ),
        Pairing::Board {
            board,
            white_id,
            black_id,
            result,
        } => format!(
            "[{}] Board {}: {} (W) vs {} (B)  {}",
            idx,
            board,
            state.player_name(white_id),
            state.player_name(black_id),
            result.map(|r| r.notation()).unwrap_or("-")
        ),
    }
}

/// Current round pairings with their pending results.
pub fn render_pairings(state: &TournamentState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Round {}", state.round);
    let _ = writeln!(out, "{}", render_round_meta(state));

    if !state.started {
        return out;
    }

    if state.active_pairings.is_empty() {
        out.push_str("Round completed. Generate the next round.\n");
        return out;
    }

    for (idx, pairing) in state.active_pairings.iter().enumerate() {
        let _ = writeln!(out, "{}", render_pairing(state, idx, pairing));
    }
    out
}

/// Standings table.
pub fn render_standings(state: &TournamentState) -> String {
    if state.players.is_empty() {
        return "No standings yet.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<20} {:>5} {:>3} {:>3} {:>3} {:>6} {:>6} {:>5}",
        "#", "Player", "Pts", "W", "D", "L", "White", "Black", "Byes"
    );
    out.push_str(&"-".repeat(64));
    out.push('\n');

    for row in standings_table(&state.players) {
        let p = &row.player;
        let _ = writeln!(
            out,
            "{:>3}  {:<20} {:>5.1} {:>3} {:>3} {:>3} {:>6} {:>6} {:>5}",
            row.rank, p.name, p.points, p.wins, p.draws, p.losses, p.whites, p.blacks, p.byes
        );
    }
    out
}

/// Completed rounds with final results.
pub fn render_history(state: &TournamentState) -> String {
    if state.history.is_empty() {
        return "No completed rounds.\n".to_string();
    }

    let mut out = String::new();
    for record in &state.history {
        let _ = writeln!(
            out,
            "Round {} (color switch {}, completed {})",
            record.round,
            record.color_switch,
            record.completed_at.format("%Y-%m-%d %H:%M")
        );
        for (idx, pairing) in record.pairings.iter().enumerate() {
            let _ = writeln!(out, "  {}", render_pairing(state, idx, pairing));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TournamentEngine;
    use crate::models::{GameResult, PlayerId};

    fn started(names: &[&str]) -> TournamentEngine {
        let mut engine = TournamentEngine::seeded(11);
        for name in names {
            engine.add_player(name).unwrap();
        }
        engine.start().unwrap();
        engine
    }

    #[test]
    fn test_empty_views() {
        let state = TournamentState::default();
        assert_eq!(render_players(&state), "No players yet.\n");
        assert_eq!(render_standings(&state), "No standings yet.\n");
        assert!(render_pairings(&state).contains("Tournament not started."));
        assert_eq!(render_history(&state), "No completed rounds.\n");
    }

    #[test]
    fn test_round_meta_parity() {
        let mut state = TournamentState {
            started: true,
            color_switch: 1,
            ..Default::default()
        };
        assert!(render_round_meta(&state).ends_with("(First player = Black)"));
        state.color_switch = 2;
        assert!(render_round_meta(&state).ends_with("(First player = White)"));
    }

    #[test]
    fn test_pairings_show_bye_and_board() {
        let engine = started(&["Anna", "Boris", "Clara"]);
        let text = render_pairings(engine.state());

        assert!(text.contains("Round 1"));
        assert!(text.contains("Bye: "));
        assert!(text.contains("Board 1: "));
        assert!(text.contains("(W) vs"));
    }

    #[test]
    fn test_completed_round_prompt() {
        let mut engine = started(&["Anna", "Boris"]);
        engine.set_pairing_result(0, Some(GameResult::Draw)).unwrap();
        engine.complete_round().unwrap();

        let text = render_pairings(engine.state());
        assert!(text.contains("Round completed. Generate the next round."));
        assert!(render_history(engine.state()).contains("1/2-1/2"));
    }

    #[test]
    fn test_unknown_player_renders_as_unknown() {
        let state = TournamentState {
            started: true,
            round: 1,
            color_switch: 1,
            active_pairings: vec![Pairing::bye(PlayerId::from("ghost"))],
            ..Default::default()
        };
        assert!(render_pairings(&state).contains("Bye: Unknown"));
    }

    #[test]
    fn test_standings_points_one_decimal() {
        let mut engine = started(&["Anna", "Boris"]);
        engine.set_pairing_result(0, Some(GameResult::Draw)).unwrap();
        engine.complete_round().unwrap();

        let text = render_standings(engine.state());
        assert!(text.contains("Pts"));
        assert!(text.contains("0.5"));
        assert_eq!(text.lines().count(), 4);
    }
}
