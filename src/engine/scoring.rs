//! Point accrual for finished pairings.

use tracing::warn;

use crate::models::{GameResult, Pairing, PlayerId, TournamentState};

/// Credit a board's result to both players.
///
/// Color counters advance regardless of outcome. If either player is
/// missing from the roster the board is skipped entirely.
pub fn apply_result(
    state: &mut TournamentState,
    white_id: &PlayerId,
    black_id: &PlayerId,
    result: GameResult,
) {
    if state.player(white_id).is_none() || state.player(black_id).is_none() {
        warn!(%white_id, %black_id, "Skipping board with unknown player");
        return;
    }

    let (white_points, black_points) = result.points();

    if let Some(white) = state.player_mut(white_id) {
        white.points += white_points;
        match result {
            GameResult::WhiteWins => white.wins += 1,
            GameResult::BlackWins => white.losses += 1,
            GameResult::Draw => white.draws += 1,
        }
        white.whites += 1;
    }

    if let Some(black) = state.player_mut(black_id) {
        black.points += black_points;
        match result {
            GameResult::WhiteWins => black.losses += 1,
            GameResult::BlackWins => black.wins += 1,
            GameResult::Draw => black.draws += 1,
        }
        black.blacks += 1;
    }
}

/// Award a bye: one point and one bye.
pub fn award_bye(state: &mut TournamentState, player_id: &PlayerId) {
    match state.player_mut(player_id) {
        Some(player) => {
            player.points += 1.0;
            player.byes += 1;
        }
        None => warn!(%player_id, "Skipping bye for unknown player"),
    }
}

/// Settle every pairing of a round. Pending boards are ignored.
pub fn settle_round(state: &mut TournamentState, pairings: &[Pairing]) {
    for pairing in pairings {
        match pairing {
            Pairing::Bye { player_id } => award_bye(state, player_id),
            Pairing::Board {
                white_id,
                black_id,
                result: Some(result),
                ..
            } => apply_result(state, white_id, black_id, *result),
            Pairing::Board { result: None, .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;

    fn two_player_state() -> (TournamentState, PlayerId, PlayerId) {
        let white = Player::new("White".to_string());
        let black = Player::new("Black".to_string());
        let (w, b) = (white.id.clone(), black.id.clone());
        let state = TournamentState {
            players: vec![white, black],
            ..Default::default()
        };
        (state, w, b)
    }

    #[test]
    fn test_white_wins() {
        let (mut state, w, b) = two_player_state();
        apply_result(&mut state, &w, &b, GameResult::WhiteWins);

        let white = state.player(&w).unwrap();
        let black = state.player(&b).unwrap();
        assert_eq!(white.points, 1.0);
        assert_eq!(white.wins, 1);
        assert_eq!(white.whites, 1);
        assert_eq!(black.points, 0.0);
        assert_eq!(black.losses, 1);
        assert_eq!(black.blacks, 1);
    }

    #[test]
    fn test_black_wins() {
        let (mut state, w, b) = two_player_state();
        apply_result(&mut state, &w, &b, GameResult::BlackWins);

        let white = state.player(&w).unwrap();
        let black = state.player(&b).unwrap();
        assert_eq!(black.points, 1.0);
        assert_eq!(black.wins, 1);
        assert_eq!(white.losses, 1);
        assert_eq!(white.whites, 1);
        assert_eq!(black.blacks, 1);
    }

    #[test]
    fn test_draw() {
        let (mut state, w, b) = two_player_state();
        apply_result(&mut state, &w, &b, GameResult::Draw);

        for id in [&w, &b] {
            let p = state.player(id).unwrap();
            assert_eq!(p.points, 0.5);
            assert_eq!(p.draws, 1);
        }
    }

    #[test]
    fn test_missing_player_is_noop() {
        let (mut state, w, _) = two_player_state();
        let before = state.clone();
        apply_result(&mut state, &w, &PlayerId::from("ghost"), GameResult::WhiteWins);
        assert_eq!(state, before);
    }

    #[test]
    fn test_bye_awards_point() {
        let (mut state, w, _) = two_player_state();
        award_bye(&mut state, &w);

        let p = state.player(&w).unwrap();
        assert_eq!(p.points, 1.0);
        assert_eq!(p.byes, 1);
        assert_eq!(p.games_played(), 0);
    }

    #[test]
    fn test_settle_round_mixed() {
        let (mut state, w, b) = two_player_state();
        let c = Player::new("Carol".to_string());
        let c_id = c.id.clone();
        state.players.push(c);

        let pairings = vec![
            Pairing::Board {
                board: 1,
                white_id: w.clone(),
                black_id: b.clone(),
                result: Some(GameResult::Draw),
            },
            Pairing::bye(c_id.clone()),
        ];
        settle_round(&mut state, &pairings);

        let total: f64 = state.players.iter().map(|p| p.points).sum();
        assert_eq!(total, 2.0);
        assert_eq!(state.player(&c_id).unwrap().byes, 1);
    }
}
