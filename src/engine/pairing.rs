//! Round pairing generation.
//!
//! Pairings are built from a uniformly random permutation of the roster,
//! taken two at a time. The round's color-parity counter decides which
//! player of each pair gets white: on odd rounds the second player of the
//! pair is white, on even rounds the first. An odd player out gets a bye.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Pairing, Player, PlayerId};

/// Shuffle the roster into a random pairing order (Fisher–Yates).
pub fn shuffle_order<R: Rng + ?Sized>(players: &[Player], rng: &mut R) -> Vec<PlayerId> {
    let mut order: Vec<PlayerId> = players.iter().map(|p| p.id.clone()).collect();
    order.shuffle(rng);
    order
}

/// Pair players in the given order, assigning colors by parity.
pub fn pair_in_order(order: &[PlayerId], color_switch: u32) -> Vec<Pairing> {
    let flip = color_switch % 2 == 1;
    let mut pairings = Vec::with_capacity(order.len() / 2 + order.len() % 2);
    let mut board = 0;

    for chunk in order.chunks(2) {
        match chunk {
            [a, b] => {
                board += 1;
                let (white, black) = if flip { (b, a) } else { (a, b) };
                pairings.push(Pairing::board(board, white.clone(), black.clone()));
            }
            [a] => pairings.push(Pairing::bye(a.clone())),
            _ => {}
        }
    }

    pairings
}

/// Generate a fresh set of pairings for one round.
pub fn generate_round_pairings<R: Rng + ?Sized>(
    players: &[Player],
    color_switch: u32,
    rng: &mut R,
) -> Vec<Pairing> {
    let order = shuffle_order(players, rng);
    pair_in_order(&order, color_switch)
}
