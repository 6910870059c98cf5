use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::hex::board::Board;
use crate::hex::cellset::CellSet;
use crate::hex::oracle;
use crate::hex::pattern::{compare, Pattern};
use crate::hex::player::Player;

fn threat<const N: u32>(play: u32, sub: Option<Pattern<N>>) -> Pattern<N> {
    let mut body = CellSet::empty();
    body.set(play).expect("play is always a valid cell index");
    if let Some(s) = &sub {
        body = body | s.body();
    }
    Pattern::threat(play, body, sub)
}

/// Collapses the set of sub-patterns left behind by moves that did not
/// avert an opponent win into the cheapest solid witness available.
/// Falls back to the unminimised fork if it somehow fails to be solid
/// (the narrowing loop below is what keeps that from happening in
/// practice).
fn resolve_opponent_fork<const N: u32>(tines: Vec<Pattern<N>>) -> Pattern<N> {
    match tines.len() {
        0 => Pattern::None,
        1 => tines.into_iter().next().expect("length checked above"),
        _ => {
            let fork = Pattern::fork(tines);
            fork.minimum_fork().unwrap_or(fork)
        }
    }
}

/// Decides the winner of `board` and a minimal proof witness, recursing
/// over the side to move's legal replies. `rng` drives move-exploration
/// order only; with a fixed seed, the result is deterministic.
pub fn search<const N: u32>(board: &Board<N>, rng: &mut StdRng) -> (Player, Pattern<N>) {
    let side = board.player();

    let mut must = board.empty_cells();
    let mut moves: Vec<u32> = must.iter().collect();
    moves.shuffle(rng);

    let mut best_win: Option<Pattern<N>> = None;
    let mut opponent_tines: Vec<Pattern<N>> = Vec::new();

    for c in moves {
        if !must.test(c) {
            // "must" narrowed since the candidate list was fixed.
            continue;
        }

        let played = board.play(c).expect("c drawn from empty_cells is always legal");
        let candidate = if oracle::winner(&played, Some(side)).is(side) {
            Some(threat(c, None))
        } else {
            let (sub_winner, sub_pattern) = search(&played, rng);
            if sub_winner == side {
                Some(threat(c, Some(sub_pattern)))
            } else {
                must = must & sub_pattern.body();
                opponent_tines.push(sub_pattern);
                None
            }
        };

        if let Some(candidate) = candidate {
            best_win = match best_win {
                None => Some(candidate),
                Some(current) if compare(&candidate, &current) == Ordering::Less => Some(candidate),
                Some(current) => Some(current),
            };
        }
    }

    match best_win {
        Some(pattern) => (side, pattern),
        None => (side.opponent(), resolve_opponent_fork(opponent_tines)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::sizes::{Board1, Board2, Board3, Board4};
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn side_one_board_forces_an_immediate_win() {
        let board = Board1::empty();
        let (winner, witness) = search(&board, &mut rng());
        assert_eq!(winner, Player::X);
        assert_eq!(witness.play_index(), Some(0));
    }

    #[test]
    fn side_two_after_x_plays_cell_one_x_wins_with_remaining_cells() {
        let board = Board2::empty().play(1).unwrap();
        let (winner, witness) = search(&board, &mut rng());
        assert_eq!(winner, Player::X);
        let mut footprint: Vec<u32> = witness.body().iter().collect();
        footprint.sort();
        assert_eq!(footprint, vec![2, 3]);
    }

    #[test]
    fn side_two_empty_x_wins() {
        let board = Board2::empty();
        let (winner, witness) = search(&board, &mut rng());
        assert_eq!(winner, Player::X);
        let mut footprint: Vec<u32> = witness.body().iter().collect();
        footprint.sort();
        assert_eq!(footprint, vec![0, 1, 2]);
    }

    #[test]
    fn side_three_empty_x_wins() {
        let board = Board3::empty();
        let (winner, witness) = search(&board, &mut rng());
        assert_eq!(winner, Player::X);
        let mut footprint: Vec<u32> = witness.body().iter().collect();
        footprint.sort();
        assert_eq!(footprint, vec![1, 2, 4, 6, 7]);
    }

    #[test]
    fn side_four_with_partial_position_x_wins() {
        let vert = {
            let mut s = crate::hex::sizes::CellSet4::empty();
            s.set(6).unwrap();
            s.set(10).unwrap();
            s
        };
        let horz = {
            let mut s = crate::hex::sizes::CellSet4::empty();
            s.set(0).unwrap();
            s
        };
        let board = Board4::from_cellsets(vert, horz, None).unwrap();
        let (winner, witness) = search(&board, &mut rng());
        assert_eq!(winner, Player::X);
        let mut footprint: Vec<u32> = witness.body().iter().collect();
        footprint.sort();
        assert_eq!(footprint, vec![1, 2, 12, 13]);
    }

    #[test]
    fn search_is_deterministic_under_a_fixed_seed() {
        let board = Board3::empty();
        let (w1, p1) = search(&board, &mut StdRng::seed_from_u64(7));
        let (w2, p2) = search(&board, &mut StdRng::seed_from_u64(7));
        assert_eq!(w1, w2);
        assert_eq!(p1.body().count(), p2.body().count());
        assert_eq!(p1.cost(), p2.cost());
    }
}
