//! Win-probability estimate shown to players.

use super::{CORNERS, Evaluator};
use crate::board::Board;
use crate::constants::WIPEOUT_SCORE;
use crate::disc::Disc;
use crate::types::{Depth, Probability};

/// Depth used when the caller does not pick one.
pub const DEFAULT_PROBABILITY_DEPTH: Depth = 3;

const MIN_PROBABILITY: Probability = 0.05;
const MAX_PROBABILITY: Probability = 0.95;

/// Weight of the material/mobility/corner blend against the heuristic score.
const FACTOR_SHARE: f64 = 0.7;
const SCORE_SHARE: f64 = 0.3;
const SIGMOID_SLOPE: f64 = 5.0;

/// `(piece, mobility, corner)` weights by total disc count.
fn factor_weights(total: u32) -> (f64, f64, f64) {
    match total {
        0..20 => (0.3, 0.4, 0.3),
        20..40 => (0.4, 0.3, 0.3),
        _ => (0.6, 0.2, 0.2),
    }
}

/// `(a - b) / max(a + b, 1)`.
#[inline]
fn advantage(a: u32, b: u32) -> f64 {
    (a as f64 - b as f64) / (a + b).max(1) as f64
}

pub(super) fn win_probability(
    evaluator: &Evaluator,
    board: &Board,
    player: Disc,
    opponent: Disc,
    depth: Depth,
) -> (Probability, Probability) {
    let score = evaluator.score(board, board, depth, player, opponent);

    let count = board.count_stones();
    let total = count.discs();
    let player_moves = board.legal_moves(player).count() as u32;
    let opponent_moves = board.legal_moves(opponent).count() as u32;
    let corners_of = |color: Disc| {
        CORNERS
            .iter()
            .filter(|&&sq| board.get_disc_at(sq) == color)
            .count() as f64
    };

    let piece_advantage =
        (count.of(player) as f64 - count.of(opponent) as f64) / total.max(1) as f64;
    let mobility_advantage = advantage(player_moves, opponent_moves);
    let corner_advantage = (corners_of(player) - corners_of(opponent)) / CORNERS.len() as f64;

    let (wp, wm, wc) = factor_weights(total);
    let factor = wp * piece_advantage + wm * mobility_advantage + wc * corner_advantage;
    let normalized = score as f64 / WIPEOUT_SCORE as f64;
    let combined = FACTOR_SHARE * factor + SCORE_SHARE * normalized;

    let probability = 1.0 / (1.0 + (-combined * SIGMOID_SLOPE).exp());
    let p = probability.clamp(MIN_PROBABILITY, MAX_PROBABILITY);
    (p, 1.0 - p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_weights() {
        assert_eq!(factor_weights(4), (0.3, 0.4, 0.3));
        assert_eq!(factor_weights(19), (0.3, 0.4, 0.3));
        assert_eq!(factor_weights(20), (0.4, 0.3, 0.3));
        assert_eq!(factor_weights(39), (0.4, 0.3, 0.3));
        assert_eq!(factor_weights(40), (0.6, 0.2, 0.2));
        assert_eq!(factor_weights(64), (0.6, 0.2, 0.2));
    }

    #[test]
    fn test_advantage() {
        assert_eq!(advantage(0, 0), 0.0);
        assert_eq!(advantage(3, 1), 0.5);
        assert_eq!(advantage(1, 3), -0.5);
    }

    #[test]
    fn test_probabilities_are_complementary() {
        let evaluator = Evaluator::new();
        let mut board = Board::new();
        let moves = board.legal_moves(Disc::Black);
        board.apply_move(&moves, crate::square::Square::new(2, 3)).unwrap();

        let (black, white) = win_probability(&evaluator, &board, Disc::Black, Disc::White, 3);
        let (white2, black2) = win_probability(&evaluator, &board, Disc::White, Disc::Black, 3);
        assert!((black + white - 1.0).abs() < 1e-12);
        assert!((MIN_PROBABILITY..=MAX_PROBABILITY).contains(&black));
        // Black is ahead on discs after the opening move.
        assert!(black > 0.5);
        assert!(white2 < 0.5);
        assert!((black2 + white2 - 1.0).abs() < 1e-12);
    }
}
