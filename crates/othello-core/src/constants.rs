//! Global constants

use crate::types::Score;

/// Number of squares on the Othello board.
pub const BOARD_SQUARES: usize = 64;

/// Absolute score reported when one side has no discs left.
pub const WIPEOUT_SCORE: Score = 1000;

/// Infinity score for search algorithms.
pub const SCORE_INF: Score = 30000;
