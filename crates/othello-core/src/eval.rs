//! Phase-weighted positional evaluation.
//!
//! A position is scored relative to the position the search started from. Six
//! heuristics each contribute `weight[band] * (mine - theirs)`:
//!
//! - piece count, only late in the game
//! - corners, which can never be flipped back
//! - edges, which firm up as the game progresses
//! - X-squares taken while their corner is still open (penalised)
//! - potential mobility, measured as the opponent's frontier change
//! - mobility, the change in legal move counts
//!
//! The weights are selected by a game-phase band derived from the number of
//! discs on the board.

mod features;
mod probability;

pub use features::{CORNERS, X_SQUARES, is_edge};
pub use probability::DEFAULT_PROBABILITY_DEPTH;

use crate::board::Board;
use crate::constants::{BOARD_SQUARES, WIPEOUT_SCORE};
use crate::disc::Disc;
use crate::types::{Depth, Probability, Score};

/// Number of game-phase bands.
pub const NUM_BANDS: usize = 5;

pub const PIECE_COUNT_WEIGHT: [Score; NUM_BANDS] = [0, 0, 0, 4, 1];
pub const POTENTIAL_MOBILITY_WEIGHT: [Score; NUM_BANDS] = [5, 4, 3, 2, 0];
pub const MOBILITY_WEIGHT: [Score; NUM_BANDS] = [7, 6, 5, 4, 0];
pub const CORNER_WEIGHT: [Score; NUM_BANDS] = [35, 35, 35, 35, 0];
pub const EDGE_WEIGHT: [Score; NUM_BANDS] = [0, 3, 4, 5, 0];
pub const XSQUARE_WEIGHT: [Score; NUM_BANDS] = [-8, -8, -8, -8, 0];

/// Which board the piece, corner, edge and X-square signals are measured on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeltaMode {
    /// Only the cells that changed since the start position.
    #[default]
    Cellwise,
    /// The whole start position.
    ///
    /// Piece, corner and edge terms are then the same for every leaf of a
    /// search, so only mobility and potential mobility tell leaves apart.
    Reference,
}

/// Evaluator configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    pub delta_mode: DeltaMode,
}

impl EvalConfig {
    #[must_use]
    pub fn with_delta_mode(mut self, delta_mode: DeltaMode) -> Self {
        self.delta_mode = delta_mode;
        self
    }
}

/// Computes the game-phase band (0-4) for a position.
///
/// # Arguments
///
/// * `pieces` - Number of discs on the board.
/// * `depth` - Search depth. Deeper searches enter the last band earlier.
pub fn game_phase_band(pieces: u32, depth: Depth) -> usize {
    let pieces = pieces as i64;
    match pieces {
        ..=16 => 0,
        17..=32 => 1,
        33..=48 => 2,
        _ if pieces <= BOARD_SQUARES as i64 - depth as i64 => 3,
        _ => 4,
    }
}

/// Heuristic position scorer.
///
/// The evaluator holds configuration only; the player and opponent are passed
/// to every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Evaluator { config }
    }

    /// Scores `board` for `player`, relative to `start`.
    ///
    /// # Arguments
    ///
    /// * `start` - Position the search started from.
    /// * `board` - Position being evaluated.
    /// * `depth` - Search depth, used to pick the late-game band.
    /// * `player` - Side the score is reported for.
    /// * `opponent` - The other side.
    ///
    /// # Returns
    ///
    /// `-WIPEOUT_SCORE` if `player` has no discs on `board`, `WIPEOUT_SCORE` if
    /// `opponent` has none, otherwise the weighted sum of the six differentials.
    pub fn score(
        &self,
        start: &Board,
        board: &Board,
        depth: Depth,
        player: Disc,
        opponent: Disc,
    ) -> Score {
        let count = board.count_stones();
        if count.of(player) == 0 {
            return -WIPEOUT_SCORE;
        }
        if count.of(opponent) == 0 {
            return WIPEOUT_SCORE;
        }

        let band = game_phase_band(count.discs(), depth);
        let delta = match self.config.delta_mode {
            DeltaMode::Cellwise => board.delta_from(start),
            DeltaMode::Reference => *start,
        };

        features::piece_differential(&delta, band, player, opponent)
            + features::corner_differential(&delta, band, player, opponent)
            + features::edge_differential(&delta, band, player, opponent)
            + features::xsquare_differential(start, board, &delta, band, player, opponent)
            + features::potential_mobility_differential(start, board, band, player, opponent)
            + features::mobility_differential(start, board, band, player, opponent)
    }

    /// Estimates win probabilities at the default depth.
    ///
    /// # Returns
    ///
    /// `(p_player, p_opponent)`, each in `[0.05, 0.95]`, summing to 1.
    pub fn win_probability(
        &self,
        board: &Board,
        player: Disc,
        opponent: Disc,
    ) -> (Probability, Probability) {
        self.win_probability_at_depth(board, player, opponent, DEFAULT_PROBABILITY_DEPTH)
    }

    /// Estimates win probabilities, scoring the position as if searched to `depth`.
    pub fn win_probability_at_depth(
        &self,
        board: &Board,
        player: Disc,
        opponent: Disc,
        depth: Depth,
    ) -> (Probability, Probability) {
        probability::win_probability(self, board, player, opponent, depth)
    }
}
