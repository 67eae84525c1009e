//! Search context for maintaining state during game tree search.

use crate::board::Board;
use crate::disc::Disc;
use crate::eval::Evaluator;
use crate::types::{Depth, Score};

/// The search context that maintains all state during one search.
pub struct SearchContext<'a> {
    /// Number of nodes searched in this context
    pub n_nodes: u64,
    /// Position the search started from
    pub root: Board,
    /// Color the search chooses a move for
    pub mover: Disc,
    /// Configured search depth
    pub depth: Depth,
    /// Whether alpha-beta cutoffs are taken
    pub pruning: bool,
    evaluator: &'a Evaluator,
}

impl<'a> SearchContext<'a> {
    /// Creates a new search context for the given root position.
    ///
    /// # Arguments
    /// * `root` - Position to search from.
    /// * `mover` - Color to move at the root.
    /// * `depth` - Fixed search depth.
    /// * `pruning` - Whether to take alpha-beta cutoffs.
    /// * `evaluator` - Leaf evaluator.
    pub fn new(
        root: &Board,
        mover: Disc,
        depth: Depth,
        pruning: bool,
        evaluator: &'a Evaluator,
    ) -> SearchContext<'a> {
        SearchContext {
            n_nodes: 0,
            root: *root,
            mover,
            depth,
            pruning,
            evaluator,
        }
    }

    #[inline]
    pub fn increment_nodes(&mut self) {
        self.n_nodes += 1;
    }

    /// The color opposing the mover.
    #[inline]
    pub fn opponent(&self) -> Disc {
        self.mover.opposite()
    }

    /// Scores `node` for the mover relative to the root position.
    #[inline]
    pub fn evaluate(&self, node: &Board) -> Score {
        self.evaluator
            .score(&self.root, node, self.depth, self.mover, self.opponent())
    }
}
