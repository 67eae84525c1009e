//! Game tree search engine.

mod minimax;
pub mod options;
pub mod search_context;
pub mod search_result;

use crate::board::Board;
use crate::disc::Disc;
use crate::eval::Evaluator;
use crate::search::options::SearchOptions;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::types::Depth;

/// Main search engine structure.
///
/// Holds configuration only, so one engine can serve both colors.
#[derive(Clone, Debug)]
pub struct Search {
    evaluator: Evaluator,
    depth: Depth,
    pruning: bool,
}

impl Search {
    /// Creates a new search engine with the given options.
    pub fn new(options: &SearchOptions) -> Search {
        Search {
            evaluator: Evaluator::with_config(options.eval),
            depth: options.depth.max(1),
            pruning: options.pruning,
        }
    }

    /// Returns the configured depth.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Changes the search depth; depths below 1 are raised to 1.
    pub fn set_depth(&mut self, depth: Depth) {
        self.depth = depth.max(1);
    }

    /// Returns the evaluator used at the leaves.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Runs a search on the given board position.
    ///
    /// # Arguments
    ///
    /// * `board` - Position to search.
    /// * `color` - Side to move.
    ///
    /// # Returns
    ///
    /// The best move for `color` with its score and resulting board. When
    /// `color` has no legal move the result is a pass on the unchanged board.
    pub fn run(&self, board: &Board, color: Disc) -> SearchResult {
        let mut ctx = SearchContext::new(board, color, self.depth, self.pruning, &self.evaluator);
        let result = minimax::search_root(&mut ctx);

        match result.best_move {
            Some(mv) => log::debug!(
                "{color} depth {}: best {mv} score {} nodes {}",
                result.depth,
                result.score,
                result.n_nodes
            ),
            None => log::debug!("{color} depth {}: no legal move, passing", result.depth),
        }
        result
    }
}
