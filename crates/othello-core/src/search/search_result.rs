//! Search result types.

use crate::board::Board;
use crate::square::Square;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value from the mover's perspective.
    pub score: Score,
    /// Chosen move, or `None` when the mover had to pass.
    pub best_move: Option<Square>,
    /// Position after the chosen move (the input position on a pass).
    pub board: Board,
    /// Depth the search was configured with.
    pub depth: Depth,
    /// Total nodes visited, the root included.
    pub n_nodes: u64,
}

impl SearchResult {
    /// Creates a result for a root position with no legal move.
    pub fn new_pass(board: Board, score: Score, depth: Depth, n_nodes: u64) -> Self {
        Self {
            score,
            best_move: None,
            board,
            depth,
            n_nodes,
        }
    }

    /// Returns `true` if the search chose to pass.
    pub fn is_pass(&self) -> bool {
        self.best_move.is_none()
    }
}
