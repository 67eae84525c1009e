//! Depth-limited minimax with optional alpha-beta pruning.
//!
//! Scores are always taken from the root mover's point of view: nodes where
//! the mover is to play maximise, the others minimise. A side without a legal
//! move passes, which costs one ply of depth.

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::disc::Disc;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::types::{Depth, Score};

/// Performs the root search.
///
/// Children are visited in generation order and a child only replaces the
/// current best when it scores strictly higher, so ties go to the first move.
/// With pruning enabled each child is searched with the window
/// `(best, +inf)`: a child that cannot beat `best` may return a bound
/// instead of its exact value, which never changes the choice.
///
/// # Returns
///
/// SearchResult containing the best move, the resulting board and the score.
/// A mover without a legal move passes: the result keeps the root board and
/// scores the opponent's reply one ply shallower.
pub fn search_root(ctx: &mut SearchContext) -> SearchResult {
    let root = ctx.root;
    let mover = ctx.mover;
    ctx.increment_nodes();

    let mut best: Option<(Score, _, Board)> = None;
    for (mv, child) in root.successor_states(mover).with_moves() {
        let alpha = match best {
            Some((score, ..)) if ctx.pruning => score,
            _ => -SCORE_INF,
        };
        let score = search(ctx, &child, mover.opposite(), ctx.depth - 1, alpha, SCORE_INF);
        log::trace!("root move {mv}: {score}");

        if best.is_none_or(|(best_score, ..)| score > best_score) {
            best = Some((score, mv, child));
        }
    }

    match best {
        Some((score, mv, board)) => SearchResult {
            score,
            best_move: Some(mv),
            board,
            depth: ctx.depth,
            n_nodes: ctx.n_nodes,
        },
        None => {
            let score = if root.game_ended() {
                ctx.evaluate(&root)
            } else {
                search(ctx, &root, mover.opposite(), ctx.depth - 1, -SCORE_INF, SCORE_INF)
            };
            SearchResult::new_pass(root, score, ctx.depth, ctx.n_nodes)
        }
    }
}

/// Searches `node` with `color` to play.
///
/// # Arguments
///
/// * `ctx` - Search context.
/// * `node` - Current position.
/// * `color` - Side to move at this node.
/// * `depth` - Remaining depth.
/// * `alpha` - Lower bound of the window.
/// * `beta` - Upper bound of the window.
///
/// # Returns
///
/// The minimax value when it lies inside `(alpha, beta)`, otherwise a bound
/// on the far side of the window. Without pruning the value is always exact.
pub fn search(
    ctx: &mut SearchContext,
    node: &Board,
    color: Disc,
    depth: Depth,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    ctx.increment_nodes();

    if depth == 0 || node.game_ended() {
        return ctx.evaluate(node);
    }

    let children = node.successor_states(color);
    if children.len() == 0 {
        return search(ctx, node, color.opposite(), depth - 1, alpha, beta);
    }

    let maximizing = color == ctx.mover;
    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
    for child in children {
        let score = search(ctx, &child, color.opposite(), depth - 1, alpha, beta);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if ctx.pruning && alpha >= beta {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WIPEOUT_SCORE;
    use crate::eval::Evaluator;

    #[test]
    fn test_leaf_is_evaluated_at_depth_zero() {
        let evaluator = Evaluator::new();
        let board = Board::new();
        let mut ctx = SearchContext::new(&board, Disc::Black, 3, true, &evaluator);
        let score = search(&mut ctx, &board, Disc::Black, 0, -SCORE_INF, SCORE_INF);
        assert_eq!(score, 0);
        assert_eq!(ctx.n_nodes, 1);
    }

    #[test]
    fn test_pass_consumes_a_ply() {
        // White has no move; Black does. After the pass Black's reply is a leaf.
        let board = Board::from_string(
            "XO------\
             --------",
        );
        assert!(!board.has_legal_moves(Disc::White));
        assert!(board.has_legal_moves(Disc::Black));

        let evaluator = Evaluator::new();
        let mut ctx = SearchContext::new(&board, Disc::Black, 2, false, &evaluator);
        search(&mut ctx, &board, Disc::White, 2, -SCORE_INF, SCORE_INF);
        // White node, Black node after the pass, one Black child.
        assert_eq!(ctx.n_nodes, 3);
    }

    #[test]
    fn test_root_pass_scores_the_reply() {
        // White must pass; Black's reply c1 leaves White without discs.
        let board = Board::from_string(
            "XO------\
             --------",
        );
        let evaluator = Evaluator::new();
        let mut ctx = SearchContext::new(&board, Disc::White, 2, false, &evaluator);
        let result = search_root(&mut ctx);

        assert!(result.is_pass());
        assert_eq!(result.board, board);
        assert_eq!(result.score, -WIPEOUT_SCORE);
        assert_eq!(result.n_nodes, 3);
    }

    #[test]
    fn test_finished_root_is_evaluated() {
        let board = Board::from_string(
            "XX------\
             --------",
        );
        let evaluator = Evaluator::new();
        let mut ctx = SearchContext::new(&board, Disc::White, 3, true, &evaluator);
        let result = search_root(&mut ctx);

        assert!(result.is_pass());
        assert_eq!(result.score, -WIPEOUT_SCORE);
        assert_eq!(result.n_nodes, 1);
    }
}
