use crate::board::Board;
use crate::disc::Disc;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Disc::Black, depth)
}

/// Counts the leaves `depth` plies below `board` with `color` to move.
///
/// A pass does not consume depth, and a position where neither side can move
/// counts as a single leaf.
pub fn perft(board: &Board, color: Disc, depth: u32) -> u64 {
    let successors = board.successor_states(color);
    if successors.len() == 0 {
        return if board.has_legal_moves(color.opposite()) {
            perft(board, color.opposite(), depth)
        } else {
            1
        };
    }

    if depth <= 1 {
        return successors.len() as u64;
    }
    successors
        .map(|next| perft(&next, color.opposite(), depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_shallow() {
        assert_eq!(perft_root(1), 4);
        assert_eq!(perft_root(2), 12);
        assert_eq!(perft_root(3), 56);
    }

    #[test]
    fn test_perft_terminal_position() {
        let full = Board::from_string(&"XO".repeat(32));
        assert_eq!(perft(&full, Disc::Black, 3), 1);
    }

    #[test]
    fn test_perft_pass() {
        // White must pass; Black then has a single move.
        let board = Board::from_string(
            "XO------\
             --------",
        );
        assert_eq!(perft(&board, Disc::White, 1), 1);
    }
}
