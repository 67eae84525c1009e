//! Disc flip calculation for move execution.

use crate::board::Grid;
use crate::disc::Disc;
use crate::square::Square;

/// The 8 compass and diagonal directions as `(row, col)` steps, clockwise from north.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Calculates which opponent discs would be flipped by `color` placing a disc at `sq`.
///
/// # Returns
///
/// A bitboard of the flipped discs, one bit per [`Square::bitboard`].
/// Returns 0 if no discs would be flipped.
#[inline]
pub fn flip(cells: &Grid, sq: Square, color: Disc) -> u64 {
    DIRECTIONS
        .iter()
        .fold(0, |acc, &(dr, dc)| acc | flip_ray(cells, sq, color, dr, dc))
}

/// Flipped discs along a single ray.
///
/// Walks from `sq` over contiguous opponent discs. The walk only counts if it
/// ends on a disc of `color`; ending on an empty cell or the edge flips nothing.
#[inline]
pub fn flip_ray(cells: &Grid, sq: Square, color: Disc, dr: isize, dc: isize) -> u64 {
    debug_assert!(color.is_player());
    let opponent = color.opposite();

    let mut flipped = 0;
    let mut cursor = sq.offset(dr, dc);
    while let Some(cur) = cursor {
        match cells[cur.row()][cur.col()] {
            d if d == opponent => flipped |= cur.bitboard(),
            d if d == color => return flipped,
            _ => return 0,
        }
        cursor = cur.offset(dr, dc);
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_flip() {
        let board = Board::new();
        let cells = board.cells();
        let d4 = Square::new(3, 3).bitboard();
        let e5 = Square::new(4, 4).bitboard();
        assert_eq!(flip(cells, Square::new(2, 3), Disc::Black), d4);
        assert_eq!(flip(cells, Square::new(3, 2), Disc::Black), d4);
        assert_eq!(flip(cells, Square::new(4, 5), Disc::Black), e5);
        assert_eq!(flip(cells, Square::new(5, 4), Disc::Black), e5);
        assert_eq!(flip(cells, Square::new(0, 0), Disc::Black), 0);
    }

    #[test]
    fn test_flip_ray_requires_terminator() {
        // Row 0 is - O O X and row 7 is X O O -.
        let board = Board::from_string(
            "-OOX----\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             XOO-----",
        );
        let cells = board.cells();
        assert_eq!(flip_ray(cells, Square::new(0, 0), Disc::Black, 0, 1), {
            Square::new(0, 1).bitboard() | Square::new(0, 2).bitboard()
        });
        assert_eq!(flip_ray(cells, Square::new(7, 3), Disc::Black, 0, -1), {
            Square::new(7, 1).bitboard() | Square::new(7, 2).bitboard()
        });
        // An own disc right next to the move flips nothing.
        assert_eq!(flip_ray(cells, Square::new(7, 3), Disc::White, 0, -1), 0);
        // Run ending on an empty cell.
        assert_eq!(flip_ray(cells, Square::new(0, 3), Disc::Black, 0, -1), 0);
    }

    #[test]
    fn test_flip_long_diagonal() {
        let board = Board::from_string(
            "--------\
             -O------\
             --O-----\
             ---O----\
             ----O---\
             -----O--\
             ------X-\
             --------",
        );
        let flipped = flip(board.cells(), Square::new(0, 0), Disc::Black);
        assert_eq!(flipped.count_ones(), 5);
        assert_ne!(flipped & Square::new(5, 5).bitboard(), 0);
    }
}
