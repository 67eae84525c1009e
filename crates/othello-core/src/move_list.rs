//! Legal move sets.
//!
//! A [`LegalMoves`] value is the result of a legal-move query on a board. It
//! remembers the grid and color it was computed for, so a move can only be
//! applied through the session that proved it legal.

use std::iter::FusedIterator;

use crate::board::Grid;
use crate::disc::Disc;
use crate::square::Square;

/// Legal destinations for one color on one specific position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegalMoves {
    color: Disc,
    mask: u64,
    position: Grid,
}

impl LegalMoves {
    pub(crate) fn new(position: Grid, color: Disc, mask: u64) -> LegalMoves {
        LegalMoves {
            color,
            mask,
            position,
        }
    }

    /// The color these moves were generated for.
    #[inline]
    pub fn color(&self) -> Disc {
        self.color
    }

    /// Number of distinct legal destinations.
    #[inline]
    pub fn count(&self) -> usize {
        self.mask.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Checks whether `sq` is one of the legal destinations.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.mask & sq.bitboard() != 0
    }

    /// Iterates over the destinations in row-major order.
    ///
    /// Callers must not rely on the order for anything but determinism.
    #[inline]
    pub fn iter(&self) -> SquareIter {
        SquareIter::new(self.mask)
    }

    /// Returns `true` if this session was computed on `cells`.
    #[inline]
    pub(crate) fn is_fresh_for(&self, cells: &Grid) -> bool {
        self.position == *cells
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = Square;
    type IntoIter = SquareIter;

    fn into_iter(self) -> SquareIter {
        self.iter()
    }
}

/// Iterator over the set bits of a square mask.
#[derive(Clone, Debug)]
pub struct SquareIter {
    mask: u64,
}

impl SquareIter {
    #[inline]
    pub fn new(mask: u64) -> SquareIter {
        SquareIter { mask }
    }
}

impl Iterator for SquareIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.mask == 0 {
            return None;
        }
        let index = self.mask.trailing_zeros() as usize;
        self.mask &= self.mask - 1;
        Square::from_index(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.mask.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareIter {}

impl FusedIterator for SquareIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_square_iter() {
        let mask = Square::new(0, 0).bitboard() | Square::new(2, 3).bitboard() | 1 << 63;
        let squares: Vec<Square> = SquareIter::new(mask).collect();
        assert_eq!(
            squares,
            vec![Square::new(0, 0), Square::new(2, 3), Square::new(7, 7)]
        );
        assert_eq!(SquareIter::new(mask).len(), 3);
        assert_eq!(SquareIter::new(0).next(), None);
    }

    #[test]
    fn test_legal_moves_accessors() {
        let board = Board::new();
        let moves = board.legal_moves(Disc::Black);
        assert_eq!(moves.color(), Disc::Black);
        assert_eq!(moves.count(), 4);
        assert!(!moves.is_empty());
        assert!(moves.contains(Square::new(2, 3)));
        assert!(!moves.contains(Square::new(0, 0)));
        assert_eq!((&moves).into_iter().count(), 4);
        assert!(moves.is_fresh_for(board.cells()));
    }
}
