use std::fmt;
use std::str::FromStr;

/// Constants for board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell of the board addressed by 0-indexed row and column.
///
/// Rows run top to bottom and columns left to right. In algebraic notation the
/// column is the file letter and the row is the rank number minus one:
///
/// ```text
///     a  b  c  d  e  f  g  h
/// 1  00 01 02 03 04 05 06 07
/// 2  08 09 10 11 12 13 14 15
/// 3  16 17 18 19 20 21 22 23
/// 4  24 25 26 27 28 29 30 31
/// 5  32 33 34 35 36 37 38 39
/// 6  40 41 42 43 44 45 46 47
/// 7  48 49 50 51 52 53 54 55
/// 8  56 57 58 59 60 61 62 63
/// ```
///
/// A move is simply the square a disc is placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is >= 8.
    pub const fn new(row: usize, col: usize) -> Square {
        assert!(row < BOARD_SIZE, "Invalid row");
        assert!(col < BOARD_SIZE, "Invalid column");
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Creates a square from signed coordinates.
    ///
    /// # Returns
    ///
    /// `None` if the coordinates fall outside the board.
    #[inline]
    pub fn from_coords(row: isize, col: isize) -> Option<Square> {
        let range = 0..BOARD_SIZE as isize;
        if range.contains(&row) && range.contains(&col) {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Creates a square from its row-major index (0-63).
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        if index < TOTAL_SQUARES {
            Some(Square::new(index / BOARD_SIZE, index % BOARD_SIZE))
        } else {
            None
        }
    }

    /// Returns the row (0-7).
    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column (0-7).
    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the row-major index (0-63).
    #[inline]
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Returns a `u64` with the single bit for this square set.
    #[inline]
    pub fn bitboard(self) -> u64 {
        1 << self.index()
    }

    /// Steps one cell in direction `(dr, dc)`.
    ///
    /// # Returns
    ///
    /// `None` when the step leaves the board. Steps never wrap around an edge.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        Square::from_coords(self.row as isize + dr, self.col as isize + dc)
    }

    /// Returns `true` for the four corner squares.
    #[inline]
    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == 7) && (self.col == 0 || self.col == 7)
    }

    /// Returns an iterator over all 64 squares in row-major order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(|i| Square::new(i / BOARD_SIZE, i % BOARD_SIZE))
    }
}

/// Error type for square-related operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    InvalidRank(char),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidFormat => write!(
                f,
                "Invalid square format: must be 2 characters (e.g., 'd3')"
            ),
            SquareError::InvalidFile(c) => write!(f, "Invalid file '{c}': must be a-h or A-H"),
            SquareError::InvalidRank(c) => write!(f, "Invalid rank '{c}': must be 1-8"),
        }
    }
}

impl std::error::Error for SquareError {}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"` (column d, row 2).
    ///
    /// Both uppercase and lowercase letters are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::InvalidFormat);
        };

        let file_char = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file_char) {
            return Err(SquareError::InvalidFile(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(SquareError::InvalidRank(rank));
        }

        let col = (file_char as u8 - b'a') as usize;
        let row = (rank as u8 - b'1') as usize;
        Ok(Square::new(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.col + b'a') as char;
        let rank = (self.row + b'1') as char;
        write!(f, "{file}{rank}")
    }
}
