//! Othello board representation.

use std::fmt;
use std::iter::FusedIterator;

use arrayvec::ArrayVec;

use crate::constants::BOARD_SQUARES;
use crate::disc::Disc;
use crate::flip::{self, DIRECTIONS};
use crate::move_list::{LegalMoves, SquareIter};
use crate::square::{BOARD_SIZE, Square};

/// Raw 8x8 grid of cells, indexed `[row][col]`.
pub type Grid = [[Disc; BOARD_SIZE]; BOARD_SIZE];

/// Disc totals for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoneCount {
    pub white: u32,
    pub black: u32,
    pub empty: u32,
}

impl StoneCount {
    /// Returns the count for `color` (`Disc::Empty` gives the empty count).
    #[inline]
    pub fn of(&self, color: Disc) -> u32 {
        match color {
            Disc::White => self.white,
            Disc::Black => self.black,
            Disc::Empty => self.empty,
        }
    }

    /// Number of occupied cells.
    #[inline]
    pub fn discs(&self) -> u32 {
        self.white + self.black
    }
}

/// Error type for board mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The legal moves were computed for a different position than the current one.
    StaleMoves,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::StaleMoves => write!(
                f,
                "Stale legal moves: they were computed for a different position"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// An 8x8 Othello board.
///
/// The board is a plain value: copying it yields a fully independent position,
/// which is how the search explores branches without disturbing the parent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Grid,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// - White discs on (3,3) and (4,4)
    /// - Black discs on (3,4) and (4,3)
    fn default() -> Self {
        let mut cells = [[Disc::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Disc::White;
        cells[3][4] = Disc::Black;
        cells[4][3] = Disc::Black;
        cells[4][4] = Disc::White;
        Board { cells }
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no discs at all.
    pub fn empty() -> Board {
        Board::from_cells([[Disc::Empty; BOARD_SIZE]; BOARD_SIZE])
    }

    /// Creates a board from a raw grid.
    pub fn from_cells(cells: Grid) -> Board {
        Board { cells }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// Whitespace is ignored; the first 64 remaining characters fill the board
    /// row by row from (0,0). `'X'` is Black, `'O'` is White and anything else
    /// is empty. Missing trailing cells are left empty.
    pub fn from_string(board_string: &str) -> Board {
        let mut board = Board::empty();
        let chars = board_string.chars().filter(|c| !c.is_whitespace());
        for (sq, c) in Square::iter().zip(chars) {
            board.cells[sq.row()][sq.col()] = Disc::from_char(c);
        }
        board
    }

    /// Returns the raw grid.
    #[inline]
    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Gets the disc at a specific square.
    #[inline]
    pub fn get_disc_at(&self, sq: Square) -> Disc {
        self.cells[sq.row()][sq.col()]
    }

    /// Checks if a given square is empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.get_disc_at(sq) == Disc::Empty
    }

    /// Finds the destinations reachable from one disc of `color`.
    ///
    /// Each of the 8 directions yields a destination when the neighbour holds
    /// the opposite color and the contiguous opposite-color run ends on an empty
    /// cell. Coordinates outside the board yield nothing.
    pub fn legal_destinations_from(
        &self,
        row: isize,
        col: isize,
        color: Disc,
    ) -> ArrayVec<Square, 8> {
        let mut places = ArrayVec::new();
        let Some(sq) = Square::from_coords(row, col) else {
            return places;
        };
        if !color.is_player() {
            return places;
        }

        let other = color.opposite();
        for &(dr, dc) in &DIRECTIONS {
            if let Some(dest) = self.check_direction(sq, dr, dc, other) {
                places.push(dest);
            }
        }
        places
    }

    fn check_direction(&self, sq: Square, dr: isize, dc: isize, other: Disc) -> Option<Square> {
        let mut cur = sq
            .offset(dr, dc)
            .filter(|&next| self.get_disc_at(next) == other)?;
        loop {
            let next = cur.offset(dr, dc)?;
            match self.get_disc_at(next) {
                d if d == other => cur = next,
                Disc::Empty => return Some(next),
                _ => return None,
            }
        }
    }

    fn moves_mask(&self, color: Disc) -> u64 {
        Square::iter()
            .filter(|&sq| self.get_disc_at(sq) == color)
            .flat_map(|sq| self.legal_destinations_from(sq.row() as isize, sq.col() as isize, color))
            .fold(0, |mask, dest| mask | dest.bitboard())
    }

    /// Computes the legal moves for `color`.
    ///
    /// The returned session is the only way to apply a move with
    /// [`Board::apply_move`], and it is tied to the current position.
    pub fn legal_moves(&self, color: Disc) -> LegalMoves {
        LegalMoves::new(self.cells, color, self.moves_mask(color))
    }

    /// Checks if `color` has at least one legal move.
    #[inline]
    pub fn has_legal_moves(&self, color: Disc) -> bool {
        self.moves_mask(color) != 0
    }

    /// Places a disc from `moves` at `sq` and flips the captured discs.
    ///
    /// A square that is not in `moves` leaves the board untouched and returns
    /// `Ok(0)`.
    ///
    /// # Returns
    ///
    /// The number of flipped discs.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StaleMoves`] if `moves` was computed on a
    /// different position.
    pub fn apply_move(&mut self, moves: &LegalMoves, sq: Square) -> Result<u32, BoardError> {
        if !moves.is_fresh_for(&self.cells) {
            return Err(BoardError::StaleMoves);
        }
        if !moves.contains(sq) {
            return Ok(0);
        }
        Ok(self.play(sq, moves.color()))
    }

    /// Places `color` at `sq` and flips every captured ray. The move must be legal.
    fn play(&mut self, sq: Square, color: Disc) -> u32 {
        let flipped = flip::flip(&self.cells, sq, color);
        debug_assert!(flipped != 0, "move {sq} flips nothing");

        self.cells[sq.row()][sq.col()] = color;
        for captured in SquareIter::new(flipped) {
            self.cells[captured.row()][captured.col()] = color;
        }
        flipped.count_ones()
    }

    /// Returns a copy of the board with a legal move played.
    #[inline]
    fn played(&self, sq: Square, color: Disc) -> Board {
        let mut next = *self;
        next.play(sq, color);
        next
    }

    /// Counts white, black and empty cells.
    pub fn count_stones(&self) -> StoneCount {
        let mut count = StoneCount::default();
        for disc in self.cells.iter().flatten() {
            match disc {
                Disc::White => count.white += 1,
                Disc::Black => count.black += 1,
                Disc::Empty => count.empty += 1,
            }
        }
        debug_assert_eq!(count.discs() + count.empty, BOARD_SQUARES as u32);
        count
    }

    /// Checks if the game is over.
    ///
    /// The game ends when a color has been wiped out, when the board is full,
    /// or when neither color has a legal move.
    pub fn game_ended(&self) -> bool {
        let count = self.count_stones();
        if count.white == 0 || count.black == 0 || count.empty == 0 {
            return true;
        }
        !self.has_legal_moves(Disc::Black) && !self.has_legal_moves(Disc::White)
    }

    /// Lazily yields one independent board per legal move of `color`.
    pub fn successor_states(&self, color: Disc) -> Successors {
        Successors {
            board: *self,
            color,
            moves: SquareIter::new(self.moves_mask(color)),
        }
    }

    /// Counts the empty cells touching discs of `color`.
    ///
    /// An empty cell next to two discs of `color` is counted twice.
    pub fn adjacency_count(&self, color: Disc) -> u32 {
        Square::iter()
            .filter(|&sq| self.get_disc_at(sq) == color)
            .flat_map(|sq| DIRECTIONS.into_iter().filter_map(move |(dr, dc)| sq.offset(dr, dc)))
            .filter(|&neighbour| self.is_square_empty(neighbour))
            .count() as u32
    }

    /// Returns a board holding this board's cells wherever they differ from `start`.
    ///
    /// Unchanged cells are empty in the result.
    pub fn delta_from(&self, start: &Board) -> Board {
        let mut delta = Board::empty();
        for sq in Square::iter() {
            let disc = self.get_disc_at(sq);
            if disc != start.get_disc_at(sq) {
                delta.cells[sq.row()][sq.col()] = disc;
            }
        }
        delta
    }

    /// Converts the board to a string representation.
    ///
    /// The output format shows the board as an 8x8 grid with:
    /// - 'X' for Black discs
    /// - 'O' for White discs
    /// - '-' for empty squares
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(BOARD_SQUARES + BOARD_SIZE);
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                s.push('\n');
            }
            s.extend(row.iter().map(|d| d.to_char()));
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_as_board())
    }
}

/// Single-pass iterator over the successors of a position.
///
/// Each item is a full copy of the parent board with one legal move applied.
/// Once exhausted it stays exhausted.
#[derive(Clone, Debug)]
pub struct Successors {
    board: Board,
    color: Disc,
    moves: SquareIter,
}

impl Successors {
    /// The color whose moves generate the successors.
    pub fn color(&self) -> Disc {
        self.color
    }

    /// Pairs each successor with the move that produced it.
    pub fn with_moves(self) -> impl ExactSizeIterator<Item = (Square, Board)> {
        let Successors {
            board,
            color,
            moves,
        } = self;
        moves.map(move |sq| (sq, board.played(sq, color)))
    }
}

impl Iterator for Successors {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let sq = self.moves.next()?;
        Some(self.board.played(sq, self.color))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.moves.size_hint()
    }
}

impl ExactSizeIterator for Successors {}

impl FusedIterator for Successors {}
