//! Game state management for Othello.
//!
//! This module provides the `GameState` struct which maintains the current
//! game position and handles core game logic such as making moves, automatic
//! passing when no legal moves are available, and game termination detection.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, BoardError, Grid};
use crate::disc::Disc;
use crate::eval::Evaluator;
use crate::move_list::LegalMoves;
use crate::search::search_result::SearchResult;
use crate::square::Square;
use crate::types::Probability;

/// Who controls one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Computer => write!(f, "computer"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    /// Parses `human`/`h` or `computer`/`c`/`cpu`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "h" => Ok(PlayerKind::Human),
            "computer" | "c" | "cpu" => Ok(PlayerKind::Computer),
            other => Err(format!("Unknown player kind '{other}': use human or computer")),
        }
    }
}

/// Error type for turn-controller misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The square is not a legal move for the side to move.
    IllegalMove(Square),
    /// A pass was requested while a legal move exists.
    CannotPass,
    /// The game has already ended.
    GameOver,
    /// The board rejected the move.
    Board(BoardError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove(sq) => write!(f, "Illegal move: {sq}"),
            GameError::CannotPass => write!(f, "Cannot pass when legal moves are available"),
            GameError::GameOver => write!(f, "The game is over"),
            GameError::Board(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(e: BoardError) -> Self {
        GameError::Board(e)
    }
}

/// Everything a front end needs to draw the position.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub cells: Grid,
    pub black_count: u32,
    pub white_count: u32,
    pub side_to_move: Disc,
    pub black_win: Probability,
    pub white_win: Probability,
}

/// Represents the state of an Othello game.
///
/// This is a core game state manager that handles move execution,
/// automatic passing, move history tracking, and undo functionality.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Disc,
    /// Move history: (move, board_before_move, side_to_move_before).
    /// None for move indicates a pass.
    history: Vec<(Option<Square>, Board, Disc)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Disc::Black)
    }

    /// Creates a new game state from an existing board position.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which player moves next
    pub fn from_board(board: Board, side_to_move: Disc) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Returns the legal moves of the side to move.
    pub fn legal_moves(&self) -> LegalMoves {
        self.board.legal_moves(self.side_to_move)
    }

    /// Executes a move and updates the game state.
    ///
    /// When the opponent has no legal move afterwards and the game is not
    /// over, the opponent passes automatically.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to place a disc on
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the game has ended and
    /// [`GameError::IllegalMove`] if `sq` is not legal for the side to move.
    pub fn make_move(&mut self, sq: Square) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let moves = self.legal_moves();
        if !moves.contains(sq) {
            return Err(GameError::IllegalMove(sq));
        }

        let before = self.board;
        let flipped = self.board.apply_move(&moves, sq)?;
        self.history.push((Some(sq), before, self.side_to_move));
        log::info!("{} plays {sq}, flipping {flipped}", self.side_to_move);

        self.side_to_move = self.side_to_move.opposite();

        if !self.is_game_over() && !self.board.has_legal_moves(self.side_to_move) {
            self.handle_pass();
        }
        Ok(())
    }

    /// Executes a pass move (switching players without placing a disc).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotPass`] if the side to move has a legal move.
    pub fn make_pass(&mut self) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.board.has_legal_moves(self.side_to_move) {
            return Err(GameError::CannotPass);
        }
        self.handle_pass();
        Ok(())
    }

    /// Plays the move chosen by a search, or passes if it found none.
    pub fn apply_search_result(&mut self, result: &SearchResult) -> Result<(), GameError> {
        match result.best_move {
            Some(sq) => self.make_move(sq),
            None => self.make_pass(),
        }
    }

    fn handle_pass(&mut self) {
        log::info!("{} has no legal move and passes", self.side_to_move);
        self.history.push((None, self.board, self.side_to_move));
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Checks if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.board.game_ended()
    }

    /// Returns the disc count as `(black_count, white_count)`.
    pub fn get_score(&self) -> (u32, u32) {
        let count = self.board.count_stones();
        (count.black, count.white)
    }

    /// Returns the color with more discs, or `None` on a draw.
    pub fn winner(&self) -> Option<Disc> {
        let (black, white) = self.get_score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns the last move played.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if a regular move was played, `None` if the last move was a pass
    /// or if no moves have been played yet
    pub fn last_move(&self) -> Option<Square> {
        self.history.last().and_then(|(sq, _, _)| *sq)
    }

    /// Returns the move history as (move, board_before_move, side_to_move_before).
    pub fn move_history(&self) -> &[(Option<Square>, Board, Disc)] {
        &self.history
    }

    /// Undoes the last history entry, a move or a pass.
    ///
    /// # Returns
    ///
    /// `true` if an entry was undone, `false` if the history is empty
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((_, prev_board, prev_side)) => {
                self.board = prev_board;
                self.side_to_move = prev_side;
                true
            }
            None => false,
        }
    }

    /// Captures the position for display, with win probabilities from `evaluator`.
    pub fn snapshot(&self, evaluator: &Evaluator) -> Snapshot {
        let (black_count, white_count) = self.get_score();
        let (black_win, white_win) =
            evaluator.win_probability(&self.board, Disc::Black, Disc::White);
        Snapshot {
            cells: *self.board.cells(),
            black_count,
            white_count,
            side_to_move: self.side_to_move,
            black_win,
            white_win,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Disc::Black);
        assert!(!game.is_game_over());
        assert_eq!(game.get_score(), (2, 2));
        assert_eq!(game.legal_moves().count(), 4);
    }

    #[test]
    fn test_make_move() {
        let mut game = GameState::new();
        assert_eq!(game.make_move(sq("d3")), Ok(()));
        assert_eq!(game.side_to_move(), Disc::White);
    }

    #[test]
    fn test_illegal_move() {
        let mut game = GameState::new();
        assert_eq!(
            game.make_move(sq("a1")),
            Err(GameError::IllegalMove(sq("a1")))
        );
        assert_eq!(*game.board(), Board::new());
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_cannot_pass_with_moves() {
        let mut game = GameState::new();
        assert_eq!(game.make_pass(), Err(GameError::CannotPass));
    }

    #[test]
    fn test_auto_pass() {
        // After Black takes c1, White still has discs but no move.
        let board = Board::from_string(
            "XO------\
             --------\
             --------\
             --------\
             --------\
             --------\
             ------OX\
             --------",
        );
        let mut game = GameState::from_board(board, Disc::Black);
        game.make_move(sq("c1")).unwrap();

        assert!(!game.board().has_legal_moves(Disc::White));
        assert!(!game.is_game_over());
        assert_eq!(game.side_to_move(), Disc::Black);
        assert_eq!(game.move_history().len(), 2);
        assert_eq!(game.last_move(), None);

        // Undo walks back over the pass and then the move.
        assert!(game.undo());
        assert_eq!(game.side_to_move(), Disc::White);
        assert!(game.undo());
        assert_eq!(*game.board(), board);
    }

    #[test]
    fn test_game_over() {
        let mut game = GameState::new();

        while !game.is_game_over() {
            let first_move = game.legal_moves().iter().next();
            match first_move {
                Some(mv) => game.make_move(mv).unwrap(),
                None => game.make_pass().unwrap(),
            }
        }

        assert!(game.is_game_over());
        assert_eq!(game.make_move(sq("a1")), Err(GameError::GameOver));
        assert_eq!(game.make_pass(), Err(GameError::GameOver));
    }

    #[test]
    fn test_apply_search_result() {
        let mut game = GameState::new();
        let result = SearchResult {
            score: 0,
            best_move: Some(sq("f5")),
            board: Board::new(),
            depth: 1,
            n_nodes: 1,
        };
        game.apply_search_result(&result).unwrap();
        assert_eq!(game.last_move(), Some(sq("f5")));

        let pass = SearchResult::new_pass(*game.board(), 0, 1, 1);
        assert_eq!(game.apply_search_result(&pass), Err(GameError::CannotPass));
    }

    #[test]
    fn test_undo_multiple() {
        let mut game = GameState::new();

        game.make_move(sq("d3")).unwrap();
        game.make_move(sq("c3")).unwrap();
        game.make_move(sq("c4")).unwrap();

        assert!(game.undo());
        assert!(game.undo());
        assert!(game.undo());
        assert!(!game.undo());

        assert_eq!(game.side_to_move(), Disc::Black);
        assert_eq!(game.get_score(), (2, 2));
    }

    #[test]
    fn test_history_complete_record() {
        let mut game = GameState::new();

        game.make_move(sq("d3")).unwrap();
        game.make_move(sq("c3")).unwrap();
        game.make_move(sq("c4")).unwrap();

        let history = game.move_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].0, Some(sq("d3")));
        assert_eq!(history[0].1, Board::new());
        assert_eq!(history[0].2, Disc::Black);
        assert_eq!(history[1].0, Some(sq("c3")));
        assert_eq!(history[1].2, Disc::White);
        assert_eq!(history[2].0, Some(sq("c4")));
        assert_eq!(history[2].2, Disc::Black);
    }

    #[test]
    fn test_winner() {
        let black_ahead = GameState::from_board(Board::from_string("XXO"), Disc::White);
        assert_eq!(black_ahead.winner(), Some(Disc::Black));
        let white_ahead = GameState::from_board(Board::from_string("OOX"), Disc::Black);
        assert_eq!(white_ahead.winner(), Some(Disc::White));
        assert_eq!(GameState::new().winner(), None);
    }

    #[test]
    fn test_snapshot() {
        let mut game = GameState::new();
        game.make_move(sq("d3")).unwrap();
        let snapshot = game.snapshot(&Evaluator::new());

        assert_eq!(snapshot.cells, *game.board().cells());
        assert_eq!((snapshot.black_count, snapshot.white_count), (4, 1));
        assert_eq!(snapshot.side_to_move, Disc::White);
        assert!((snapshot.black_win + snapshot.white_win - 1.0).abs() < 1e-12);
        assert!(snapshot.black_win > snapshot.white_win);
    }

    #[test]
    fn test_player_kind() {
        assert_eq!("human".parse::<PlayerKind>(), Ok(PlayerKind::Human));
        assert_eq!("CPU".parse::<PlayerKind>(), Ok(PlayerKind::Computer));
        assert_eq!("c".parse::<PlayerKind>(), Ok(PlayerKind::Computer));
        assert!("robot".parse::<PlayerKind>().is_err());
        assert_eq!(PlayerKind::Computer.to_string(), "computer");
    }

    #[test]
    fn test_game_record_black_57_white_7() {
        let mut game = GameState::new();

        let moves_str = "e6f4c3c4d3d6e3d2f3f5c1c2b4b3a3e2c5c6f6g5g4a2a1a4f2h5g3f7h6h3f8f1e1d1h4h7a5g7h8g6g1g8b6e8b5g2d8b7a6h2e7d7c8a8a7b8c7h1b2b1";

        let moves: Vec<Square> = moves_str
            .as_bytes()
            .chunks(2)
            .map(|chunk| std::str::from_utf8(chunk).unwrap().parse().unwrap())
            .collect();

        for (i, &mv) in moves.iter().enumerate() {
            game.make_move(mv).unwrap_or_else(|e| {
                panic!("Failed to make move #{} ({}): {}", i + 1, mv, e);
            });
        }

        assert!(game.is_game_over(), "Game should be over after all moves");
        assert_eq!(game.get_score(), (57, 7));
        assert_eq!(game.winner(), Some(Disc::Black));

        let played: Vec<Square> = game
            .move_history()
            .iter()
            .filter_map(|(sq, _, _)| *sq)
            .collect();
        assert_eq!(played, moves);
        assert_eq!(game.last_move(), Some(sq("b1")));
    }
}
