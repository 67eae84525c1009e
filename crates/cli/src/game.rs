//! Terminal rendering of a game in progress.
//!
//! This module wraps the core `GameState` and adds colored terminal output,
//! including win probabilities from the evaluator.

use colored::Colorize;
use othello_core::disc::Disc;
use othello_core::eval::Evaluator;
use othello_core::game_state::{self, GameError};
use othello_core::search::search_result::SearchResult;
use othello_core::square::{BOARD_SIZE, Square};

/// A game with CLI-specific display functionality.
pub struct GameState {
    /// Core game state with history and undo support
    core: game_state::GameState,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position.
    pub fn new() -> Self {
        Self {
            core: game_state::GameState::new(),
        }
    }

    pub fn core(&self) -> &game_state::GameState {
        &self.core
    }

    /// Plays `sq` for the side to move, reporting an automatic pass.
    pub fn make_move(&mut self, sq: Square) -> Result<(), GameError> {
        let mover = self.core.side_to_move();
        self.core.make_move(sq)?;
        self.announce_pass(mover);
        Ok(())
    }

    /// Plays the move chosen by a search.
    pub fn apply_search_result(&mut self, result: &SearchResult) -> Result<(), GameError> {
        let mover = self.core.side_to_move();
        self.core.apply_search_result(result)?;
        self.announce_pass(mover);
        Ok(())
    }

    fn announce_pass(&self, mover: Disc) {
        let passed = self.core.move_history().last().and_then(|&(sq, _, side)| match sq {
            None if side != mover => Some(side),
            _ => None,
        });
        if let Some(side) = passed {
            println!("{side} has no legal move and passes.\n");
        }
    }

    /// Undoes the last move, stepping back over an automatic pass as well.
    pub fn undo(&mut self) -> bool {
        let after_pass = self
            .core
            .move_history()
            .last()
            .is_some_and(|(sq, _, _)| sq.is_none());
        if !self.core.undo() {
            return false;
        }
        if after_pass {
            self.core.undo();
        }
        true
    }

    /// Prints a colored representation of the board to the terminal.
    pub fn print(&self, evaluator: &Evaluator) {
        let snapshot = self.core.snapshot(evaluator);
        let legal = self.core.legal_moves();
        let last_move = self.core.last_move();
        let game_over = self.core.is_game_over();

        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for (y, row) in snapshot.cells.iter().enumerate() {
            print!("  {} │", y + 1);

            for (x, &disc) in row.iter().enumerate() {
                let sq = Square::new(y, x);
                let is_legal = !game_over && legal.contains(sq);
                let is_last_move = Some(sq) == last_move;

                let symbol = match disc {
                    Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                    Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Disc::Black => " X ".bright_green(),
                    Disc::White => " O ".bright_yellow(),
                    Disc::Empty if is_legal => " · ".bright_cyan(),
                    Disc::Empty => "   ".black(),
                };
                print!("{symbol}│");
            }

            match y {
                1 if !game_over => {
                    let player_info = match snapshot.side_to_move {
                        Disc::White => "White's turn (O)".bright_yellow(),
                        _ => "Black's turn (X)".bright_green(),
                    };
                    println!("   {player_info}");
                }
                2 => println!(
                    "   Black: {}  win {}",
                    format!("{:2}", snapshot.black_count).bright_green(),
                    format!("{:4.1}%", snapshot.black_win * 100.0).bright_green()
                ),
                3 => println!(
                    "   White: {}  win {}",
                    format!("{:2}", snapshot.white_count).bright_yellow(),
                    format!("{:4.1}%", snapshot.white_win * 100.0).bright_yellow()
                ),
                5 if game_over => match self.core.winner() {
                    Some(Disc::White) => println!("   {}", "White wins!".bright_yellow()),
                    Some(_) => println!("   {}", "Black wins!".bright_green()),
                    None => println!("   {}", "Draw".bright_cyan()),
                },
                6 if game_over => println!("   {}", "*** Game Over ***".bright_red()),
                _ => println!(),
            }

            if y < BOARD_SIZE - 1 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}
