//! Othello rules, positional evaluation and depth-bounded minimax search.

pub mod board;
pub mod constants;
pub mod disc;
pub mod eval;
mod flip;
pub mod game_state;
pub mod level;
pub mod move_list;
pub mod perft;
pub mod search;
pub mod square;
pub mod types;
