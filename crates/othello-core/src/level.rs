//! Difficulty levels and search depth configuration.

use std::fmt;

use crate::types::Depth;

/// Plies added to the difficulty level to get the search depth.
pub const DEPTH_OFFSET: Depth = 3;

/// Highest selectable difficulty level.
pub const MAX_LEVEL: usize = LEVELS.len() - 1;

/// Represents a difficulty level with its search depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// Fixed minimax depth in plies.
    pub depth: Depth,
}

/// Error returned for a level outside `0..=MAX_LEVEL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelError(pub usize);

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid level: {}. Valid range is 0 to {}",
            self.0, MAX_LEVEL
        )
    }
}

impl std::error::Error for LevelError {}

/// Retrieves the configuration for a specific difficulty level.
///
/// # Arguments
///
/// * `lv` - The level index (0-7), where 0 is the weakest.
///
/// # Errors
///
/// Returns [`LevelError`] if `lv` is outside the valid range.
pub fn get_level(lv: usize) -> Result<Level, LevelError> {
    LEVELS.get(lv).copied().ok_or(LevelError(lv))
}

/// Maps a difficulty level to its search depth (`level + 3`).
///
/// # Errors
///
/// Returns [`LevelError`] if `lv` is outside the valid range.
pub fn search_depth(lv: usize) -> Result<Depth, LevelError> {
    get_level(lv).map(|level| level.depth)
}

const LEVELS: [Level; 8] = [
    Level { depth: DEPTH_OFFSET },
    Level { depth: DEPTH_OFFSET + 1 },
    Level { depth: DEPTH_OFFSET + 2 },
    Level { depth: DEPTH_OFFSET + 3 },
    Level { depth: DEPTH_OFFSET + 4 },
    Level { depth: DEPTH_OFFSET + 5 },
    Level { depth: DEPTH_OFFSET + 6 },
    Level { depth: DEPTH_OFFSET + 7 },
];
