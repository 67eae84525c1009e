//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Evaluation score from the point of view of the side being evaluated.
pub type Score = i32;

/// Win probability in `[0.0, 1.0]`.
pub type Probability = f64;
