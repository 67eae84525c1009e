//! Search configuration.

use crate::eval::EvalConfig;
use crate::level::DEPTH_OFFSET;
use crate::types::Depth;

/// Options used to construct a [`Search`](crate::search::Search).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fixed search depth in plies (at least 1).
    pub depth: Depth,
    /// Enables alpha-beta pruning. The result is identical either way.
    pub pruning: bool,
    /// Evaluator configuration used at the leaves.
    pub eval: EvalConfig,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth: DEPTH_OFFSET,
            pruning: true,
            eval: EvalConfig::default(),
        }
    }
}

impl SearchOptions {
    /// Creates options for a fixed depth; depths below 1 are raised to 1.
    pub fn new(depth: Depth) -> Self {
        SearchOptions {
            depth: depth.max(1),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    #[must_use]
    pub fn with_eval_config(mut self, eval: EvalConfig) -> Self {
        self.eval = eval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::DeltaMode;

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.depth, 3);
        assert!(options.pruning);
        assert_eq!(options.eval.delta_mode, DeltaMode::Cellwise);
    }

    #[test]
    fn test_builder() {
        let options = SearchOptions::new(0)
            .with_pruning(false)
            .with_eval_config(EvalConfig::default().with_delta_mode(DeltaMode::Reference));
        assert_eq!(options.depth, 1);
        assert!(!options.pruning);
        assert_eq!(options.eval.delta_mode, DeltaMode::Reference);
    }
}
