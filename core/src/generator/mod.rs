use crate::*;
pub use random::*;

mod random;

/// Source of fresh targets, one per round.
pub trait TargetGenerator {
    /// Must return exactly `difficulty.for_grid(grid)` distinct cells.
    fn generate(&mut self, grid: GridConfig, difficulty: Difficulty) -> TargetSet;
}
