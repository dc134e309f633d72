//! Search strategies over the hazard grid
//!
//! Three strategies share the grid and the result types:
//! - a seeded random walk on the augmented grid
//! - a positive-direction depth-first backtracking search
//! - an A* search that may spend the probe's bomb on one hazard

use crate::io::error::{Result, invalid_parameter};
use crate::io::report::NO_PATH_MESSAGE;
use crate::spatial::{BuildMode, HazardGrid};

/// Heuristic best-first search with hazard clearing
pub mod astar;
/// Restricted depth-first backtracking
pub mod backtrack;
/// Repeated unguided random trials
pub mod random_walk;
/// Trace and outcome types shared by all strategies
pub mod trace;

pub use astar::AStarSearch;
pub use backtrack::BacktrackSearch;
pub use random_walk::{RandomWalkConfig, RandomWalkSearch};
pub use trace::{SearchOutcome, Trace, TraceStep};

/// A strategy that searches a grid for a route from the origin to a planet
pub trait SearchStrategy {
    /// Human-readable strategy name used in reports
    fn name(&self) -> &'static str;

    /// Grid build mode the strategy expects
    fn grid_mode(&self) -> BuildMode;

    /// Report line used when no route was found
    fn no_path_message(&self) -> &'static str {
        NO_PATH_MESSAGE
    }

    /// Reject a grid built in a mode this strategy cannot read
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming both modes
    fn check_grid(&self, grid: &HazardGrid) -> Result<()> {
        if grid.mode() == self.grid_mode() {
            Ok(())
        } else {
            Err(invalid_parameter(
                "grid mode",
                &format!("{:?}", grid.mode()),
                &format!("{} needs a {:?} grid", self.name(), self.grid_mode()),
            ))
        }
    }

    /// Run the strategy to completion
    ///
    /// # Errors
    ///
    /// Returns an error if the grid was built in the wrong mode, or for
    /// internal faults such as an out-of-bounds step; an unreachable planet
    /// is reported as
    /// [`SearchOutcome::NoPathFound`]
    fn search(&mut self, grid: &mut HazardGrid) -> Result<SearchOutcome>;
}
