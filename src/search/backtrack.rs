//! Depth-first backtracking restricted to the positive axis directions
//!
//! Only +x, +y and +z are expanded, so every path found is monotone and has
//! exactly `x + y + z + 1` cells. The search returns the first planet reached
//! in stack order, not necessarily the nearest one, and can miss planets that
//! are only reachable through a negative-direction detour.

use log::{debug, trace};
use std::collections::HashMap;

use crate::io::error::Result;
use crate::search::SearchStrategy;
use crate::search::trace::{SearchOutcome, Trace};
use crate::spatial::{BuildMode, CellSet, Coordinate, Direction, HazardGrid, TileKind};

/// Restricted depth-first search over a plain grid
#[derive(Debug, Default)]
pub struct BacktrackSearch {
    visited: CellSet,
    parents: HashMap<Coordinate, Coordinate>,
}

impl BacktrackSearch {
    /// Create a search with empty bookkeeping
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells popped and marked during the last run
    pub const fn visited(&self) -> &CellSet {
        &self.visited
    }

    /// Run the traversal from the origin
    pub fn run(&mut self, grid: &HazardGrid) -> SearchOutcome {
        self.visited = CellSet::new();
        self.parents.clear();

        if grid.planets().next().is_none() {
            debug!("backtracking: grid holds no planet");
            return SearchOutcome::NoPathFound;
        }

        match self.find_target(grid) {
            Some(target) => SearchOutcome::Found(self.reconstruct(target)),
            None => {
                debug!(
                    "backtracking: exhausted {} cells without a planet",
                    self.visited.count()
                );
                SearchOutcome::NoPathFound
            }
        }
    }

    fn find_target(&mut self, grid: &HazardGrid) -> Option<Coordinate> {
        let mut stack = vec![Coordinate::ORIGIN];

        while let Some(cell) = stack.pop() {
            if !self.visited.insert(cell) {
                continue;
            }

            match grid.occupant(cell) {
                Some(TileKind::Planet) => {
                    debug!("backtracking: reached planet at {cell}");
                    return Some(cell);
                }
                Some(kind) => {
                    trace!("backtracking: dead end {kind} at {cell}");
                }
                None => {
                    for next in HazardGrid::neighbors(cell, &Direction::POSITIVE) {
                        if !self.visited.contains(next) {
                            self.parents.insert(next, cell);
                            stack.push(next);
                        }
                    }
                }
            }
        }

        None
    }

    fn reconstruct(&self, target: Coordinate) -> Trace {
        let mut path = vec![target];
        let mut current = target;

        while current != Coordinate::ORIGIN {
            let Some(&parent) = self.parents.get(&current) else {
                break;
            };
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Trace::from_path(path)
    }
}

impl SearchStrategy for BacktrackSearch {
    fn name(&self) -> &'static str {
        "Backtracking search"
    }

    fn grid_mode(&self) -> BuildMode {
        BuildMode::Plain
    }

    fn search(&mut self, grid: &mut HazardGrid) -> Result<SearchOutcome> {
        self.check_grid(grid)?;
        Ok(self.run(grid))
    }
}
