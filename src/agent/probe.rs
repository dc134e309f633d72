//! The navigating probe: position, single-use bomb and route history

use log::debug;

use crate::io::error::{NavigationError, Result};
use crate::search::trace::{Trace, TraceStep};
use crate::spatial::{Coordinate, Direction, HazardGrid, TileKind};

/// Mutable state of one search attempt
///
/// The route is append-only and doubles as the step counter of a trial.
#[derive(Clone, Debug)]
pub struct Probe {
    position: Coordinate,
    has_bomb: bool,
    route: Vec<TraceStep>,
}

impl Default for Probe {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe {
    /// A probe at the origin holding its bomb
    pub const fn new() -> Self {
        Self {
            position: Coordinate::ORIGIN,
            has_bomb: true,
            route: Vec::new(),
        }
    }

    /// Current cell
    pub const fn position(&self) -> Coordinate {
        self.position
    }

    /// Whether the bomb is still available
    pub const fn has_bomb(&self) -> bool {
        self.has_bomb
    }

    /// Steps taken so far
    pub fn route(&self) -> &[TraceStep] {
        &self.route
    }

    /// Directions that keep the probe inside the grid, in [`Direction::ALL`] order
    pub fn legal_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.position.step(direction).is_some())
            .collect()
    }

    /// Move one unit step and record the new position
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::OutOfBounds`] if the step would leave the
    /// grid; the probe is left unchanged.
    pub fn advance(&mut self, direction: Direction) -> Result<Coordinate> {
        let next = self.target(direction)?;
        self.position = next;
        self.route.push(TraceStep::Move(next));
        Ok(next)
    }

    /// Spend the bomb on the adjacent cell in `direction`
    ///
    /// The target cell is marked [`TileKind::Bomb`] and a bomb event is added
    /// to the route. Without a bomb this does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::OutOfBounds`] if the target cell lies
    /// outside the grid.
    pub fn detonate(&mut self, grid: &mut HazardGrid, direction: Direction) -> Result<()> {
        if !self.has_bomb {
            return Ok(());
        }

        let target = self.target(direction)?;
        grid.mark(target, TileKind::Bomb);
        self.has_bomb = false;
        self.route.push(TraceStep::Bomb(target));
        debug!("probe at {} detonated toward {direction} on {target}", self.position);
        Ok(())
    }

    /// Consume the bomb without touching any grid, returning whether it was available
    pub const fn spend_bomb(&mut self) -> bool {
        let had_bomb = self.has_bomb;
        self.has_bomb = false;
        had_bomb
    }

    /// Finish the attempt and hand over its route
    pub fn into_trace(self) -> Trace {
        Trace::new(self.route)
    }

    fn target(&self, direction: Direction) -> Result<Coordinate> {
        self.position
            .step(direction)
            .ok_or(NavigationError::OutOfBounds {
                position: self.position,
                direction,
            })
    }
}
