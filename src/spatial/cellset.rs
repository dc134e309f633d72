use bitvec::prelude::*;
use std::fmt;

use crate::spatial::coordinate::{CELL_COUNT, Coordinate};

/// Fixed-size membership set over every cell of the universe
///
/// Indexed by [`Coordinate::linear_index`]. One bit per cell keeps the
/// visited and closed sets of the searches at 125 KB regardless of how much
/// of the grid they touch.
#[derive(Clone)]
pub struct CellSet {
    bits: BitVec,
}

impl Default for CellSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CellSet {
    /// Create a set with no cells present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; CELL_COUNT],
        }
    }

    /// Insert a cell, returning `true` if it was not already present
    pub fn insert(&mut self, cell: Coordinate) -> bool {
        let was_present = self.contains(cell);
        self.bits.set(cell.linear_index(), true);
        !was_present
    }

    /// Test cell membership
    pub fn contains(&self, cell: Coordinate) -> bool {
        self.bits.get(cell.linear_index()).as_deref() == Some(&true)
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellSet({} cells)", self.count())
    }
}
