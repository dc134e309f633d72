//! Spatial data structures for the bounded universe
//!
//! This module contains spatial-related functionality including:
//! - Bounded coordinates and axis directions
//! - The sparse hazard grid and its two build modes
//! - Dense cell-membership sets for search bookkeeping

/// Dense per-cell membership set
pub mod cellset;
/// Bounded cell coordinates and unit directions
pub mod coordinate;
/// Sparse hazard grid and tile records
pub mod grid;

pub use cellset::CellSet;
pub use coordinate::{Coordinate, Direction};
pub use grid::{BuildMode, HazardGrid, HazardRecord, Tile, TileKind};
