//! Probe navigation through a sparse three-dimensional hazard grid
//!
//! A probe starts at the origin of a 100×100×100 universe scattered with
//! black holes, creatures and planets, and looks for a route to a planet.
//! The grid stores only occupied cells. Three strategies search it: a seeded
//! random walk, a positive-direction backtracking search, and an A* search
//! that may spend the probe's single bomb on one hazard.

#![forbid(unsafe_code)]

/// The navigating probe and its state transitions
pub mod agent;
/// Input/output operations, configuration and error handling
pub mod io;
/// Random-walk, backtracking and A* search strategies
pub mod search;
/// Coordinates, the sparse hazard grid and cell sets
pub mod spatial;

pub use io::error::{NavigationError, Result};
