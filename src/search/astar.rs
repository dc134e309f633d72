//! Heuristic best-first search with a single hazard-clearing bomb
//!
//! Six-connected movement with unit step cost, guided by the Euclidean
//! distance to the chosen planet. The first hazard met while the probe still
//! holds its bomb is destroyed and becomes an ordinary cell. Hazards met after
//! that are not excluded: they enter the open set with a large fixed f-score,
//! so they are only expanded when nothing cheaper remains.

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::agent::Probe;
use crate::io::configuration::HAZARD_SENTINEL_COST;
use crate::io::error::Result;
use crate::search::SearchStrategy;
use crate::search::trace::{SearchOutcome, Trace, TraceStep};
use crate::spatial::{BuildMode, CellSet, Coordinate, Direction, HazardGrid};

/// Open-set entry ordered for a min-heap on f-score
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f_score: f64,
    g_score: u32,
    cell: Coordinate,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: lowest f first, then lexicographically smallest cell
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Estimated remaining cost from `cell` to `goal`
///
/// Euclidean distance never exceeds the 6-connected step count, so the
/// estimate is admissible.
pub fn heuristic(cell: Coordinate, goal: Coordinate) -> f64 {
    cell.euclidean_distance(goal)
}

/// Planet closest to the origin by coordinate sum, ties to the smallest coordinate
pub fn select_goal(grid: &HazardGrid) -> Option<Coordinate> {
    grid.planets().min_by_key(|&planet| (planet.axis_sum(), planet))
}

/// A* search state for one run
#[derive(Debug)]
pub struct AStarSearch {
    probe: Probe,
    closed: CellSet,
    g_scores: HashMap<Coordinate, u32>,
    parents: HashMap<Coordinate, Coordinate>,
    goal: Option<Coordinate>,
    detonation: Option<Coordinate>,
    expanded: usize,
}

impl Default for AStarSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl AStarSearch {
    /// Search with a fresh probe holding its bomb
    pub fn new() -> Self {
        Self::with_probe(Probe::new())
    }

    /// Search on behalf of an existing probe
    pub fn with_probe(probe: Probe) -> Self {
        Self {
            probe,
            closed: CellSet::new(),
            g_scores: HashMap::new(),
            parents: HashMap::new(),
            goal: None,
            detonation: None,
            expanded: 0,
        }
    }

    /// The probe whose bomb the search spends
    pub const fn probe(&self) -> &Probe {
        &self.probe
    }

    /// Planet targeted by the last run
    pub const fn goal(&self) -> Option<Coordinate> {
        self.goal
    }

    /// Hazard cleared by the bomb during the last run
    pub const fn detonation(&self) -> Option<Coordinate> {
        self.detonation
    }

    /// Cells moved to the closed set during the last run
    pub const fn expanded(&self) -> usize {
        self.expanded
    }

    /// Best known cost from the origin to `cell`
    pub fn cost_to(&self, cell: Coordinate) -> Option<u32> {
        self.g_scores.get(&cell).copied()
    }

    /// Run the search, clearing at most one hazard from `grid`
    pub fn run(&mut self, grid: &mut HazardGrid) -> SearchOutcome {
        self.closed = CellSet::new();
        self.g_scores.clear();
        self.parents.clear();
        self.detonation = None;
        self.expanded = 0;

        self.goal = select_goal(grid);
        let Some(goal) = self.goal else {
            debug!("A*: grid holds no planet");
            return SearchOutcome::NoPathFound;
        };
        debug!("A*: targeting planet at {goal}");

        let start = Coordinate::ORIGIN;
        let mut open = BinaryHeap::new();
        open.push(OpenEntry {
            f_score: heuristic(start, goal),
            g_score: 0,
            cell: start,
        });
        self.g_scores.insert(start, 0);

        while let Some(entry) = open.pop() {
            if self.closed.contains(entry.cell)
                || self
                    .cost_to(entry.cell)
                    .is_some_and(|best| best < entry.g_score)
            {
                continue;
            }

            if entry.cell == goal {
                debug!("A*: reached goal after expanding {} cells", self.expanded);
                return SearchOutcome::Found(self.reconstruct(goal));
            }

            self.closed.insert(entry.cell);
            self.expanded += 1;
            trace!("A*: expanding {} (f = {:.3})", entry.cell, entry.f_score);

            for neighbour in HazardGrid::neighbors(entry.cell, &Direction::ALL) {
                if self.closed.contains(neighbour) {
                    continue;
                }

                let tentative = entry.g_score + 1;
                if self.cost_to(neighbour).is_some_and(|best| tentative >= best) {
                    continue;
                }

                self.parents.insert(neighbour, entry.cell);
                self.g_scores.insert(neighbour, tentative);

                let f_score = self.score(grid, neighbour, tentative, goal);
                open.push(OpenEntry {
                    f_score,
                    g_score: tentative,
                    cell: neighbour,
                });
            }
        }

        debug!("A*: open set exhausted after {} cells", self.expanded);
        SearchOutcome::NoPathFound
    }

    fn score(
        &mut self,
        grid: &mut HazardGrid,
        cell: Coordinate,
        g_score: u32,
        goal: Coordinate,
    ) -> f64 {
        let standard = f64::from(g_score) + heuristic(cell, goal);

        match grid.occupant(cell) {
            Some(kind) if kind.is_hazard() => {
                if self.probe.spend_bomb() {
                    grid.clear(cell);
                    self.detonation = Some(cell);
                    debug!("A*: bomb cleared {kind} at {cell}");
                    standard
                } else {
                    HAZARD_SENTINEL_COST
                }
            }
            _ => standard,
        }
    }

    fn reconstruct(&self, goal: Coordinate) -> Trace {
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(&parent) = self.parents.get(&current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();

        let mut steps = Vec::with_capacity(path.len() + 1);
        for cell in path {
            if self.detonation == Some(cell) {
                steps.push(TraceStep::Bomb(cell));
            }
            steps.push(TraceStep::Move(cell));
        }
        Trace::new(steps)
    }
}

impl SearchStrategy for AStarSearch {
    fn name(&self) -> &'static str {
        "A-star search"
    }

    fn grid_mode(&self) -> BuildMode {
        BuildMode::Plain
    }

    fn search(&mut self, grid: &mut HazardGrid) -> Result<SearchOutcome> {
        self.check_grid(grid)?;
        Ok(self.run(grid))
    }
}
