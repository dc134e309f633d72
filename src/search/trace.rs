//! Search results shared by every strategy

use std::fmt;

use crate::spatial::Coordinate;

/// One entry of a probe's route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceStep {
    /// The probe entered this cell
    Move(Coordinate),
    /// The probe detonated its bomb on this cell
    Bomb(Coordinate),
}

impl TraceStep {
    /// Cell this step refers to
    pub const fn coordinate(self) -> Coordinate {
        match self {
            Self::Move(cell) | Self::Bomb(cell) => cell,
        }
    }

    /// Whether this step changed the probe's position
    pub const fn is_move(self) -> bool {
        matches!(self, Self::Move(_))
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(cell) => write!(f, "{cell}"),
            Self::Bomb(cell) => write!(f, "M {cell}"),
        }
    }
}

/// Ordered route of a finished search attempt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Wrap an ordered list of steps
    pub const fn new(steps: Vec<TraceStep>) -> Self {
        Self { steps }
    }

    /// A trace made only of moves through the given cells
    pub fn from_path(path: impl IntoIterator<Item = Coordinate>) -> Self {
        Self::new(path.into_iter().map(TraceStep::Move).collect())
    }

    /// Every recorded step, bomb events included
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Reported trace length: positional entries only
    pub fn len(&self) -> usize {
        self.steps.iter().filter(|step| step.is_move()).count()
    }

    /// Whether the trace holds no positional entry
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells visited, in order, bomb events skipped
    pub fn positions(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.steps
            .iter()
            .filter(|step| step.is_move())
            .map(|step| step.coordinate())
    }

    /// Cell the bomb was spent on, if any
    pub fn detonation(&self) -> Option<Coordinate> {
        self.steps.iter().find_map(|step| match step {
            TraceStep::Bomb(cell) => Some(*cell),
            TraceStep::Move(_) => None,
        })
    }

    /// Last cell reached
    pub fn destination(&self) -> Option<Coordinate> {
        self.positions().last()
    }
}

/// Result of running one strategy to completion
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A route to a planet
    Found(Trace),
    /// The strategy exhausted its budget without reaching a planet
    NoPathFound,
}

impl SearchOutcome {
    /// The route, if one was found
    pub const fn trace(&self) -> Option<&Trace> {
        match self {
            Self::Found(trace) => Some(trace),
            Self::NoPathFound => None,
        }
    }

    /// Whether a route was found
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
