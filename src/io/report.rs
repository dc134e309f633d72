//! Text reporting of search outcomes

use std::io::Write;

use crate::io::error::Result;
use crate::search::{SearchOutcome, SearchStrategy, Trace};

/// Message written when a strategy finds no route
pub const NO_PATH_MESSAGE: &str = "No paths were found.";

/// Message written when every random-walk trial failed
pub const RANDOM_NO_PATH_MESSAGE: &str =
    "No paths found. Give some more tries.\nIf that does not work, try raising --trials.";

/// Outcome of one strategy together with how to report it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyReport {
    /// Heading written above the outcome
    pub name: &'static str,
    /// Line written instead of a trace when no route was found
    pub no_path_message: &'static str,
    /// What the strategy returned
    pub outcome: SearchOutcome,
}

impl StrategyReport {
    /// Capture a strategy's reporting text alongside its outcome
    pub fn new(strategy: &dyn SearchStrategy, outcome: SearchOutcome) -> Self {
        Self {
            name: strategy.name(),
            no_path_message: strategy.no_path_message(),
            outcome,
        }
    }
}

/// Write a found trace: its length line followed by one line per step
///
/// # Errors
///
/// Returns a file system error if the writer fails
pub fn write_trace(out: &mut impl Write, trace: &Trace) -> Result<()> {
    writeln!(out, "The length of trace is {}", trace.len())?;
    for step in trace.steps() {
        writeln!(out, "{step}")?;
    }
    Ok(())
}

/// Write the outcome of one strategy under its name
///
/// # Errors
///
/// Returns a file system error if the writer fails
pub fn write_outcome(out: &mut impl Write, report: &StrategyReport) -> Result<()> {
    writeln!(out, "{}:", report.name)?;
    match &report.outcome {
        SearchOutcome::Found(trace) => write_trace(out, trace),
        SearchOutcome::NoPathFound => {
            writeln!(out, "{}", report.no_path_message)?;
            Ok(())
        }
    }
}
