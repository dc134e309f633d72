//! Command-line interface for running probe searches over a hazard list

use crate::io::configuration::{
    DEFAULT_INPUT_PATH, DEFAULT_MAX_STEPS, DEFAULT_SEED, DEFAULT_TRIALS,
};
use crate::io::error::Result;
use crate::io::hazards::load_hazards;
use crate::io::progress::TrialProgress;
use crate::io::report::{StrategyReport, write_outcome};
use crate::search::random_walk::TrialEnd;
use crate::search::{
    AStarSearch, BacktrackSearch, RandomWalkConfig, RandomWalkSearch, SearchStrategy,
};
use crate::spatial::{HazardGrid, HazardRecord};
use clap::{Parser, ValueEnum};
use log::info;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Which search strategy to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Seeded random walk over the augmented grid
    Random,
    /// Positive-direction depth-first backtracking
    Backtrack,
    /// A* search with hazard clearing
    Astar,
    /// All three, in that order
    All,
}

impl Strategy {
    /// The concrete strategies this selection runs, in order
    pub fn expand(self) -> Vec<Self> {
        match self {
            Self::All => vec![Self::Random, Self::Backtrack, Self::Astar],
            single => vec![single],
        }
    }
}

#[derive(Parser)]
#[command(name = "probenav")]
#[command(
    author,
    version,
    about = "Navigate a probe through a 100x100x100 hazard grid"
)]
/// Command-line arguments for the probe navigator
pub struct Cli {
    /// Hazard list with one `<B|K|P> <x> <y> <z>` record per line
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Search strategy to run
    #[arg(short, long, value_enum, default_value_t = Strategy::All)]
    pub strategy: Strategy,

    /// Random seed for reproducible random walks
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of random-walk trials
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Step budget of each random-walk trial
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Random-walk settings taken from the arguments
    pub const fn walk_config(&self) -> RandomWalkConfig {
        RandomWalkConfig {
            trials: self.trials,
            max_steps: self.max_steps,
            seed: self.seed,
        }
    }

    /// Default log filter for the requested verbosity
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Loads the hazard list and runs the selected strategies against it
pub struct MissionRunner {
    cli: Cli,
}

impl MissionRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected strategies and write their reports to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the hazard list cannot
    /// be loaded, or writing the report fails
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_into(&mut out)
    }

    /// Run the selected strategies and write their reports to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the hazard list cannot
    /// be loaded, or writing the report fails
    pub fn process_into(&self, out: &mut impl Write) -> Result<()> {
        self.cli.walk_config().validate()?;
        let records = load_hazards(&self.cli.input)?;

        let reports = self.run_strategy(self.cli.strategy, &records)?;

        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            write_outcome(out, report)?;
        }

        out.flush()?;
        Ok(())
    }

    /// Run a strategy selection, each strategy on a freshly built grid
    ///
    /// # Errors
    ///
    /// Propagates errors from the strategies
    pub fn run_strategy(
        &self,
        strategy: Strategy,
        records: &[HazardRecord],
    ) -> Result<Vec<StrategyReport>> {
        match strategy {
            Strategy::Random => Ok(vec![self.run_random_walk(records)?]),
            Strategy::Backtrack => Ok(vec![Self::run_search(
                &mut BacktrackSearch::new(),
                records,
            )?]),
            Strategy::Astar => Ok(vec![Self::run_search(&mut AStarSearch::new(), records)?]),
            Strategy::All => {
                let mut results = Vec::new();
                for single in strategy.expand() {
                    results.extend(self.run_strategy(single, records)?);
                }
                Ok(results)
            }
        }
    }

    fn run_random_walk(&self, records: &[HazardRecord]) -> Result<StrategyReport> {
        let config = self.cli.walk_config();
        let mut search = RandomWalkSearch::new(config);
        let grid = HazardGrid::build(records, search.grid_mode());
        search.check_grid(&grid)?;

        let mut progress = if self.cli.should_show_progress() {
            TrialProgress::new(config.trials)
        } else {
            TrialProgress::hidden(config.trials)
        };

        let start_time = Instant::now();
        while !search.is_finished() {
            let end = search.execute_trial(&grid)?;
            progress.complete_trial(matches!(end, TrialEnd::ReachedPlanet { .. }));
        }
        progress.finish();

        info!(
            "{}: {} of {} trials reached a planet in {:?}",
            search.name(),
            search.successes(),
            search.trials_run(),
            start_time.elapsed()
        );
        Ok(StrategyReport::new(&search, search.outcome()))
    }

    fn run_search(
        strategy: &mut dyn SearchStrategy,
        records: &[HazardRecord],
    ) -> Result<StrategyReport> {
        let mut grid = HazardGrid::build(records, strategy.grid_mode());
        let start_time = Instant::now();
        let outcome = strategy.search(&mut grid)?;
        info!(
            "{}: {} in {:?}",
            strategy.name(),
            if outcome.is_found() { "found a route" } else { "no route" },
            start_time.elapsed()
        );
        Ok(StrategyReport::new(strategy, outcome))
    }
}
