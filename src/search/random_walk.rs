//! Unguided randomized search over the augmented grid
//!
//! Each trial releases a fresh probe at the origin and lets it wander in
//! uniformly random legal directions until it enters a black hole, a
//! creature or a planet, or runs out of steps. The walk may well never reach
//! a planet; that is an expected outcome rather than a failure.

use log::{debug, info, trace};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::agent::Probe;
use crate::io::configuration::{DEFAULT_MAX_STEPS, DEFAULT_SEED, DEFAULT_TRIALS};
use crate::io::error::{Result, invalid_parameter};
use crate::io::report::RANDOM_NO_PATH_MESSAGE;
use crate::search::SearchStrategy;
use crate::search::trace::{SearchOutcome, Trace};
use crate::spatial::{BuildMode, HazardGrid, Tile, TileKind};

/// Budget and seed of a random-walk run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomWalkConfig {
    /// Number of independent trials
    pub trials: usize,
    /// Step budget of a single trial
    pub max_steps: usize,
    /// Seed for the shared random generator
    pub seed: u64,
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_steps: DEFAULT_MAX_STEPS,
            seed: DEFAULT_SEED,
        }
    }
}

impl RandomWalkConfig {
    /// Reject budgets that could never produce a route
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `trials` or `max_steps` is zero
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(invalid_parameter("trials", &self.trials, &"must be at least 1"));
        }
        if self.max_steps == 0 {
            return Err(invalid_parameter(
                "max_steps",
                &self.max_steps,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// How a single trial ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrialEnd {
    /// The probe landed on a planet after this many route entries
    ReachedPlanet {
        /// Raw route length, bomb event included
        route_len: usize,
    },
    /// The probe entered a hazard
    Destroyed(TileKind),
    /// The step budget ran out
    Exhausted,
}

/// Repeated random-walk trials with a reproducible generator
pub struct RandomWalkSearch {
    config: RandomWalkConfig,
    rng: StdRng,
    trials_run: usize,
    successes: usize,
    /// Successful routes keyed by raw route length; a later route of equal length replaces an earlier one
    routes: BTreeMap<usize, Trace>,
}

impl RandomWalkSearch {
    /// Create a search seeded from the configuration
    pub fn new(config: RandomWalkConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
            trials_run: 0,
            successes: 0,
            routes: BTreeMap::new(),
        }
    }

    /// Configuration in use
    pub const fn config(&self) -> &RandomWalkConfig {
        &self.config
    }

    /// Trials completed so far
    pub const fn trials_run(&self) -> usize {
        self.trials_run
    }

    /// Trials that reached a planet
    pub const fn successes(&self) -> usize {
        self.successes
    }

    /// Whether the trial budget is spent
    pub const fn is_finished(&self) -> bool {
        self.trials_run >= self.config.trials
    }

    /// Run one trial on its own view of the grid
    ///
    /// The grid is only copied if the probe detonates, so trials never see
    /// each other's bomb marks.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error if the probe is steered off the grid,
    /// which legal-direction filtering rules out
    pub fn execute_trial(&mut self, grid: &HazardGrid) -> Result<TrialEnd> {
        let mut field = Cow::Borrowed(grid);
        let mut probe = Probe::new();
        let mut end = TrialEnd::Exhausted;

        for _ in 0..self.config.max_steps {
            let legal = probe.legal_directions();
            let Some(&direction) = legal.choose(&mut self.rng) else {
                break;
            };

            let threat_nearby = field
                .lookup(probe.position())
                .is_some_and(Tile::has_detection);

            if probe.has_bomb() && threat_nearby {
                probe.detonate(field.to_mut(), direction)?;
            } else {
                probe.advance(direction)?;
            }

            if let Some(kind) = field
                .occupant(probe.position())
                .filter(|kind| kind.is_terminal())
            {
                end = if kind == TileKind::Planet {
                    TrialEnd::ReachedPlanet {
                        route_len: probe.route().len(),
                    }
                } else {
                    TrialEnd::Destroyed(kind)
                };
                break;
            }
        }

        trace!("trial {} ended: {end:?}", self.trials_run);
        self.trials_run += 1;

        if let TrialEnd::ReachedPlanet { route_len } = end {
            self.successes += 1;
            self.routes.insert(route_len, probe.into_trace());
        }

        Ok(end)
    }

    /// Run every remaining trial and report the shortest successful route
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::execute_trial`]
    pub fn run(&mut self, grid: &HazardGrid) -> Result<SearchOutcome> {
        while !self.is_finished() {
            self.execute_trial(grid)?;
        }
        info!(
            "random walk: {} of {} trials reached a planet",
            self.successes, self.trials_run
        );
        Ok(self.outcome())
    }

    /// Shortest successful route so far
    pub fn outcome(&self) -> SearchOutcome {
        self.routes
            .first_key_value()
            .map_or(SearchOutcome::NoPathFound, |(route_len, trace)| {
                debug!("shortest random route has {route_len} entries");
                SearchOutcome::Found(trace.clone())
            })
    }
}

impl SearchStrategy for RandomWalkSearch {
    fn name(&self) -> &'static str {
        "Random search"
    }

    fn grid_mode(&self) -> BuildMode {
        BuildMode::Augmented
    }

    fn no_path_message(&self) -> &'static str {
        RANDOM_NO_PATH_MESSAGE
    }

    fn search(&mut self, grid: &mut HazardGrid) -> Result<SearchOutcome> {
        self.check_grid(grid)?;
        self.run(grid)
    }
}
