//! Universe constants and runtime configuration defaults

/// Cells per axis; valid axis values are `0..GRID_EXTENT`
pub const GRID_EXTENT: u8 = 100;

// Random-walk budget, raise for a better chance of finding a route
/// Default number of random-walk trials
pub const DEFAULT_TRIALS: usize = 100;
/// Default step budget of one random-walk trial
pub const DEFAULT_MAX_STEPS: usize = 50_000;

// Default values for configurable parameters
/// Fixed seed for reproducible random walks
pub const DEFAULT_SEED: u64 = 42;

// Deprioritizes hazards the probe can no longer clear without excluding them
/// f-score given to a hazard once the bomb is spent
pub const HAZARD_SENTINEL_COST: f64 = 100_000.0;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Input settings
/// Tags accepted in hazard lists
pub const HAZARD_TAGS: [&str; 3] = ["B", "K", "P"];
/// Hazard list read when no input path is given
pub const DEFAULT_INPUT_PATH: &str = "input.txt";
