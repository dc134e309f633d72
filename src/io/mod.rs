//! Driver plumbing around the search core: input, output and configuration

/// Command-line arguments and strategy orchestration
pub mod cli;
/// Universe constants and runtime defaults
pub mod configuration;
/// Error taxonomy and context helpers
pub mod error;
/// Hazard list parsing and loading
pub mod hazards;
/// Progress display for random-walk trials
pub mod progress;
/// Text reports of search outcomes
pub mod report;
