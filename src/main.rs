//! CLI entry point for the probe navigator

use clap::Parser;
use probenav::io::cli::{Cli, MissionRunner};

fn main() -> probenav::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let runner = MissionRunner::new(cli);
    runner.process()
}
