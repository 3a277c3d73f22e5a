//! CLI entry point for the closed-loop track generator

use clap::Parser;
use looptrack::io::cli::{Cli, TrackRunner};

fn main() -> looptrack::Result<()> {
    let cli = Cli::parse();
    let level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    TrackRunner::new(cli).run()
}
