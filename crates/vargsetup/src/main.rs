mod cli;
mod commands;
mod envfile;
mod example;
mod gitignore;
mod report;
mod scaffold;

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vargsetup=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _cli = cli::Cli::parse();

    // Single top-level handler: a failed step prints one error line and
    // exits 1. Completed side effects stay in place.
    let mut input = std::io::stdin().lock();
    if let Err(err) = commands::setup(Path::new("."), &mut input) {
        report::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
