use clap::Parser;

/// `vargsetup` takes no flags or subcommands; invoking it runs the whole
/// setup flow against the current directory. The derive still provides
/// `--help` and `--version`.
#[derive(Parser)]
#[command(
    name = "vargsetup",
    version,
    about = "One-shot project setup for Varg AI video generation"
)]
pub struct Cli {}
