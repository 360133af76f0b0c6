use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod pansn;
mod parsing;
mod utils;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fasta2pansn=debug,info")
    } else {
        EnvFilter::new("fasta2pansn=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Without an input there is nothing to convert; show usage and succeed
    let Some(input) = cli.fasta.clone() else {
        if let Err(e) = cli::Cli::command().print_help() {
            error!("failed to print usage: {e}");
        }
        return ExitCode::SUCCESS;
    };

    match cli::convert::run(&input, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
