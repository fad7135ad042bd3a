//! queuesim CLI
//!
//! Command-line interface for analytical queue models and simulation.

use std::process::ExitCode;

use queuesim::cli::{run_cli, Args};
use queuesim::logging::init_logging_with_level;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging_with_level(if args.verbose() { "debug" } else { "warn" });
    run_cli(args)
}
