//! Command-line front end for queuesim.
//!
//! `main.rs` parses [`Args`] and hands them to [`run_cli`]; everything else
//! lives here so it can be tested without spawning a process.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, DEFAULT_VERIFY_RUNS};
pub use commands::{analyze_report, run_cli, simulate_report, verify_reproducibility};
pub use output::{
    format_analysis, format_simulation, format_verify_result, print_help, print_version,
    version_string, AnalysisReport, SimulationReport,
};
