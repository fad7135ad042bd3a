//! CLI command handlers.
//!
//! Each handler returns an [`ExitCode`]; the fallible work lives in
//! `QueueResult`-returning helpers so errors are reported in one place.

use std::path::Path;
use std::process::ExitCode;

use tracing::info;

use crate::analytical::run_analytical;
use crate::config::ScenarioConfig;
use crate::engine::SimRng;
use crate::error::QueueResult;
use crate::simulation::{run_simulation, SimulationResult};

use super::output::{
    format_analysis, format_simulation, format_verify_result, print_help, print_version,
    AnalysisReport, SimulationReport,
};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    let outcome = match args.command {
        Command::Analyze {
            scenario_path,
            json,
        } => analyze(&scenario_path, json),
        Command::Simulate {
            scenario_path,
            seed_override,
            json,
            verbose: _,
        } => simulate(&scenario_path, seed_override, json),
        Command::Verify {
            scenario_path,
            runs,
        } => verify(&scenario_path, runs),
        Command::Help => {
            print_help();
            Ok(true)
        }
        Command::Version => {
            print_version();
            Ok(true)
        }
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Render the analytical report for a scenario file.
///
/// # Errors
///
/// Returns error if the scenario cannot be loaded or the model is invalid.
pub fn analyze_report(path: &Path, json: bool) -> QueueResult<String> {
    let config = ScenarioConfig::load(path)?;
    let result = run_analytical(&config.model)?;

    if json {
        let report = AnalysisReport {
            scenario: &config.scenario.name,
            model: &config.model,
            notation: config.model.notation(),
            result: &result,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(format_analysis(&config, &result))
    }
}

fn analyze(path: &Path, json: bool) -> QueueResult<bool> {
    println!("{}", analyze_report(path, json)?);
    Ok(true)
}

/// Render the simulation report for a scenario file.
///
/// # Errors
///
/// Returns error if the scenario cannot be loaded, the model is invalid or
/// the model cannot be simulated.
pub fn simulate_report(path: &Path, seed_override: Option<u64>, json: bool) -> QueueResult<String> {
    let config = ScenarioConfig::load(path)?;
    let seed = seed_override.unwrap_or_else(|| config.seed());
    let result = run_simulation(&config.model, &mut SimRng::new(seed))?;

    if json {
        let report = SimulationReport {
            scenario: &config.scenario.name,
            model: &config.model,
            seed,
            result: &result,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(format_simulation(&config, &result, seed))
    }
}

fn simulate(path: &Path, seed_override: Option<u64>, json: bool) -> QueueResult<bool> {
    println!("{}", simulate_report(path, seed_override, json)?);
    Ok(true)
}

/// Run the scenario's seeded simulation `runs` times and compare results.
///
/// Returns whether every run matched the first.
///
/// # Errors
///
/// Returns error if the scenario cannot be loaded or simulated.
pub fn verify_reproducibility(path: &Path, runs: usize) -> QueueResult<bool> {
    let config = ScenarioConfig::load(path)?;
    let seed = config.seed();

    let results = (0..runs.max(1))
        .map(|_| run_simulation(&config.model, &mut SimRng::new(seed)))
        .collect::<QueueResult<Vec<SimulationResult>>>()?;

    let identical = results.windows(2).all(|w| w[0] == w[1]);
    info!(runs, seed, identical, "reproducibility check");
    Ok(identical)
}

fn verify(path: &Path, runs: usize) -> QueueResult<bool> {
    println!("Verifying reproducibility: {}", path.display());
    let identical = verify_reproducibility(path, runs)?;
    println!("{}", format_verify_result(runs, identical));
    Ok(identical)
}
