//! CLI output formatting.
//!
//! Text reports are built as strings so they can be tested; the `print_*`
//! functions only write them to stdout.

use std::fmt::Write as _;

use serde::Serialize;

use crate::analytical::AnalyticalResult;
use crate::config::ScenarioConfig;
use crate::model::QueueModel;
use crate::simulation::{round_to, SimulationResult};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// JSON document for `analyze --json`.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    /// Scenario name.
    pub scenario: &'a str,
    /// Evaluated model.
    pub model: &'a QueueModel,
    /// Kendall notation.
    pub notation: &'static str,
    /// Analytical metrics at full precision.
    pub result: &'a AnalyticalResult,
}

/// JSON document for `simulate --json`.
#[derive(Debug, Serialize)]
pub struct SimulationReport<'a> {
    /// Scenario name.
    pub scenario: &'a str,
    /// Simulated model.
    pub model: &'a QueueModel,
    /// Seed the run used.
    pub seed: u64,
    /// Simulation output at full precision.
    pub result: &'a SimulationResult,
}

/// Print version information.
pub fn print_version() {
    println!("{}", version_string());
}

/// Version line with build metadata.
#[must_use]
pub fn version_string() -> String {
    format!(
        "queuesim {} ({})",
        env!("QUEUESIM_VERSION"),
        env!("QUEUESIM_GIT_HASH")
    )
}

/// Print help message.
pub fn print_help() {
    println!(
        r"queuesim - analytical queueing models and discrete-event queue simulation

USAGE:
    queuesim <COMMAND> [OPTIONS]

COMMANDS:
    analyze <scenario.yaml>     Evaluate the closed-form model
        --json                  Print JSON

    simulate <scenario.yaml>    Run a seeded simulation
        --seed <N>              Override the scenario seed
        --json                  Print JSON
        -v, --verbose           Enable debug logging

    verify <scenario.yaml>      Check seeded runs are identical
        --runs <N>              Number of runs (default: 3)

    help                        Show this help message
    version                     Show version information

MODELS:
    mm1, mmc, mg1, mgc          analyze and simulate
    gg1, ggc                    analyze only

EXAMPLES:
    queuesim analyze scenarios/bank.yaml
    queuesim simulate scenarios/bank.yaml --seed 12345 --json
    queuesim verify scenarios/bank.yaml --runs 5

Set RUST_LOG (e.g. RUST_LOG=queuesim=trace) to control logging.
"
    );
}

fn header(out: &mut String, title: &str, config: &ScenarioConfig) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{title}");
    if !config.scenario.name.is_empty() {
        let _ = writeln!(out, "Scenario: {}", config.scenario.name);
    }
    if !config.scenario.description.is_empty() {
        let _ = writeln!(out, "          {}", config.scenario.description);
    }
    let _ = writeln!(out, "Model:    {}", config.model);
    let _ = writeln!(out, "{RULE}\n");
}

/// Text report of an analytical result.
#[must_use]
pub fn format_analysis(config: &ScenarioConfig, result: &AnalyticalResult) -> String {
    let p = config.report.precision as usize;
    let mut out = String::new();
    header(&mut out, "Analytical Model", config);

    let _ = writeln!(out, "  Utilization (ρ):        {:.p$}", result.utilization);
    match result.steady_state {
        Some(s) => {
            let _ = writeln!(out, "  Avg in queue (Lq):      {:.p$}", s.avg_number_in_queue);
            let _ = writeln!(out, "  Avg wait in queue (Wq): {:.p$}", s.avg_wait_in_queue);
            let _ = writeln!(out, "  Avg time in system (Ws):{:.p$}", s.avg_wait_in_system);
            let _ = writeln!(out, "  Avg in system (Ls):     {:.p$}", s.avg_number_in_system);
        }
        None => {
            let _ = writeln!(out, "\n✗ System is unstable (ρ >= 1): queue grows without bound");
        }
    }
    out
}

/// Text report of a simulation run.
#[must_use]
pub fn format_simulation(config: &ScenarioConfig, result: &SimulationResult, seed: u64) -> String {
    let precision = config.report.precision;
    let p = precision as usize;
    let mut out = String::new();
    header(&mut out, "Simulation", config);

    let _ = writeln!(out, "  Seed:      {seed}");
    let _ = writeln!(out, "  Customers: {}\n", result.len());

    if config.report.show_customers {
        let _ = writeln!(
            out,
            "  {:>5} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "#", "server", "interarr", "arrival", "service", "start", "end", "wait", "turnaround"
        );
        for r in result.customers.iter().map(|r| r.rounded(precision)) {
            let _ = writeln!(
                out,
                "  {:>5} {:>6} {:>10.p$} {:>10.p$} {:>10.p$} {:>10.p$} {:>10.p$} {:>10.p$} {:>10.p$}",
                r.index,
                r.server_id,
                r.interarrival_time,
                r.arrival_time,
                r.service_time,
                r.start_time,
                r.end_time,
                r.waiting_time,
                r.turnaround_time,
            );
        }
        let _ = writeln!(out);
    }

    let s = result.summary.rounded(precision);
    let _ = writeln!(out, "Summary:");
    let _ = writeln!(out, "  Utilization:            {:.p$}", s.utilization);
    let _ = writeln!(out, "  Avg interarrival time:  {:.p$}", s.avg_interarrival_time);
    let _ = writeln!(out, "  Avg service time:       {:.p$}", s.avg_service_time);
    let _ = writeln!(out, "  Avg turnaround time:    {:.p$}", s.avg_turnaround_time);
    let _ = writeln!(out, "  Avg waiting time:       {:.p$}", s.avg_waiting_time);
    let _ = writeln!(out, "  Avg response time:      {:.p$}", s.avg_response_time);
    let _ = writeln!(out, "  P(wait > 0.01):         {:.p$}", s.probability_of_waiting);

    if let Some(last) = result.cumulative_probabilities.last() {
        let _ = writeln!(
            out,
            "  Poisson cutoff:         P(X <= {}) = {:.7}",
            result.cumulative_probabilities.len() - 1,
            round_to(*last, 7)
        );
    }
    out
}

/// Text line for the outcome of a reproducibility check.
#[must_use]
pub fn format_verify_result(runs: usize, identical: bool) -> String {
    let (sym, status) = if identical {
        ("✓", "PASSED")
    } else {
        ("✗", "FAILED")
    };
    format!("{RULE}\n{sym} Reproducibility over {runs} runs: {status}\n{RULE}")
}
