//! Discrete-event simulation of Poisson-arrival queues.
//!
//! A run goes through four stages:
//!
//! 1. size the run from the Poisson cutoff table of `λ`
//! 2. generate arrival times ([`arrival`])
//! 3. generate service times ([`service`])
//! 4. assign customers to servers in arrival order ([`scheduler`])
//!
//! and is summarized by [`metrics`]. All randomness comes from the caller's
//! [`RandomSource`], so a seeded source gives an identical
//! [`SimulationResult`].
//!
//! ```rust
//! use queuesim::engine::SimRng;
//! use queuesim::model::QueueModel;
//! use queuesim::simulation::run_simulation;
//!
//! let model = QueueModel::Mm1 { arrival_rate: 1.0, service_rate: 2.0 };
//! let a = run_simulation(&model, &mut SimRng::new(42)).unwrap();
//! let b = run_simulation(&model, &mut SimRng::new(42)).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod arrival;
pub mod metrics;
pub mod scheduler;
pub mod service;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::rng::RandomSource;
use crate::error::{QueueError, QueueResult};
use crate::model::QueueModel;

pub use arrival::{poisson_cutoff_table, round_to, ArrivalStream, POISSON_CUTOFF};
pub use metrics::{SimulationSummary, WAIT_THRESHOLD};
pub use scheduler::{
    Assignment, MultiServerScheduler, Scheduler, ServerState, SingleServerScheduler,
};
pub use service::service_times;

/// Negative values this close to zero are floating-point noise.
const NOISE: f64 = 1e-9;

/// Fold tiny negatives and negative zero to `0.0`.
fn clamp_noise(value: f64) -> f64 {
    if value <= 0.0 && value > -NOISE {
        0.0
    } else {
        value
    }
}

/// One simulated customer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// 0-based position in arrival order.
    pub index: usize,
    /// Gap since the previous arrival.
    pub interarrival_time: f64,
    /// Arrival time.
    pub arrival_time: f64,
    /// Service duration.
    pub service_time: f64,
    /// Server that handled the customer.
    pub server_id: u32,
    /// Service start.
    pub start_time: f64,
    /// Service end.
    pub end_time: f64,
    /// `end − arrival`.
    pub turnaround_time: f64,
    /// `turnaround − service`.
    pub waiting_time: f64,
    /// `start − arrival`.
    pub response_time: f64,
}

impl CustomerRecord {
    /// Build a record from its arrival and its server assignment.
    #[must_use]
    pub fn new(
        index: usize,
        interarrival_time: f64,
        arrival_time: f64,
        service_time: f64,
        assignment: Assignment,
    ) -> Self {
        let turnaround_time = assignment.end_time - arrival_time;
        Self {
            index,
            interarrival_time,
            arrival_time,
            service_time,
            server_id: assignment.server_id,
            start_time: assignment.start_time,
            end_time: assignment.end_time,
            turnaround_time,
            waiting_time: clamp_noise(turnaround_time - service_time),
            response_time: clamp_noise(assignment.start_time - arrival_time),
        }
    }

    /// Display copy with every time rounded to `precision` decimals.
    #[must_use]
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            interarrival_time: round_to(self.interarrival_time, precision),
            arrival_time: round_to(self.arrival_time, precision),
            service_time: round_to(self.service_time, precision),
            start_time: round_to(self.start_time, precision),
            end_time: round_to(self.end_time, precision),
            turnaround_time: round_to(self.turnaround_time, precision),
            waiting_time: round_to(self.waiting_time, precision),
            response_time: round_to(self.response_time, precision),
            ..*self
        }
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Customers in arrival order.
    pub customers: Vec<CustomerRecord>,
    /// Cumulative Poisson table used to size the run, 7 decimals.
    pub cumulative_probabilities: Vec<f64>,
    /// Aggregate metrics at full precision.
    pub summary: SimulationSummary,
}

impl SimulationResult {
    /// Number of customers simulated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether no customers were simulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

/// Simulate one run of a Poisson-arrival model.
///
/// The customer count is the length of the Poisson cutoff table for `λ`.
///
/// # Errors
///
/// - [`QueueError::Domain`] if the model parameters are invalid.
/// - [`QueueError::UnsupportedSimulation`] for G/G/1 and G/G/c.
pub fn run_simulation<R: RandomSource + ?Sized>(
    model: &QueueModel,
    rng: &mut R,
) -> QueueResult<SimulationResult> {
    model.validate()?;
    if !model.has_poisson_arrivals() {
        return Err(QueueError::UnsupportedSimulation {
            model: model.notation().to_string(),
        });
    }

    let arrival_rate = model.arrival_rate();
    let service = model.service_distribution();
    let servers = model.servers();

    let table = poisson_cutoff_table(arrival_rate)?;
    let count = table.len();
    debug!(%model, customers = count, "simulation sized");

    let arrivals = ArrivalStream::poisson(arrival_rate, count, rng)?;
    let services = service_times(&service, count, rng);

    let mut scheduler: Box<dyn Scheduler> = if servers == 1 {
        Box::new(SingleServerScheduler::new())
    } else {
        Box::new(MultiServerScheduler::new(servers))
    };

    let customers: Vec<CustomerRecord> = arrivals
        .interarrival_times
        .iter()
        .zip(&arrivals.arrival_times)
        .zip(&services)
        .enumerate()
        .map(|(index, ((&gap, &arrival), &service_time))| {
            let assignment = scheduler.assign(arrival, service_time);
            CustomerRecord::new(index, gap, arrival, service_time, assignment)
        })
        .collect();

    let summary =
        SimulationSummary::from_records(&customers, arrival_rate, model.service_rate(), servers);
    info!(
        model = model.notation(),
        customers = customers.len(),
        utilization = summary.utilization,
        avg_waiting_time = summary.avg_waiting_time,
        "simulation complete"
    );

    Ok(SimulationResult {
        customers,
        cumulative_probabilities: table
            .iter()
            .map(|&p| round_to(p, arrival::TABLE_PRECISION))
            .collect(),
        summary,
    })
}
