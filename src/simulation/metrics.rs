//! Aggregate statistics over a simulated run.

use serde::{Deserialize, Serialize};

use super::arrival::round_to;
use super::CustomerRecord;

/// Waiting times at or below this count as "did not wait".
pub const WAIT_THRESHOLD: f64 = 0.01;

/// Aggregate metrics of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// `λ / (c·μ)`.
    pub utilization: f64,
    /// Mean gap between arrivals, including the leading zero.
    pub avg_interarrival_time: f64,
    /// Mean service time.
    pub avg_service_time: f64,
    /// Mean time from arrival to departure.
    pub avg_turnaround_time: f64,
    /// Mean time spent waiting before service.
    pub avg_waiting_time: f64,
    /// Mean time from arrival to service start.
    pub avg_response_time: f64,
    /// Fraction of customers whose wait exceeds [`WAIT_THRESHOLD`].
    pub probability_of_waiting: f64,
}

impl SimulationSummary {
    /// Aggregate `records` for a system with the given rates.
    ///
    /// Every average is zero for an empty run.
    #[must_use]
    pub fn from_records(
        records: &[CustomerRecord],
        arrival_rate: f64,
        service_rate: f64,
        servers: u32,
    ) -> Self {
        let mean = |f: fn(&CustomerRecord) -> f64| {
            if records.is_empty() {
                0.0
            } else {
                records.iter().map(f).sum::<f64>() / records.len() as f64
            }
        };
        let waited = records
            .iter()
            .filter(|r| r.waiting_time > WAIT_THRESHOLD)
            .count();
        let probability_of_waiting = if records.is_empty() {
            0.0
        } else {
            waited as f64 / records.len() as f64
        };

        Self {
            utilization: arrival_rate / (f64::from(servers) * service_rate),
            avg_interarrival_time: mean(|r| r.interarrival_time),
            avg_service_time: mean(|r| r.service_time),
            avg_turnaround_time: mean(|r| r.turnaround_time),
            avg_waiting_time: mean(|r| r.waiting_time),
            avg_response_time: mean(|r| r.response_time),
            probability_of_waiting,
        }
    }

    /// Display copy rounded to `precision` decimals.
    #[must_use]
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            utilization: round_to(self.utilization, precision),
            avg_interarrival_time: round_to(self.avg_interarrival_time, precision),
            avg_service_time: round_to(self.avg_service_time, precision),
            avg_turnaround_time: round_to(self.avg_turnaround_time, precision),
            avg_waiting_time: round_to(self.avg_waiting_time, precision),
            avg_response_time: round_to(self.avg_response_time, precision),
            probability_of_waiting: round_to(self.probability_of_waiting, precision),
        }
    }
}
