//! Closed-form and approximate steady-state metrics for six queue models.
//!
//! | Model | Method |
//! |-------|--------|
//! | M/M/1 | exact |
//! | M/M/c | Erlang-C |
//! | M/G/1 | Pollaczek–Khinchine |
//! | M/G/c | Erlang-C scaled by `(c_a + c_s)/2` (Allen–Cunneen) |
//! | G/G/1 | two-moment approximation on `c_a`, `c_s` |
//! | G/G/c | Allen–Cunneen with the heavy-traffic term `ρ^(√(2(c+1))−1)` |
//!
//! Every function validates its inputs and fails with
//! [`QueueError::Domain`](crate::error::QueueError::Domain) before computing.
//! An overloaded queue is not an error: the result carries `utilization >= 1`
//! and no steady state.
//!
//! ```rust
//! use queuesim::analytical::mm1;
//!
//! let result = mm1(1.0, 2.0).unwrap();
//! let steady = result.steady_state.unwrap();
//! assert!((steady.avg_number_in_queue - 0.5).abs() < 1e-12);
//!
//! let overloaded = mm1(3.0, 2.0).unwrap();
//! assert!(!overloaded.is_stable());
//! ```

pub mod erlang;
mod models;

use serde::{Deserialize, Serialize};

use crate::error::QueueResult;
use crate::model::QueueModel;

pub use erlang::{
    empty_system_probability, erlang_b_probability, erlang_c_probability, mmc_queue_length,
};
pub use models::{gg1, ggc, mg1, mgc, mm1, mmc};

/// Steady-state averages of a stable queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteadyState {
    /// Lq, mean number waiting in queue.
    pub avg_number_in_queue: f64,
    /// Wq, mean time waiting in queue.
    pub avg_wait_in_queue: f64,
    /// Ws, mean time in system.
    pub avg_wait_in_system: f64,
    /// Ls, mean number in system.
    pub avg_number_in_system: f64,
}

impl SteadyState {
    /// Derive all metrics from `Lq` through Little's law.
    ///
    /// `Wq = Lq/λ`, `Ws = Wq + 1/μ`, `Ls = λ·Ws`.
    #[must_use]
    pub fn from_queue_length(queue_length: f64, arrival_rate: f64, service_rate: f64) -> Self {
        let avg_wait_in_queue = queue_length / arrival_rate;
        let avg_wait_in_system = avg_wait_in_queue + 1.0 / service_rate;
        Self {
            avg_number_in_queue: queue_length,
            avg_wait_in_queue,
            avg_wait_in_system,
            avg_number_in_system: arrival_rate * avg_wait_in_system,
        }
    }

    /// Derive all metrics from `Wq` through Little's law.
    ///
    /// `Lq = λ·Wq`, `Ws = Wq + 1/μ`, `Ls = λ·Ws`.
    #[must_use]
    pub fn from_queue_wait(queue_wait: f64, arrival_rate: f64, service_rate: f64) -> Self {
        let avg_wait_in_system = queue_wait + 1.0 / service_rate;
        Self {
            avg_number_in_queue: queue_wait * arrival_rate,
            avg_wait_in_queue: queue_wait,
            avg_wait_in_system,
            avg_number_in_system: arrival_rate * avg_wait_in_system,
        }
    }

    fn is_finite(&self) -> bool {
        self.avg_number_in_queue.is_finite()
            && self.avg_wait_in_queue.is_finite()
            && self.avg_wait_in_system.is_finite()
            && self.avg_number_in_system.is_finite()
    }
}

/// Output of an analytical model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticalResult {
    /// ρ, offered load per server.
    pub utilization: f64,
    /// Steady-state metrics; `None` when the queue diverges.
    pub steady_state: Option<SteadyState>,
}

impl AnalyticalResult {
    /// Build a result, dropping the steady state if the queue is unstable
    /// or the formulas produced a non-finite value.
    #[must_use]
    pub fn new(utilization: f64, steady_state: SteadyState) -> Self {
        let steady_state = (utilization < 1.0 && steady_state.is_finite()).then_some(steady_state);
        if steady_state.is_none() {
            tracing::warn!(utilization, "queue diverges, no steady state");
        }
        Self {
            utilization,
            steady_state,
        }
    }

    /// Result for a queue known to be overloaded.
    #[must_use]
    pub fn diverging(utilization: f64) -> Self {
        tracing::warn!(utilization, "queue diverges, no steady state");
        Self {
            utilization,
            steady_state: None,
        }
    }

    /// Whether the queue reaches a steady state.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        self.steady_state.is_some()
    }

    /// Lq, if defined.
    #[must_use]
    pub fn avg_number_in_queue(&self) -> Option<f64> {
        self.steady_state.map(|s| s.avg_number_in_queue)
    }

    /// Wq, if defined.
    #[must_use]
    pub fn avg_wait_in_queue(&self) -> Option<f64> {
        self.steady_state.map(|s| s.avg_wait_in_queue)
    }

    /// Ws, if defined.
    #[must_use]
    pub fn avg_wait_in_system(&self) -> Option<f64> {
        self.steady_state.map(|s| s.avg_wait_in_system)
    }

    /// Ls, if defined.
    #[must_use]
    pub fn avg_number_in_system(&self) -> Option<f64> {
        self.steady_state.map(|s| s.avg_number_in_system)
    }
}

/// Evaluate the analytical formulas for any model.
///
/// # Errors
///
/// Returns [`QueueError::Domain`](crate::error::QueueError::Domain) if a
/// parameter is outside its domain.
pub fn run_analytical(model: &QueueModel) -> QueueResult<AnalyticalResult> {
    match *model {
        QueueModel::Mm1 {
            arrival_rate,
            service_rate,
        } => mm1(arrival_rate, service_rate),
        QueueModel::Mmc {
            arrival_rate,
            service_rate,
            servers,
        } => mmc(arrival_rate, service_rate, servers),
        QueueModel::Mg1 {
            arrival_rate,
            service,
        } => mg1(arrival_rate, &service),
        QueueModel::Mgc {
            arrival_rate,
            service,
            servers,
        } => mgc(arrival_rate, &service, servers),
        QueueModel::Gg1 { arrival, service } => gg1(&arrival, &service),
        QueueModel::Ggc {
            arrival,
            service,
            servers,
        } => ggc(&arrival, &service, servers),
    }
}
