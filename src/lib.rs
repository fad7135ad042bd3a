//! # queuesim
//!
//! Queueing-theory performance analysis two ways:
//! - closed-form and approximate formulas for M/M/1, M/M/c, M/G/1, M/G/c,
//!   G/G/1 and G/G/c ([`analytical`])
//! - a reproducible discrete-event simulator for the Poisson-arrival
//!   models ([`simulation`])
//!
//! Both take a [`model::QueueModel`]. The simulator draws all randomness from
//! an explicit [`engine::RandomSource`], so a seeded run is bit-for-bit
//! repeatable.
//!
//! ## Example
//!
//! ```rust
//! use queuesim::prelude::*;
//!
//! let model = QueueModel::Mmc { arrival_rate: 2.0, service_rate: 3.0, servers: 4 };
//!
//! let analytical = run_analytical(&model).unwrap();
//! assert!(analytical.is_stable());
//!
//! let simulated = run_simulation(&model, &mut SimRng::new(42)).unwrap();
//! assert!(simulated.customers.iter().all(|c| c.server_id < 4));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::suboptimal_flops,  // Formulas are written as published
    clippy::imprecise_flops,
    clippy::missing_const_for_fn,
    clippy::many_single_char_names,
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp))]

pub mod analytical;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod simulation;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analytical::{run_analytical, AnalyticalResult, SteadyState};
    pub use crate::config::{ScenarioConfig, ScenarioConfigBuilder};
    pub use crate::engine::{RandomSource, SimRng};
    pub use crate::error::{QueueError, QueueResult};
    pub use crate::model::{Distribution, QueueModel};
    pub use crate::simulation::{run_simulation, CustomerRecord, SimulationResult, SimulationSummary};
}

/// Re-export for public API
pub use error::{QueueError, QueueResult};
