//! Simulation engine primitives.
//!
//! Holds the random variate sources that every stochastic generator in
//! [`crate::simulation`] is parameterized over.

pub mod rng;

pub use rng::{RandomSource, SimRng};
