//! Random variate sources.
//!
//! All stochastic generators take an explicit [`RandomSource`] so that a run
//! can be replayed bit-for-bit from a seed, or driven by a scripted sequence
//! in tests. [`SimRng`] is the production source, a seeded PCG64.
//!
//! # Reproducibility Guarantee
//!
//! Given the same seed, `SimRng` produces a bitwise-identical sequence of
//! uniforms, and therefore identical derived variates, across runs and
//! platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;

/// A supply of uniform(0, 1) draws with derived distributions on top.
///
/// Implementors only provide [`RandomSource::next_uniform`]; exponential,
/// uniform-range and normal variates are built from it.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Exponential variate with the given rate: `-ln(U) / rate`.
    fn exponential(&mut self, rate: f64) -> f64 {
        -guard_log_input(self.next_uniform()).ln() / rate
    }

    /// Uniform variate in `[min, max)`: `min + U * (max - min)`.
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_uniform() * (max - min)
    }

    /// Standard normal variate via the Box-Muller transform.
    fn standard_normal(&mut self) -> f64 {
        let u1 = guard_log_input(self.next_uniform());
        let u2 = self.next_uniform();

        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Normal variate with the given mean and standard deviation.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.standard_normal()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Avoid `ln(0)`.
fn guard_log_input(u: f64) -> f64 {
    if u < f64::EPSILON {
        f64::EPSILON
    } else {
        u
    }
}

/// Deterministic, reproducible random number generator.
///
/// Based on PCG (Permuted Congruential Generator) which provides:
/// - Excellent statistical properties
/// - Fast generation
/// - Predictable sequences from seed
#[derive(Debug, Clone)]
pub struct SimRng {
    /// Seed the generator was created with.
    seed: u64,
    /// Number of uniforms drawn so far.
    draws: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SimRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draws: 0,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from operating system entropy.
    ///
    /// The chosen seed is still recorded so the run can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Get the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of uniforms drawn since creation.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.draws += 1;
        self.rng.gen()
    }
}

impl RandomSource for SimRng {
    fn next_uniform(&mut self) -> f64 {
        self.gen_f64()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification test: reproducibility holds for any seed.
        #[test]
        fn prop_reproducibility(seed in 0u64..u64::MAX) {
            let mut rng1 = SimRng::new(seed);
            let mut rng2 = SimRng::new(seed);

            let seq1: Vec<f64> = (0..100).map(|_| rng1.gen_f64()).collect();
            let seq2: Vec<f64> = (0..100).map(|_| rng2.gen_f64()).collect();

            prop_assert_eq!(seq1, seq2);
        }

        /// Falsification test: values in [0, 1) for any seed.
        #[test]
        fn prop_unit_interval(seed in 0u64..u64::MAX) {
            let mut rng = SimRng::new(seed);

            for _ in 0..100 {
                let v = rng.next_uniform();
                prop_assert!((0.0..1.0).contains(&v), "Value {} not in [0, 1)", v);
            }
        }

        /// Falsification test: exponential draws are finite and non-negative.
        #[test]
        fn prop_exponential_non_negative(seed in 0u64..u64::MAX, rate in 0.01f64..100.0) {
            let mut rng = SimRng::new(seed);
            for _ in 0..50 {
                let v = rng.exponential(rate);
                prop_assert!(v.is_finite() && v >= 0.0, "bad exponential draw {}", v);
            }
        }
    }
}
