//! Arrival stream generation.
//!
//! The run length is sized from the Poisson distribution of arrivals per unit
//! time: customers are generated until the cumulative probability
//! `P(X <= x)` reaches [`POISSON_CUTOFF`].
//!
//! # Governing Equation
//!
//! ```text
//! ln p(0) = −λ
//! ln p(x) = ln p(x−1) + ln λ − ln x
//! ```
//!
//! The PMF is carried in log space so that neither `λ^x` nor `x!` is formed.

use tracing::debug;

use crate::engine::rng::RandomSource;
use crate::error::{require_positive, QueueError, QueueResult};
use crate::model::Distribution;

/// Cumulative probability at which the cutoff table stops.
pub const POISSON_CUTOFF: f64 = 0.999_999;

/// Decimal places kept for table entries in results.
pub const TABLE_PRECISION: u32 = 7;

/// Largest arrival rate a run can be sized for. The table, and so the run,
/// holds about `λ + 5√λ` entries.
pub const MAX_SIMULATED_ARRIVAL_RATE: f64 = 1.0e6;

/// `f64` carries at most 15 significant decimal digits reliably.
const MAX_ROUND_PLACES: u32 = 15;

/// Cumulative Poisson probabilities `P(X <= x)` for `x = 0, 1, ...` up to
/// and including the first entry that reaches [`POISSON_CUTOFF`].
///
/// For very large `λ` the cumulative sum can stall just below the cutoff
/// because tail terms underflow or are lost to rounding. Once `x` is past the
/// mode and a term no longer moves the sum, the table ends.
///
/// # Errors
///
/// Returns a domain error if `arrival_rate` is not positive and finite, or
/// exceeds [`MAX_SIMULATED_ARRIVAL_RATE`].
pub fn poisson_cutoff_table(arrival_rate: f64) -> QueueResult<Vec<f64>> {
    require_positive("arrival_rate", arrival_rate)?;
    if arrival_rate > MAX_SIMULATED_ARRIVAL_RATE {
        return Err(QueueError::domain(
            "arrival_rate",
            format!("too large to simulate, got {arrival_rate}"),
        ));
    }

    let ln_rate = arrival_rate.ln();
    let mut ln_pmf = -arrival_rate;
    let mut cumulative = ln_pmf.exp();
    let mut table = vec![cumulative];
    let mut x = 0u64;

    while cumulative < POISSON_CUTOFF {
        x += 1;
        let xf = x as f64;
        ln_pmf += ln_rate - xf.ln();
        let term = ln_pmf.exp();
        let next = cumulative + term;
        if xf > arrival_rate && next == cumulative {
            break;
        }
        cumulative = next;
        table.push(cumulative);
    }

    debug!(
        arrival_rate,
        entries = table.len(),
        last = cumulative,
        "poisson cutoff table"
    );
    Ok(table)
}

/// Round a value to `places` decimals, normalizing negative zero.
///
/// `places` is capped at 15. Values too large to scale are returned as is.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(MAX_ROUND_PLACES) as i32);
    let scaled = value * factor;
    let rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    };
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Interarrival and arrival times for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalStream {
    /// Gap since the previous arrival; the first is always zero.
    pub interarrival_times: Vec<f64>,
    /// Running sum of the gaps.
    pub arrival_times: Vec<f64>,
}

impl ArrivalStream {
    /// Generate `count` arrivals with gaps drawn from `interarrival`.
    ///
    /// The first customer arrives at time zero; the remaining `count - 1`
    /// gaps are independent draws.
    pub fn generate<R: RandomSource + ?Sized>(
        interarrival: &Distribution,
        count: usize,
        rng: &mut R,
    ) -> Self {
        let mut interarrival_times = Vec::with_capacity(count);
        let mut arrival_times = Vec::with_capacity(count);
        let mut clock = 0.0;

        for i in 0..count {
            let gap = if i == 0 { 0.0 } else { interarrival.sample(rng) };
            clock += gap;
            interarrival_times.push(gap);
            arrival_times.push(clock);
        }

        Self {
            interarrival_times,
            arrival_times,
        }
    }

    /// Poisson arrivals: exponential gaps at `arrival_rate`.
    ///
    /// # Errors
    ///
    /// Returns a domain error if `arrival_rate` is not positive and finite.
    pub fn poisson<R: RandomSource + ?Sized>(
        arrival_rate: f64,
        count: usize,
        rng: &mut R,
    ) -> QueueResult<Self> {
        require_positive("arrival_rate", arrival_rate)?;
        Ok(Self::generate(
            &Distribution::Exponential { rate: arrival_rate },
            count,
            rng,
        ))
    }

    /// Number of customers in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrival_times.len()
    }

    /// Whether the stream is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrival_times.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::SimRng;

    /// Direct Poisson CDF for small λ.
    fn naive_cdf(lambda: f64, x: u32) -> f64 {
        let mut sum = 0.0;
        let mut factorial = 1.0;
        for k in 0..=x {
            if k > 0 {
                factorial *= f64::from(k);
            }
            sum += (-lambda).exp() * lambda.powi(k as i32) / factorial;
        }
        sum
    }

    #[test]
    fn test_table_matches_naive_cdf() {
        let table = poisson_cutoff_table(2.0).expect("valid rate");
        for (x, p) in table.iter().enumerate() {
            let expected = naive_cdf(2.0, x as u32);
            assert!((p - expected).abs() < 1e-12, "x={x}: {p} vs {expected}");
        }
    }

    #[test]
    fn test_table_stops_at_cutoff() {
        for lambda in [0.1, 1.0, 2.0, 7.5, 30.0] {
            let table = poisson_cutoff_table(lambda).expect("valid rate");
            let last = *table.last().expect("non-empty");
            assert!(last >= POISSON_CUTOFF, "λ={lambda}: last={last}");
            if table.len() > 1 {
                assert!(table[table.len() - 2] < POISSON_CUTOFF);
            }
        }
    }

    #[test]
    fn test_table_length_for_unit_rate() {
        // P(X <= 9) ≈ 0.9999999, P(X <= 8) ≈ 0.999991
        let table = poisson_cutoff_table(1.0).expect("valid rate");
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn test_table_is_nondecreasing() {
        let table = poisson_cutoff_table(12.0).expect("valid rate");
        assert!(table.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_large_rate_terminates() {
        let table = poisson_cutoff_table(1_000.0).expect("valid rate");
        assert!(table.len() > 1_000);
        assert!(table.len() < 2_000);
        assert!(table.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_table_rejects_bad_rate() {
        assert!(poisson_cutoff_table(0.0).unwrap_err().is_domain_error());
        assert!(poisson_cutoff_table(5.0e9).unwrap_err().is_domain_error());
        assert!(poisson_cutoff_table(f64::MAX).is_err());
        assert!(poisson_cutoff_table(-2.0).is_err());
        assert!(poisson_cutoff_table(f64::NAN).is_err());
    }

    #[test]
    fn test_first_arrival_at_zero() {
        let mut rng = SimRng::new(42);
        let stream = ArrivalStream::poisson(2.0, 5, &mut rng).expect("valid rate");
        assert_eq!(stream.len(), 5);
        assert!(stream.interarrival_times[0].abs() < f64::EPSILON);
        assert!(stream.arrival_times[0].abs() < f64::EPSILON);
    }

    #[test]
    fn test_arrivals_are_running_sum() {
        let mut rng = SimRng::new(3);
        let stream = ArrivalStream::poisson(1.5, 20, &mut rng).expect("valid rate");
        let mut clock = 0.0;
        for (gap, arrival) in stream.interarrival_times.iter().zip(&stream.arrival_times) {
            clock += gap;
            assert!((clock - arrival).abs() < 1e-12);
        }
        assert!(stream.arrival_times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_first_arrival_consumes_no_draw() {
        let mut rng = SimRng::new(9);
        let _ = ArrivalStream::poisson(1.0, 4, &mut rng).expect("valid rate");
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_empty_stream() {
        let mut rng = SimRng::new(1);
        let stream = ArrivalStream::poisson(1.0, 0, &mut rng).expect("valid rate");
        assert!(stream.is_empty());
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(0.123_456_78, 7) - 0.123_456_8).abs() < 1e-15);
        assert!((round_to(1.456, 2) - 1.46).abs() < 1e-12);
        assert!(round_to(-0.001, 2).is_sign_positive());
        assert!(round_to(-0.0, 7).is_sign_positive());
    }

    #[test]
    fn test_round_to_extreme_places() {
        let rounded = round_to(1.25, 400);
        assert!(rounded.is_finite());
        assert!((rounded - 1.25).abs() < 1e-12);
        assert_eq!(round_to(1.0e300, 10), 1.0e300);
        assert!(round_to(-1.0e-20, 400).is_sign_positive());
    }
}
