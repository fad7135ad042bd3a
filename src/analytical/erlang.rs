//! Erlang-C quantities for the M/M/c queue.
//!
//! # Governing Equation
//!
//! ```text
//! P0 = [ Σ_{n=0}^{c-1} a^n/n!  +  a^c/c! · cμ/(cμ − λ) ]^-1      a = λ/μ
//! Lq = P0 · a^c/c! · ρ / (1 − ρ)²                                  ρ = a/c
//! ```
//!
//! Neither `a^n/n!` nor the sum of those terms is ever formed directly: the
//! terms peak near `e^a/√(2πa)`, which overflows an `f64` once the offered
//! load passes roughly 709. Everything is derived from the Erlang-B blocking
//! probability, which is bounded in `[0, 1]` at every step:
//!
//! ```text
//! B_0 = 1     B_n = a·B_{n-1} / (n + a·B_{n-1})
//! C   = c·B_c / (c − a(1 − B_c))
//! Lq  = C · ρ / (1 − ρ)
//! ```

/// Erlang-B blocking probability `B(c, a)`.
#[must_use]
pub fn erlang_b_probability(offered_load: f64, servers: u32) -> f64 {
    (1..=servers).fold(1.0, |blocking, n| {
        let carried = offered_load * blocking;
        carried / (f64::from(n) + carried)
    })
}

/// `ln Σ_{n=0}^{c} a^n/n!`, by log-sum-exp over `ln(a^n/n!)`.
fn ln_term_sum(offered_load: f64, servers: u32) -> f64 {
    let ln_load = offered_load.ln();
    let ln_terms: Vec<f64> = (0..=servers)
        .scan(0.0_f64, |ln_term, n| {
            if n > 0 {
                *ln_term += ln_load - f64::from(n).ln();
            }
            Some(*ln_term)
        })
        .collect();
    // ln(a^0/0!) = 0, so the peak is finite and non-negative
    let peak = ln_terms.iter().copied().fold(0.0, f64::max);
    peak + ln_terms.iter().map(|t| (t - peak).exp()).sum::<f64>().ln()
}

/// Probability the M/M/c system is empty.
///
/// Only meaningful for `ρ = a/c < 1`; returns `0.0` otherwise. Underflows to
/// `0.0` rather than overflowing for very large offered loads.
#[must_use]
pub fn empty_system_probability(offered_load: f64, servers: u32) -> f64 {
    let c = f64::from(servers);
    let rho = offered_load / c;
    if rho >= 1.0 {
        return 0.0;
    }
    if offered_load <= 0.0 {
        return 1.0;
    }

    // P0⁻¹ = Σ_{n<c} a^n/n! + a^c/c!/(1 − ρ) = S · (1 + B·ρ/(1 − ρ)),  S = Σ_{n≤c}
    let blocking = erlang_b_probability(offered_load, servers);
    (-ln_term_sum(offered_load, servers) - (blocking * rho / (1.0 - rho)).ln_1p()).exp()
}

/// Erlang-C: probability that an arriving customer has to wait.
#[must_use]
pub fn erlang_c_probability(offered_load: f64, servers: u32) -> f64 {
    let c = f64::from(servers);
    if offered_load / c >= 1.0 {
        return 1.0;
    }
    let blocking = erlang_b_probability(offered_load, servers);
    c * blocking / (c - offered_load * (1.0 - blocking))
}

/// Mean queue length `Lq` of an M/M/c queue.
///
/// Returns `f64::INFINITY` when `ρ >= 1`.
#[must_use]
pub fn mmc_queue_length(arrival_rate: f64, service_rate: f64, servers: u32) -> f64 {
    let offered_load = arrival_rate / service_rate;
    let rho = offered_load / f64::from(servers);
    if rho >= 1.0 {
        return f64::INFINITY;
    }
    erlang_c_probability(offered_load, servers) * rho / (1.0 - rho)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erlang_b_known_values() {
        // B(1, a) = a/(1 + a)
        assert!((erlang_b_probability(0.5, 1) - 1.0 / 3.0).abs() < 1e-12);
        // a = 2, c = 3: B = 4/19
        assert!((erlang_b_probability(2.0, 3) - 4.0 / 19.0).abs() < 1e-12);
        assert!((erlang_b_probability(3.0, 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ln_term_sum_matches_direct_sum() {
        // 1 + 2.5 + 3.125 + 2.604166... + 1.627604...
        let direct: f64 = [1.0, 2.5, 3.125, 2.5_f64.powi(3) / 6.0, 2.5_f64.powi(4) / 24.0]
            .iter()
            .sum();
        assert!((ln_term_sum(2.5, 4).exp() - direct).abs() < 1e-12);
    }

    #[test]
    fn test_light_load_many_servers_is_almost_empty() {
        // B underflows to zero here; P0 must still be ≈ e^-a
        let p0 = empty_system_probability(1e-3, 200);
        assert!((p0 - (-1e-3_f64).exp()).abs() < 1e-12, "P0 = {p0}");
        assert!(mmc_queue_length(1e-3, 1.0, 200).abs() < 1e-12);
    }

    #[test]
    fn test_single_server_p0_is_one_minus_rho() {
        let p0 = empty_system_probability(0.5, 1);
        assert!((p0 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_server_erlang_c_is_rho() {
        // With one server, P(wait) = ρ
        let p = erlang_c_probability(0.7, 1);
        assert!((p - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_known_erlang_c_value() {
        // a = 2, c = 3: P0 = 1/9, C = 4/9
        let p0 = empty_system_probability(2.0, 3);
        assert!((p0 - 1.0 / 9.0).abs() < 1e-12, "P0 = {p0}");
        let c = erlang_c_probability(2.0, 3);
        assert!((c - 4.0 / 9.0).abs() < 1e-12, "C = {c}");
    }

    #[test]
    fn test_queue_length_matches_erlang_c_relation() {
        // Lq = C(c, a) · ρ / (1 − ρ)
        let (lambda, mu, c) = (5.0, 2.0, 4);
        let a = lambda / mu;
        let rho = a / 4.0;
        let lq = mmc_queue_length(lambda, mu, c);
        let via_c = erlang_c_probability(a, c) * rho / (1.0 - rho);
        assert!((lq - via_c).abs() < 1e-12);
    }

    #[test]
    fn test_large_server_count_stays_finite() {
        // 200! overflows f64; the recursion never forms it
        let lq = mmc_queue_length(180.0, 1.0, 200);
        assert!(lq.is_finite(), "Lq = {lq}");
        assert!(lq >= 0.0);

        let p0 = empty_system_probability(180.0, 200);
        assert!(p0.is_finite());
        assert!(p0 > 0.0);
    }

    #[test]
    fn test_offered_load_beyond_f64_term_range() {
        // a^n/n! peaks above f64::MAX for a > ~709
        let c = erlang_c_probability(900.0, 1000);
        assert!(c.is_finite() && (0.0..=1.0).contains(&c), "C = {c}");
        assert!((c - 0.000_592_67).abs() < 1e-7, "C = {c}");

        let lq = mmc_queue_length(900.0, 1.0, 1000);
        assert!(lq.is_finite(), "Lq = {lq}");
        assert!((lq - 0.005_334_03).abs() < 1e-6, "Lq = {lq}");

        let p0 = empty_system_probability(900.0, 1000);
        assert!(p0.is_finite());
        assert!(p0 >= 0.0);
    }

    #[test]
    fn test_unstable_inputs() {
        assert!(mmc_queue_length(4.0, 1.0, 4).is_infinite());
        assert!((erlang_c_probability(5.0, 4) - 1.0).abs() < f64::EPSILON);
        assert!(empty_system_probability(5.0, 4).abs() < f64::EPSILON);
    }
}
