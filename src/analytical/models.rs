//! The six model formula sets.

use tracing::debug;

use super::erlang::mmc_queue_length;
use super::{AnalyticalResult, SteadyState};
use crate::error::{require_positive, require_servers, QueueResult};
use crate::model::Distribution;

/// M/M/1: Poisson arrivals, exponential service, one server.
///
/// ```text
/// ρ = λ/μ     Lq = ρ²/(1 − ρ)
/// ```
///
/// # Errors
///
/// Returns a domain error if either rate is not a positive finite number.
pub fn mm1(arrival_rate: f64, service_rate: f64) -> QueueResult<AnalyticalResult> {
    require_positive("arrival_rate", arrival_rate)?;
    require_positive("service_rate", service_rate)?;

    let rho = arrival_rate / service_rate;
    debug!(arrival_rate, service_rate, rho, "M/M/1");
    if rho >= 1.0 {
        return Ok(AnalyticalResult::diverging(rho));
    }

    let lq = rho * rho / (1.0 - rho);
    Ok(AnalyticalResult::new(
        rho,
        SteadyState::from_queue_length(lq, arrival_rate, service_rate),
    ))
}

/// M/M/c: Poisson arrivals, exponential service, `servers` servers (Erlang-C).
///
/// # Errors
///
/// Returns a domain error for non-positive rates or zero servers.
pub fn mmc(arrival_rate: f64, service_rate: f64, servers: u32) -> QueueResult<AnalyticalResult> {
    require_positive("arrival_rate", arrival_rate)?;
    require_positive("service_rate", service_rate)?;
    require_servers(servers)?;

    let rho = arrival_rate / (f64::from(servers) * service_rate);
    debug!(arrival_rate, service_rate, servers, rho, "M/M/c");
    if rho >= 1.0 {
        return Ok(AnalyticalResult::diverging(rho));
    }

    let lq = mmc_queue_length(arrival_rate, service_rate, servers);
    Ok(AnalyticalResult::new(
        rho,
        SteadyState::from_queue_length(lq, arrival_rate, service_rate),
    ))
}

/// M/G/1 via the Pollaczek–Khinchine mean-value formula.
///
/// ```text
/// μ = 1/E[S]     ρ = λ/μ     Lq = (λ²σ² + ρ²) / (2(1 − ρ))
/// ```
///
/// # Errors
///
/// Returns a domain error for a non-positive arrival rate or an invalid
/// service distribution.
pub fn mg1(arrival_rate: f64, service: &Distribution) -> QueueResult<AnalyticalResult> {
    require_positive("arrival_rate", arrival_rate)?;
    service.validate("service")?;

    let service_rate = service.rate();
    let variance = service.variance();
    let rho = arrival_rate / service_rate;
    debug!(arrival_rate, service_rate, variance, rho, "M/G/1");
    if rho >= 1.0 {
        return Ok(AnalyticalResult::diverging(rho));
    }

    let lq = (arrival_rate * arrival_rate * variance + rho * rho) / (2.0 * (1.0 - rho));
    Ok(AnalyticalResult::new(
        rho,
        SteadyState::from_queue_length(lq, arrival_rate, service_rate),
    ))
}

/// M/G/c: the M/M/c queue wait scaled by the mean coefficient of variation.
///
/// ```text
/// Wq ≈ Wq(M/M/c) · (c_a + c_s)/2     c_a = √λ/λ     c_s = σ/E[S]
/// ```
///
/// # Errors
///
/// Returns a domain error for a non-positive arrival rate, an invalid
/// service distribution or zero servers.
pub fn mgc(
    arrival_rate: f64,
    service: &Distribution,
    servers: u32,
) -> QueueResult<AnalyticalResult> {
    require_positive("arrival_rate", arrival_rate)?;
    service.validate("service")?;
    require_servers(servers)?;

    let service_rate = service.rate();
    let rho = arrival_rate / (f64::from(servers) * service_rate);
    debug!(arrival_rate, service_rate, servers, rho, "M/G/c");
    if rho >= 1.0 {
        return Ok(AnalyticalResult::diverging(rho));
    }

    let mmc_wait = mmc_queue_length(arrival_rate, service_rate, servers) / arrival_rate;
    let cv_arrival = arrival_rate.sqrt() / arrival_rate;
    let cv_service = service.coefficient_of_variation();
    let wq = mmc_wait * (cv_arrival + cv_service) / 2.0;

    Ok(AnalyticalResult::new(
        rho,
        SteadyState::from_queue_wait(wq, arrival_rate, service_rate),
    ))
}

/// G/G/1 two-moment approximation.
///
/// ```text
/// Lq ≈ ρ²(1 + c_s)(c_a + ρ²c_s) / (2(1 − ρ)(1 + ρ²c_s))
/// ```
///
/// The formula is not symmetric in `c_a` and `c_s`: swapping which side is
/// normal and which is uniform changes the result.
///
/// # Errors
///
/// Returns a domain error if either distribution is invalid.
pub fn gg1(arrival: &Distribution, service: &Distribution) -> QueueResult<AnalyticalResult> {
    arrival.validate("arrival")?;
    service.validate("service")?;

    let arrival_rate = arrival.rate();
    let service_rate = service.rate();
    let rho = arrival_rate / service_rate;
    let ca = arrival.coefficient_of_variation();
    let cs = service.coefficient_of_variation();
    debug!(arrival_rate, service_rate, ca, cs, rho, "G/G/1");
    if rho >= 1.0 {
        return Ok(AnalyticalResult::diverging(rho));
    }

    let rho2 = rho * rho;
    let lq = rho2 * (1.0 + cs) * (ca + rho2 * cs) / (2.0 * (1.0 - rho) * (1.0 + rho2 * cs));
    Ok(AnalyticalResult::new(
        rho,
        SteadyState::from_queue_length(lq, arrival_rate, service_rate),
    ))
}

/// G/G/c Allen–Cunneen approximation with a heavy-traffic utilization term.
///
/// ```text
/// Wq ≈ (c_a + c_s)/2 · ρ^(√(2(c+1)) − 1) / (c(1 − ρ)) · 1/μ
/// ```
///
/// # Errors
///
/// Returns a domain error for invalid distributions or zero servers.
pub fn ggc(
    arrival: &Distribution,
    service: &Distribution,
    servers: u32,
) -> QueueResult<AnalyticalResult> {
    arrival.validate("arrival")?;
    service.validate("service")?;
    require_servers(servers)?;

    let c = f64::from(servers);
    let arrival_rate = arrival.rate();
    let service_rate = service.rate();
    let rho = arrival_rate / (c * service_rate);
    let ca = arrival.coefficient_of_variation();
    let cs = service.coefficient_of_variation();
    debug!(arrival_rate, service_rate, servers, ca, cs, rho, "G/G/c");
    if rho >= 1.0 {
        return Ok(AnalyticalResult::diverging(rho));
    }

    let heavy_traffic = rho.powf((2.0 * (c + 1.0)).sqrt() - 1.0) / (c * (1.0 - rho));
    let wq = (ca + cs) / 2.0 * heavy_traffic / service_rate;
    Ok(AnalyticalResult::new(
        rho,
        SteadyState::from_queue_wait(wq, arrival_rate, service_rate),
    ))
}
