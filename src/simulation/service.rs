//! Service time generation.

use crate::engine::rng::RandomSource;
use crate::model::Distribution;

/// Draw `count` service times from `service`.
///
/// Normal draws are floored at [`crate::model::MIN_NORMAL_DRAW`].
pub fn service_times<R: RandomSource + ?Sized>(
    service: &Distribution,
    count: usize,
    rng: &mut R,
) -> Vec<f64> {
    (0..count).map(|_| service.sample(rng)).collect()
}
