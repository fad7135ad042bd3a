//! Queue models and the distributions that parameterize them.
//!
//! Models are a closed enumeration in Kendall notation. Each variant carries
//! exactly the parameters its formulas need, so dispatch over models is an
//! exhaustive `match` and adding a model is a compile-checked change.
//!
//! ```rust
//! use queuesim::model::{Distribution, QueueModel};
//!
//! let model = QueueModel::Mgc {
//!     arrival_rate: 2.0,
//!     service: Distribution::Uniform { min: 1.0, max: 2.0 },
//!     servers: 4,
//! };
//! assert_eq!(model.notation(), "M/G/c");
//! assert!(model.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::rng::RandomSource;
use crate::error::{
    require_non_negative, require_positive, require_servers, QueueError, QueueResult,
};

/// Smallest service time a normal draw may produce.
pub const MIN_NORMAL_DRAW: f64 = 0.01;

/// A time distribution for interarrival or service times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", deny_unknown_fields)]
pub enum Distribution {
    /// Exponential with the given rate (mean `1/rate`).
    Exponential {
        /// Events per unit time.
        rate: f64,
    },
    /// Continuous uniform on `[min, max]`.
    Uniform {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Normal with the given mean and standard deviation.
    Normal {
        /// Mean.
        mean: f64,
        /// Standard deviation.
        std_dev: f64,
    },
}

impl Distribution {
    /// Mean of the distribution.
    #[must_use]
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Exponential { rate } => 1.0 / rate,
            Self::Uniform { min, max } => (min + max) / 2.0,
            Self::Normal { mean, .. } => mean,
        }
    }

    /// Variance of the distribution.
    #[must_use]
    pub fn variance(&self) -> f64 {
        match *self {
            Self::Exponential { rate } => 1.0 / (rate * rate),
            Self::Uniform { min, max } => (max - min).powi(2) / 12.0,
            Self::Normal { std_dev, .. } => std_dev * std_dev,
        }
    }

    /// Standard deviation.
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Effective rate, the inverse of the mean.
    ///
    /// For the exponential this is the configured rate exactly.
    #[must_use]
    pub fn rate(&self) -> f64 {
        match *self {
            Self::Exponential { rate } => rate,
            Self::Uniform { .. } | Self::Normal { .. } => 1.0 / self.mean(),
        }
    }

    /// Coefficient of variation, `std_dev / mean`.
    #[must_use]
    pub fn coefficient_of_variation(&self) -> f64 {
        self.std_dev() / self.mean()
    }

    /// Draw one time value.
    ///
    /// Normal draws are floored at [`MIN_NORMAL_DRAW`] so a time is never
    /// negative.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Self::Exponential { rate } => rng.exponential(rate),
            Self::Uniform { min, max } => rng.uniform(min, max),
            Self::Normal { mean, std_dev } => rng.normal(mean, std_dev).max(MIN_NORMAL_DRAW),
        }
    }

    /// Check parameters are inside the distribution's domain.
    ///
    /// `role` prefixes parameter names in the error (e.g. `"service"`).
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Domain`] for non-positive rates or means,
    /// negative bounds or standard deviations, or `min > max`.
    pub fn validate(&self, role: &str) -> QueueResult<()> {
        match *self {
            Self::Exponential { rate } => {
                require_positive(&format!("{role}.rate"), rate)?;
            }
            Self::Uniform { min, max } => {
                require_non_negative(&format!("{role}.min"), min)?;
                require_positive(&format!("{role}.max"), max)?;
                if min > max {
                    return Err(QueueError::domain(
                        format!("{role}.min"),
                        format!("must not exceed max ({min} > {max})"),
                    ));
                }
            }
            Self::Normal { mean, std_dev } => {
                require_positive(&format!("{role}.mean"), mean)?;
                require_non_negative(&format!("{role}.std_dev"), std_dev)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Exponential { rate } => write!(f, "Exponential(rate={rate})"),
            Self::Uniform { min, max } => write!(f, "Uniform(min={min}, max={max})"),
            Self::Normal { mean, std_dev } => write!(f, "Normal(mean={mean}, std_dev={std_dev})"),
        }
    }
}

/// A queueing model with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", deny_unknown_fields)]
pub enum QueueModel {
    /// Poisson arrivals, exponential service, one server.
    Mm1 {
        /// λ, arrivals per unit time.
        arrival_rate: f64,
        /// μ, services per unit time.
        service_rate: f64,
    },
    /// Poisson arrivals, exponential service, `servers` servers.
    Mmc {
        /// λ, arrivals per unit time.
        arrival_rate: f64,
        /// μ, services per unit time per server.
        service_rate: f64,
        /// c, number of identical servers.
        servers: u32,
    },
    /// Poisson arrivals, general service, one server.
    Mg1 {
        /// λ, arrivals per unit time.
        arrival_rate: f64,
        /// Service time distribution.
        service: Distribution,
    },
    /// Poisson arrivals, general service, `servers` servers.
    Mgc {
        /// λ, arrivals per unit time.
        arrival_rate: f64,
        /// Service time distribution.
        service: Distribution,
        /// c, number of identical servers.
        servers: u32,
    },
    /// General interarrival and service times, one server.
    Gg1 {
        /// Interarrival time distribution.
        arrival: Distribution,
        /// Service time distribution.
        service: Distribution,
    },
    /// General interarrival and service times, `servers` servers.
    Ggc {
        /// Interarrival time distribution.
        arrival: Distribution,
        /// Service time distribution.
        service: Distribution,
        /// c, number of identical servers.
        servers: u32,
    },
}

impl QueueModel {
    /// Kendall notation of the model family.
    #[must_use]
    pub const fn notation(&self) -> &'static str {
        match self {
            Self::Mm1 { .. } => "M/M/1",
            Self::Mmc { .. } => "M/M/c",
            Self::Mg1 { .. } => "M/G/1",
            Self::Mgc { .. } => "M/G/c",
            Self::Gg1 { .. } => "G/G/1",
            Self::Ggc { .. } => "G/G/c",
        }
    }

    /// Number of servers.
    #[must_use]
    pub const fn servers(&self) -> u32 {
        match *self {
            Self::Mm1 { .. } | Self::Mg1 { .. } | Self::Gg1 { .. } => 1,
            Self::Mmc { servers, .. } | Self::Mgc { servers, .. } | Self::Ggc { servers, .. } => {
                servers
            }
        }
    }

    /// Mean arrival rate λ.
    #[must_use]
    pub fn arrival_rate(&self) -> f64 {
        match *self {
            Self::Mm1 { arrival_rate, .. }
            | Self::Mmc { arrival_rate, .. }
            | Self::Mg1 { arrival_rate, .. }
            | Self::Mgc { arrival_rate, .. } => arrival_rate,
            Self::Gg1 { arrival, .. } | Self::Ggc { arrival, .. } => arrival.rate(),
        }
    }

    /// Service time distribution.
    #[must_use]
    pub fn service_distribution(&self) -> Distribution {
        match *self {
            Self::Mm1 { service_rate, .. } | Self::Mmc { service_rate, .. } => {
                Distribution::Exponential { rate: service_rate }
            }
            Self::Mg1 { service, .. }
            | Self::Mgc { service, .. }
            | Self::Gg1 { service, .. }
            | Self::Ggc { service, .. } => service,
        }
    }

    /// Effective per-server service rate μ.
    #[must_use]
    pub fn service_rate(&self) -> f64 {
        self.service_distribution().rate()
    }

    /// Offered load per server, `λ / (c·μ)`.
    #[must_use]
    pub fn utilization(&self) -> f64 {
        self.arrival_rate() / (f64::from(self.servers()) * self.service_rate())
    }

    /// Whether arrivals are Poisson, which is what the simulator generates.
    #[must_use]
    pub const fn has_poisson_arrivals(&self) -> bool {
        !matches!(self, Self::Gg1 { .. } | Self::Ggc { .. })
    }

    /// Check every parameter is inside its domain.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Domain`] naming the first invalid parameter.
    pub fn validate(&self) -> QueueResult<()> {
        match *self {
            Self::Mm1 {
                arrival_rate,
                service_rate,
            } => {
                require_positive("arrival_rate", arrival_rate)?;
                require_positive("service_rate", service_rate)?;
            }
            Self::Mmc {
                arrival_rate,
                service_rate,
                servers,
            } => {
                require_positive("arrival_rate", arrival_rate)?;
                require_positive("service_rate", service_rate)?;
                require_servers(servers)?;
            }
            Self::Mg1 {
                arrival_rate,
                service,
            } => {
                require_positive("arrival_rate", arrival_rate)?;
                service.validate("service")?;
            }
            Self::Mgc {
                arrival_rate,
                service,
                servers,
            } => {
                require_positive("arrival_rate", arrival_rate)?;
                service.validate("service")?;
                require_servers(servers)?;
            }
            Self::Gg1 { arrival, service } => {
                arrival.validate("arrival")?;
                service.validate("service")?;
            }
            Self::Ggc {
                arrival,
                service,
                servers,
            } => {
                arrival.validate("arrival")?;
                service.validate("service")?;
                require_servers(servers)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for QueueModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Mm1 {
                arrival_rate,
                service_rate,
            } => write!(f, "M/M/1 (λ={arrival_rate}, μ={service_rate})"),
            Self::Mmc {
                arrival_rate,
                service_rate,
                servers,
            } => write!(f, "M/M/c (λ={arrival_rate}, μ={service_rate}, c={servers})"),
            Self::Mg1 {
                arrival_rate,
                service,
            } => write!(f, "M/G/1 (λ={arrival_rate}, service={service})"),
            Self::Mgc {
                arrival_rate,
                service,
                servers,
            } => write!(f, "M/G/c (λ={arrival_rate}, service={service}, c={servers})"),
            Self::Gg1 { arrival, service } => {
                write!(f, "G/G/1 (arrival={arrival}, service={service})")
            }
            Self::Ggc {
                arrival,
                service,
                servers,
            } => write!(
                f,
                "G/G/c (arrival={arrival}, service={service}, c={servers})"
            ),
        }
    }
}
