//! Error types for queuesim.
//!
//! Every fallible operation returns `Result<T, QueueError>`. Invalid model
//! parameters fail fast with [`QueueError::Domain`] before any computation.
//! An unstable queue (utilization at or above one) is a valid result, not an
//! error; see [`crate::analytical::AnalyticalResult::is_stable`].

use thiserror::Error;

/// Result type alias for queuesim operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Unified error type for all queuesim operations.
#[derive(Debug, Error)]
pub enum QueueError {
    // ===== Domain Errors =====
    /// A model parameter is outside its mathematical domain.
    #[error("Domain error: {parameter} {message}")]
    Domain {
        /// Name of the offending parameter.
        parameter: String,
        /// What is wrong with it.
        message: String,
    },

    /// Simulation requested for a model the engine cannot simulate.
    #[error("Simulation is not supported for {model} (general arrivals)")]
    UnsupportedSimulation {
        /// Kendall notation of the model.
        model: String,
    },

    // ===== Configuration Errors =====
    /// Invalid scenario configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl QueueError {
    /// Create a domain error for a named parameter.
    #[must_use]
    pub fn domain(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Domain {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error was caused by invalid model parameters.
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

impl From<serde_json::Error> for QueueError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Require a strictly positive, finite value.
///
/// # Errors
///
/// Returns [`QueueError::Domain`] if `value` is NaN, infinite or `<= 0`.
pub fn require_positive(parameter: &str, value: f64) -> QueueResult<f64> {
    if !value.is_finite() {
        return Err(QueueError::domain(
            parameter,
            format!("must be a finite number, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(QueueError::domain(
            parameter,
            format!("must be positive, got {value}"),
        ));
    }
    Ok(value)
}

/// Require a finite value that is zero or greater.
///
/// # Errors
///
/// Returns [`QueueError::Domain`] if `value` is NaN, infinite or negative.
pub fn require_non_negative(parameter: &str, value: f64) -> QueueResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(QueueError::domain(
            parameter,
            format!("must be a finite non-negative number, got {value}"),
        ));
    }
    Ok(value)
}

/// Require at least one server.
///
/// # Errors
///
/// Returns [`QueueError::Domain`] if `servers` is zero.
pub fn require_servers(servers: u32) -> QueueResult<u32> {
    if servers == 0 {
        return Err(QueueError::domain("servers", "must be at least 1, got 0"));
    }
    Ok(servers)
}
