//! Scenario configuration with YAML schema and validation.
//!
//! A scenario names one queue model plus the seed and report settings used
//! to evaluate it. Loading runs three checks in order:
//! - serde parsing with unknown fields rejected
//! - derive-level constraints via `validator`
//! - semantic validation of the model parameters
//!
//! ```yaml
//! schema_version: "1.0"
//! scenario:
//!   name: "bank tellers"
//! model:
//!   kind: mgc
//!   arrival_rate: 2.0
//!   servers: 3
//!   service: { kind: uniform, min: 1.0, max: 2.0 }
//! reproducibility:
//!   seed: 42
//! report:
//!   precision: 2
//!   show_customers: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{QueueError, QueueResult};
use crate::model::QueueModel;

/// Top-level scenario configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Scenario metadata.
    #[validate(nested)]
    #[serde(default)]
    pub scenario: ScenarioMeta,

    /// The queue model to evaluate.
    pub model: QueueModel,

    /// Reproducibility settings.
    #[validate(nested)]
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Report formatting.
    #[validate(nested)]
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> QueueResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> QueueResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> QueueResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create a builder for programmatic construction.
    #[must_use]
    pub fn builder() -> ScenarioConfigBuilder {
        ScenarioConfigBuilder::default()
    }

    /// Run every validation pass on an already-built configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn check(&self) -> QueueResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Constraints the schema cannot express.
    fn validate_semantic(&self) -> QueueResult<()> {
        if self.schema_version.split('.').next() != Some("1") {
            return Err(QueueError::config(format!(
                "unsupported schema version {}",
                self.schema_version
            )));
        }
        self.model.validate()
    }

    /// Seed used for simulation runs.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.reproducibility.seed
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            scenario: ScenarioMeta::default(),
            model: QueueModel::Mm1 {
                arrival_rate: 1.0,
                service_rate: 2.0,
            },
            reproducibility: ReproducibilityConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct ScenarioConfigBuilder {
    name: Option<String>,
    model: Option<QueueModel>,
    seed: Option<u64>,
    precision: Option<u32>,
    show_customers: Option<bool>,
}

impl ScenarioConfigBuilder {
    /// Set the scenario name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the queue model.
    #[must_use]
    pub const fn model(mut self, model: QueueModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set report precision in decimal places.
    #[must_use]
    pub const fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Whether reports list every customer.
    #[must_use]
    pub const fn show_customers(mut self, show: bool) -> Self {
        self.show_customers = Some(show);
        self
    }

    /// Build the configuration.
    ///
    /// The result is not validated; call [`ScenarioConfig::check`] before use
    /// if the inputs are untrusted.
    #[must_use]
    pub fn build(self) -> ScenarioConfig {
        let mut config = ScenarioConfig::default();

        if let Some(name) = self.name {
            config.scenario.name = name;
        }
        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(seed) = self.seed {
            config.reproducibility.seed = seed;
        }
        if let Some(precision) = self.precision {
            config.report.precision = precision;
        }
        if let Some(show) = self.show_customers {
            config.report.show_customers = show;
        }

        config
    }
}

/// Scenario metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScenarioMeta {
    /// Scenario name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}

/// Reproducibility settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReproducibilityConfig {
    /// Seed for the simulation random source.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_seed() -> u64 {
    42
}

impl Default for ReproducibilityConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// Report formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Decimal places for displayed values.
    #[validate(range(max = 10))]
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// List every simulated customer.
    #[serde(default = "default_true")]
    pub show_customers: bool,
}

const fn default_precision() -> u32 {
    2
}

const fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            show_customers: true,
        }
    }
}
