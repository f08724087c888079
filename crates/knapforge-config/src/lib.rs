//! Configuration system for KnapForge.
//!
//! Load selection configuration from TOML or YAML files to choose the
//! algorithm, budget, item filter and benchmark settings without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use knapforge_config::{Algorithm, SelectionConfig};
//!
//! let config = SelectionConfig::from_toml_str(r#"
//!     budget = 2500.0
//!     algorithm = "exhaustive"
//!
//!     [filter]
//!     min_value = 1.0
//!     max_value = 2500.0
//!     max_items = 20
//! "#).unwrap();
//!
//! assert_eq!(config.budget, Some(2500.0));
//! assert_eq!(config.algorithm, Algorithm::Exhaustive);
//! assert_eq!(config.filter.unwrap().max_items, 20);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use knapforge_config::SelectionConfig;
//!
//! let config = SelectionConfig::load("knapforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use knapforge_core::{FilterCriteria, MAX_SUBSET_ITEMS};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main selection configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SelectionConfig {
    /// Maximum total cost of the selection.
    #[serde(default)]
    pub budget: Option<f64>,

    /// Which optimizer answers the selection.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Path of the `^`-delimited item database.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Item filter applied before optimizing.
    #[serde(default)]
    pub filter: Option<FilterCriteria>,

    /// Timing harness settings.
    #[serde(default)]
    pub benchmark: BenchmarkSettings,
}

impl SelectionConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Loads a file, choosing YAML for `.yaml`/`.yml` extensions and TOML
    /// otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Sets the budget.
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the item database path.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Sets the item filter.
    pub fn with_filter(mut self, filter: FilterCriteria) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Checks the configuration for values no optimizer can run with.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapforge_config::SelectionConfig;
    ///
    /// assert!(SelectionConfig::new().with_budget(10.0).validate().is_ok());
    /// assert!(SelectionConfig::new().with_budget(-1.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(budget) = self.budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "budget must be a non-negative number, got {}",
                    budget
                )));
            }
        }

        if let Some(filter) = &self.filter {
            if filter.min_value > filter.max_value {
                return Err(ConfigError::Invalid(format!(
                    "filter min_value {} exceeds max_value {}",
                    filter.min_value, filter.max_value
                )));
            }
            if self.algorithm == Algorithm::Exhaustive && filter.max_items > MAX_SUBSET_ITEMS {
                return Err(ConfigError::Invalid(format!(
                    "exhaustive search needs filter max_items <= {}, got {}",
                    MAX_SUBSET_ITEMS, filter.max_items
                )));
            }
        }

        self.benchmark.validate()
    }
}

/// Selection algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Ratio-ordered greedy heuristic.
    #[default]
    Greedy,

    /// Enumeration of every subset.
    Exhaustive,
}

impl Algorithm {
    /// All algorithms, in reporting order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Exhaustive, Algorithm::Greedy];

    /// Returns the lowercase name used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Exhaustive => "exhaustive",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Algorithm::Greedy),
            "exhaustive" => Ok(Algorithm::Exhaustive),
            other => Err(ConfigError::Invalid(format!(
                "unknown algorithm '{}', expected 'greedy' or 'exhaustive'",
                other
            ))),
        }
    }
}

/// Timing harness settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BenchmarkSettings {
    /// Largest exhaustive input size measured.
    pub max_size: usize,

    /// Measured runs per size and algorithm.
    pub run_count: usize,

    /// Unmeasured runs per size and algorithm.
    pub warmup_count: usize,

    /// Greedy input size is this multiple of the exhaustive size.
    pub greedy_size_multiplier: usize,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            max_size: 20,
            run_count: 10,
            warmup_count: 0,
            greedy_size_multiplier: 200,
        }
    }
}

impl BenchmarkSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_size > MAX_SUBSET_ITEMS {
            return Err(ConfigError::Invalid(format!(
                "benchmark max_size must be <= {}, got {}",
                MAX_SUBSET_ITEMS, self.max_size
            )));
        }
        if self.run_count == 0 {
            return Err(ConfigError::Invalid(
                "benchmark run_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
