//! Configuration loading and typed config structures for the estimator.
//!
//! The canonical configuration lives in `carbon-config.yaml` at the project
//! root. Every field is optional; anything left out falls back to the
//! canonical factors, credit settings, Brazilian route table, and `pt-BR`
//! display locale.
//!
//! ```yaml
//! calculator:
//!   emission_factors: { bicycle: 0, car: 0.12, bus: 0.089, truck: 0.27 }
//!   kg_per_credit: 1000
//!   price_range: { min: 50, max: 150 }
//! locale: pt-BR
//! logging:
//!   level: info
//! # routes:            # replaces the built-in table when present
//! #   - { origin: "A", destination: "B", distance_km: 12 }
//! ```

use std::path::Path;

use carbon_calculator::{CalculatorConfig, EmissionCalculator, NumberLocale};
use carbon_routes::{RouteError, RouteTable};
use carbon_types::Route;
use serde::Deserialize;

use crate::estimator::Estimator;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The calculator section does not validate.
    #[error("invalid calculator config: {source}")]
    Calculator {
        /// The underlying validation error.
        #[from]
        source: carbon_calculator::ConfigError,
    },

    /// The inline route list does not build a table.
    #[error("invalid route table: {source}")]
    Routes {
        /// The underlying route error.
        #[from]
        source: RouteError,
    },

    /// The locale tag is not supported.
    #[error("unsupported locale: {0}")]
    UnknownLocale(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level estimator configuration.
///
/// Mirrors the structure of `carbon-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EstimatorConfig {
    /// Emission factors, kg per credit, and price range.
    #[serde(default)]
    pub calculator: CalculatorConfig,

    /// Route list replacing the built-in Brazilian table.
    #[serde(default)]
    pub routes: Option<Vec<Route>>,

    /// Display locale tag (`pt-BR` or `en-US`).
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EstimatorConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `CARBON_LOG_LEVEL` overrides `logging.level`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml reads an empty document as a unit value, not a map.
        if yaml.trim().is_empty() {
            let mut config = Self::default();
            config.logging.apply_env_overrides();
            return Ok(config);
        }
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Resolve the configured display locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLocale`] for an unsupported tag.
    pub fn number_locale(&self) -> Result<NumberLocale, ConfigError> {
        NumberLocale::from_tag(&self.locale)
            .ok_or_else(|| ConfigError::UnknownLocale(self.locale.clone()))
    }

    /// Build the route table: the inline list if present, otherwise the
    /// canonical Brazilian routes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Routes`] if a route is malformed.
    pub fn route_table(&self) -> Result<RouteTable, ConfigError> {
        let table = match &self.routes {
            Some(routes) => RouteTable::new(routes.clone())?,
            None => RouteTable::brazil()?,
        };
        Ok(table)
    }

    /// Validate everything and assemble an [`Estimator`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Calculator`] or [`ConfigError::Routes`] if
    /// either section is invalid.
    pub fn build_estimator(&self) -> Result<Estimator, ConfigError> {
        let calculator = EmissionCalculator::new(self.calculator.clone())?;
        let routes = self.route_table()?;
        Ok(Estimator::new(routes, calculator))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Apply the `CARBON_LOG_LEVEL` environment override, if set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("CARBON_LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.level = level;
            }
        }
    }
}

fn default_locale() -> String {
    "pt-BR".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
