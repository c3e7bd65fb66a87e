//! Configuration values injected into the [`EmissionCalculator`].
//!
//! The emission-factor table, the kilograms offset by one carbon credit, and
//! the credit price range are all plain values handed to the calculator at
//! construction. Defaults match the canonical figures:
//!
//! | Mode    | kg CO2 / km |
//! |---------|-------------|
//! | bicycle | 0           |
//! | car     | 0.12        |
//! | bus     | 0.089       |
//! | truck   | 0.27        |
//!
//! One credit offsets 1000 kg; a credit trades between 50 and 150.
//!
//! [`EmissionCalculator`]: crate::EmissionCalculator

use std::collections::BTreeMap;

use carbon_types::TransportMode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default lower bound of the credit price.
const DEFAULT_PRICE_MIN: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Default upper bound of the credit price.
const DEFAULT_PRICE_MAX: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Tunables for emission and credit calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// kg CO2 emitted per km, per mode. Must cover every mode.
    #[serde(default = "default_emission_factors")]
    pub emission_factors: BTreeMap<TransportMode, f64>,

    /// kg CO2 offset by one carbon credit.
    #[serde(default = "default_kg_per_credit")]
    pub kg_per_credit: f64,

    /// Range the per-credit price is sampled from.
    #[serde(default)]
    pub price_range: PriceRange,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            emission_factors: default_emission_factors(),
            kg_per_credit: default_kg_per_credit(),
            price_range: PriceRange::default(),
        }
    }
}

impl CalculatorConfig {
    /// Check that the configuration describes a usable calculator.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking modes in
    /// enumeration order, then `kg_per_credit`, then the price range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for mode in TransportMode::ALL {
            let Some(&factor) = self.emission_factors.get(&mode) else {
                return Err(ConfigError::MissingFactor(mode));
            };
            if !factor.is_finite() || factor < 0.0 {
                return Err(ConfigError::InvalidFactor { mode, factor });
            }
        }

        if !self.kg_per_credit.is_finite() || self.kg_per_credit <= 0.0 {
            return Err(ConfigError::InvalidKgPerCredit(self.kg_per_credit));
        }

        self.price_range.validate()
    }
}

/// Inclusive bounds of the per-credit market price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Cheapest price per credit.
    #[serde(default = "default_price_min")]
    pub min: Decimal,

    /// Most expensive price per credit.
    #[serde(default = "default_price_max")]
    pub max: Decimal,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_MIN,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

impl PriceRange {
    /// Require `0 <= min <= max`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPriceRange`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min < Decimal::ZERO || self.min > self.max {
            return Err(ConfigError::InvalidPriceRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

fn default_emission_factors() -> BTreeMap<TransportMode, f64> {
    BTreeMap::from([
        (TransportMode::Bicycle, 0.0),
        (TransportMode::Car, 0.12),
        (TransportMode::Bus, 0.089),
        (TransportMode::Truck, 0.27),
    ])
}

const fn default_kg_per_credit() -> f64 {
    1000.0
}

const fn default_price_min() -> Decimal {
    DEFAULT_PRICE_MIN
}

const fn default_price_max() -> Decimal {
    DEFAULT_PRICE_MAX
}
