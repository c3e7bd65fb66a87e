//! Emission arithmetic and the cross-mode comparison view.
//!
//! Emissions for a trip are `distance_km * factor[mode]`, in kg CO2. The
//! comparison view evaluates the same distance for every mode in
//! enumeration order and flags the lowest emitter. When two modes tie, the
//! one enumerated first wins.

use std::collections::BTreeMap;

use carbon_types::{EmissionComparison, ModeEmission, TransportMode};
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, ConfigError};

/// Percentage ceiling for comparison bars.
const MAX_BAR_PERCENT: f64 = 100.0;

/// Pure calculator over an injected, validated [`CalculatorConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionCalculator {
    config: CalculatorConfig,
}

impl Default for EmissionCalculator {
    /// A calculator using the canonical factors and credit settings.
    fn default() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }
}

impl EmissionCalculator {
    /// Create a calculator from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn new(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this calculator was built with.
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The emission factor for a mode, in kg CO2 per km.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::UnknownMode`] if the factor table has no
    /// entry for the mode.
    pub fn factor(&self, mode: TransportMode) -> Result<f64, CalculatorError> {
        self.config
            .emission_factors
            .get(&mode)
            .copied()
            .ok_or_else(|| CalculatorError::UnknownMode {
                mode: mode.as_str().to_owned(),
            })
    }

    /// Emissions in kg CO2 for travelling `distance_km` by `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidDistance`] if the distance is
    /// negative or not finite, or [`CalculatorError::UnknownMode`] if the
    /// mode has no factor.
    pub fn calculate_emissions(
        &self,
        distance_km: f64,
        mode: TransportMode,
    ) -> Result<f64, CalculatorError> {
        check_distance(distance_km)?;
        let factor = self.factor(mode)?;
        Ok(distance_km * factor)
    }

    /// Like [`calculate_emissions`](Self::calculate_emissions), with the
    /// mode given as its string key (e.g. a form value).
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::UnknownMode`] if the key names no mode.
    pub fn calculate_emissions_by_key(
        &self,
        distance_km: f64,
        mode_key: &str,
    ) -> Result<f64, CalculatorError> {
        let mode: TransportMode = mode_key.parse()?;
        self.calculate_emissions(distance_km, mode)
    }

    /// Emissions of every mode over the same distance, in enumeration order.
    ///
    /// # Errors
    ///
    /// Propagates the first error from
    /// [`calculate_emissions`](Self::calculate_emissions).
    pub fn calculate_all_emissions(
        &self,
        distance_km: f64,
    ) -> Result<BTreeMap<TransportMode, f64>, CalculatorError> {
        TransportMode::ALL
            .into_iter()
            .map(|mode| {
                self.calculate_emissions(distance_km, mode)
                    .map(|emissions_kg| (mode, emissions_kg))
            })
            .collect()
    }

    /// The mode with the lowest emissions for `distance_km`.
    ///
    /// # Errors
    ///
    /// Propagates errors from
    /// [`calculate_all_emissions`](Self::calculate_all_emissions).
    pub fn eco_friendly_mode(&self, distance_km: f64) -> Result<TransportMode, CalculatorError> {
        let all = self.calculate_all_emissions(distance_km)?;
        Ok(lowest_emitter(&all))
    }

    /// Build the comparison view for `distance_km`.
    ///
    /// Each row's bar is scaled against the highest emitter. Modes that emit
    /// nothing get an empty bar.
    ///
    /// # Errors
    ///
    /// Propagates errors from
    /// [`calculate_all_emissions`](Self::calculate_all_emissions).
    pub fn compare(&self, distance_km: f64) -> Result<EmissionComparison, CalculatorError> {
        let all = self.calculate_all_emissions(distance_km)?;
        let eco_mode = lowest_emitter(&all);
        let highest = all.values().copied().fold(0.0_f64, f64::max);

        let entries = all
            .iter()
            .map(|(&mode, &emissions_kg)| {
                let bar_percent = if emissions_kg > 0.0 && highest > 0.0 {
                    (emissions_kg / highest * 100.0).min(MAX_BAR_PERCENT)
                } else {
                    0.0
                };
                ModeEmission {
                    mode,
                    emissions_kg,
                    bar_percent,
                    eco_friendly: mode == eco_mode,
                }
            })
            .collect();

        debug!(distance_km, eco_mode = %eco_mode, "Emission comparison built");

        Ok(EmissionComparison {
            distance_km,
            entries,
            eco_mode,
        })
    }
}

/// Fill of the headline emission bar: one percent per 10 kg, capped at 100.
pub fn emission_bar_percent(emissions_kg: f64) -> f64 {
    (emissions_kg / 10.0).clamp(0.0, MAX_BAR_PERCENT)
}

/// Reject distances that are negative, NaN, or infinite.
fn check_distance(distance_km: f64) -> Result<(), CalculatorError> {
    if distance_km.is_finite() && distance_km >= 0.0 {
        Ok(())
    } else {
        Err(CalculatorError::InvalidDistance { distance_km })
    }
}

/// First mode (in enumeration order) holding the strict minimum.
fn lowest_emitter(all: &BTreeMap<TransportMode, f64>) -> TransportMode {
    // `min_by` keeps the first of several equal minimums. The map always
    // holds every mode, so the fallback is never taken.
    all.iter()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map_or(TransportMode::Bicycle, |(&mode, _)| mode)
}
