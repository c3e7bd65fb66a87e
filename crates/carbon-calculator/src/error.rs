//! Error types for the `carbon-calculator` crate.
//!
//! Every failure is deterministic and scoped to a single calculation
//! request. Nothing here is retried or swallowed; the caller decides what to
//! show the user.

use carbon_types::{TransportMode, UnknownModeError};
use rust_decimal::Decimal;

/// Errors returned by calculation operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    /// The mode is not in the configured emission-factor table.
    #[error("unknown transport mode: {mode}")]
    UnknownMode {
        /// The mode key as supplied.
        mode: String,
    },

    /// A distance is negative, NaN, or infinite.
    #[error("invalid distance: {distance_km} km")]
    InvalidDistance {
        /// The rejected distance.
        distance_km: f64,
    },

    /// An emissions figure is negative, NaN, or infinite.
    #[error("invalid emissions: {emissions_kg} kg")]
    InvalidEmissions {
        /// The rejected emissions figure.
        emissions_kg: f64,
    },

    /// Checked arithmetic on a credit count or price overflowed.
    #[error("arithmetic overflow in credit calculation")]
    ArithmeticOverflow,
}

impl From<UnknownModeError> for CalculatorError {
    fn from(err: UnknownModeError) -> Self {
        Self::UnknownMode { mode: err.mode }
    }
}

/// Errors that make a [`CalculatorConfig`](crate::CalculatorConfig) unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A mode has no emission factor.
    #[error("no emission factor configured for {0}")]
    MissingFactor(TransportMode),

    /// An emission factor is negative, NaN, or infinite.
    #[error("invalid emission factor for {mode}: {factor}")]
    InvalidFactor {
        /// The mode with the bad factor.
        mode: TransportMode,
        /// The rejected factor.
        factor: f64,
    },

    /// The kilograms-per-credit constant is not a positive finite number.
    #[error("kg_per_credit must be positive, got {0}")]
    InvalidKgPerCredit(f64),

    /// The price range is negative or inverted.
    #[error("invalid credit price range: {min}..={max}")]
    InvalidPriceRange {
        /// Lower bound per credit.
        min: Decimal,
        /// Upper bound per credit.
        max: Decimal,
    },
}
