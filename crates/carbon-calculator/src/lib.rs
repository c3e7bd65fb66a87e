//! Emission, comparison, and carbon-credit arithmetic.
//!
//! Every function here is pure over an injected [`CalculatorConfig`],
//! except the credit price, which is sampled from a caller-supplied random
//! source on each call.
//!
//! # Modules
//!
//! - [`config`] -- [`CalculatorConfig`]: emission factors, kg per credit,
//!   and the credit price range, with canonical defaults and validation.
//! - [`emissions`] -- [`EmissionCalculator`]: per-mode emissions, the
//!   all-modes map, the eco-friendly mode, and the comparison view.
//! - [`credits`] -- Credits needed (ceiling) and sampled credit cost.
//! - [`format`] -- Locale-aware number and currency display.
//! - [`tips`] -- Eco tips per mode and general impact facts.
//! - [`error`] -- [`CalculatorError`] and [`ConfigError`].
//!
//! # Usage
//!
//! ```
//! use carbon_calculator::EmissionCalculator;
//! use carbon_types::TransportMode;
//!
//! let calc = EmissionCalculator::default();
//! let kg = calc.calculate_emissions(100.0, TransportMode::Bicycle);
//! assert_eq!(kg, Ok(0.0));
//! assert_eq!(calc.eco_friendly_mode(100.0), Ok(TransportMode::Bicycle));
//! assert_eq!(calc.carbon_credits_needed(1001.0), Ok(2));
//! ```

pub mod config;
pub mod credits;
pub mod emissions;
pub mod error;
pub mod format;
pub mod tips;

// Re-export primary types at crate root.
pub use config::{CalculatorConfig, PriceRange};
pub use emissions::{EmissionCalculator, emission_bar_percent};
pub use error::{CalculatorError, ConfigError};
pub use format::NumberLocale;
pub use tips::random_tip;
