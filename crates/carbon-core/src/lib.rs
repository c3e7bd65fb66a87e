//! Configuration and trip estimation for the carbon emissions estimator.
//!
//! This crate ties the route table and the emission calculator together
//! behind one entry point, [`Estimator::estimate`], and loads both from
//! `carbon-config.yaml`.
//!
//! # Modules
//!
//! - [`config`] -- [`EstimatorConfig`]: YAML loading, defaults, and the
//!   `CARBON_LOG_LEVEL` override.
//! - [`estimator`] -- [`TripRequest`] validation and [`TripReport`]
//!   assembly.
//!
//! [`TripReport`]: carbon_types::TripReport

pub mod config;
pub mod estimator;

pub use config::{ConfigError, EstimatorConfig, LoggingConfig};
pub use estimator::{EstimateError, Estimator, TripRequest};
