//! Command-line front end for the carbon emissions estimator.
//!
//! Estimates the CO2 emitted by one trip, compares it across every
//! transport mode, and prices the carbon credits needed to offset it.
//!
//! # Startup Sequence
//!
//! 1. Parse arguments
//! 2. Load configuration from `--config` or `carbon-config.yaml`
//! 3. Initialize structured logging (tracing) on stderr
//! 4. Build the route table and calculator
//! 5. List places, or estimate the trip and print it as text or JSON

mod error;
mod render;

use std::path::{Path, PathBuf};

use carbon_core::{EstimatorConfig, TripRequest};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Configuration file read when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "carbon-config.yaml";

/// Exit code for a trip the estimator rejects.
const EXIT_REJECTED: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "carbon-cli",
    author,
    version,
    about = "Estimate the CO2 emissions of a trip and the carbon credits to offset them"
)]
struct Args {
    /// Origin place, e.g. "São Paulo, SP"
    #[arg(short, long)]
    origin: Option<String>,

    /// Destination place, e.g. "Rio de Janeiro, RJ"
    #[arg(short, long)]
    destination: Option<String>,

    /// Distance in km; looked up from the route table when omitted
    #[arg(long)]
    distance: Option<f64>,

    /// Transport mode: bicycle, car, bus, or truck
    #[arg(short, long, default_value = "car")]
    mode: String,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the credit price and tip selection
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print every known place and exit
    #[arg(long)]
    list_places: bool,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the report cannot
/// be serialized. Rejected trips print a message and exit with code 2.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 1. Load configuration before logging so its level can seed the filter.
    let config = load_config(args.config.as_deref())?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        locale = %config.locale,
        custom_routes = config.routes.is_some(),
        "Configuration loaded"
    );

    // 3. Build the estimator.
    let locale = config.number_locale().map_err(CliError::from)?;
    let estimator = config.build_estimator().map_err(CliError::from)?;

    if args.list_places {
        print!("{}", render::render_places(estimator.routes().list_places()));
        return Ok(());
    }

    // 4. Estimate.
    let request = TripRequest {
        origin: args.origin.unwrap_or_default(),
        destination: args.destination.unwrap_or_default(),
        distance_km: args.distance,
        mode: args.mode,
    };
    let result = match args.seed {
        Some(seed) => estimator.estimate(&request, &mut SmallRng::seed_from_u64(seed)),
        None => estimator.estimate(&request, &mut rand::rng()),
    };
    let report = match result {
        Ok(report) => report,
        Err(err) => {
            warn!(error = %err, "Trip rejected");
            eprintln!("{}", render::user_message(&err));
            std::process::exit(EXIT_REJECTED);
        }
    };

    // 5. Print.
    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(CliError::from)?;
        println!("{json}");
    } else {
        print!("{}", render::render_report(&report, &locale));
    }

    Ok(())
}

/// Load configuration from `path`, or from `carbon-config.yaml` if it
/// exists, or fall back to defaults.
fn load_config(path: Option<&Path>) -> Result<EstimatorConfig, CliError> {
    if let Some(path) = path {
        return Ok(EstimatorConfig::from_file(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Ok(EstimatorConfig::from_file(default_path)?)
    } else {
        Ok(EstimatorConfig::parse("")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_with_defaults() {
        let args = Args::try_parse_from(["carbon-cli", "-o", "A", "-d", "B"]);
        assert!(args.is_ok());
        let Ok(args) = args else { return };
        assert_eq!(args.mode, "car");
        assert_eq!(args.distance, None);
        assert!(!args.json);
    }

    #[test]
    fn args_parse_every_flag() {
        let args = Args::try_parse_from([
            "carbon-cli",
            "--origin",
            "Recife, PE",
            "--destination",
            "Olinda, PE",
            "--distance",
            "7.5",
            "--mode",
            "bus",
            "--seed",
            "42",
            "--json",
        ]);
        assert!(args.is_ok());
        let Ok(args) = args else { return };
        assert_eq!(args.origin.as_deref(), Some("Recife, PE"));
        assert_eq!(args.distance, Some(7.5));
        assert_eq!(args.seed, Some(42));
        assert!(args.json);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/carbon-config.yaml")));
        assert!(matches!(result, Err(CliError::Config { .. })));
    }
}
