//! Trip estimation: validates a form-style request, resolves the distance,
//! and assembles a [`TripReport`].
//!
//! Validation runs in a fixed order so a request with several problems
//! always reports the same one:
//!
//! 1. origin and destination must both be non-blank
//! 2. the distance comes from the request, else from the route table
//! 3. the distance must be finite and strictly positive
//! 4. the mode key must name a known mode

use carbon_calculator::tips::CO2_EQUIVALENT_FACT;
use carbon_calculator::{CalculatorError, EmissionCalculator, emission_bar_percent, random_tip};
use carbon_routes::RouteTable;
use carbon_types::{DistanceSource, TransportMode, TripReport, UnknownModeError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One trip as entered in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Origin place name.
    pub origin: String,
    /// Destination place name.
    pub destination: String,
    /// Distance typed in by the user. Looked up from the route table when absent.
    #[serde(default)]
    pub distance_km: Option<f64>,
    /// Transport mode key, e.g. `"car"`.
    pub mode: String,
}

impl TripRequest {
    /// A request that relies on the route table for its distance.
    pub fn new(origin: &str, destination: &str, mode: &str) -> Self {
        Self {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            distance_km: None,
            mode: mode.to_owned(),
        }
    }

    /// Use `distance_km` instead of the route table.
    #[must_use]
    pub const fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }
}

/// Errors raised while estimating a trip.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// Origin or destination is blank.
    #[error("origin and destination are both required")]
    MissingPlaces,

    /// No distance was given and the route table has no entry for the pair.
    #[error("no known route between {origin} and {destination}")]
    RouteNotFound {
        /// Origin as requested.
        origin: String,
        /// Destination as requested.
        destination: String,
    },

    /// The distance is zero, negative, or not a number.
    #[error("invalid distance: {distance_km} km")]
    InvalidDistance {
        /// The rejected distance.
        distance_km: f64,
    },

    /// The mode key names no transport mode.
    #[error("unknown transport mode: {mode}")]
    UnknownMode {
        /// The rejected key.
        mode: String,
    },

    /// A calculator step failed.
    #[error("calculation failed: {0}")]
    Calculation(#[from] CalculatorError),
}

/// Route table and calculator wired together.
#[derive(Debug, Clone)]
pub struct Estimator {
    routes: RouteTable,
    calculator: EmissionCalculator,
}

impl Estimator {
    /// Create an estimator over `routes` using `calculator`.
    pub const fn new(routes: RouteTable, calculator: EmissionCalculator) -> Self {
        Self { routes, calculator }
    }

    /// The route table.
    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The calculator.
    pub const fn calculator(&self) -> &EmissionCalculator {
        &self.calculator
    }

    /// Resolve the distance for a trip: the manual value when given,
    /// otherwise the route table's.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::RouteNotFound`] when there is no manual
    /// distance and no route, or [`EstimateError::InvalidDistance`] when the
    /// distance is not a positive finite number.
    pub fn resolve_distance(
        &self,
        origin: &str,
        destination: &str,
        manual_km: Option<f64>,
    ) -> Result<(f64, DistanceSource), EstimateError> {
        let (distance_km, source) = match manual_km {
            Some(km) => (km, DistanceSource::Manual),
            None => {
                let km = self.routes.find_distance(origin, destination).ok_or_else(|| {
                    EstimateError::RouteNotFound {
                        origin: origin.to_owned(),
                        destination: destination.to_owned(),
                    }
                })?;
                (km, DistanceSource::RouteTable)
            }
        };

        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(EstimateError::InvalidDistance { distance_km });
        }
        Ok((distance_km, source))
    }

    /// Estimate one trip.
    ///
    /// `rng` drives the credit price and the eco tip.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure in the order listed in the
    /// module docs, or [`EstimateError::Calculation`] if a calculator step
    /// fails.
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        request: &TripRequest,
        rng: &mut R,
    ) -> Result<TripReport, EstimateError> {
        let origin = request.origin.trim();
        let destination = request.destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(EstimateError::MissingPlaces);
        }

        let (distance_km, distance_source) =
            self.resolve_distance(origin, destination, request.distance_km)?;

        let mode: TransportMode = request
            .mode
            .parse()
            .map_err(|err: UnknownModeError| EstimateError::UnknownMode { mode: err.mode })?;

        let emissions_kg = self.calculator.calculate_emissions(distance_km, mode)?;
        let comparison = self.calculator.compare(distance_km)?;
        let credits = self.calculator.estimate_credits(emissions_kg, rng)?;
        let eco_tip = random_tip(mode, rng).to_owned();

        debug!(
            origin,
            destination,
            source = ?distance_source,
            eco_mode = %comparison.eco_mode,
            "Trip resolved"
        );
        info!(
            distance_km,
            mode = %mode,
            emissions_kg,
            credits = credits.credits_needed,
            cost = %credits.estimated_cost,
            "Trip estimated"
        );

        Ok(TripReport {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            distance_km,
            distance_source,
            mode,
            emissions_kg,
            emission_bar_percent: emission_bar_percent(emissions_kg),
            comparison,
            credits,
            eco_tip,
            impact_fact: CO2_EQUIVALENT_FACT.to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use carbon_types::Route;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn small_estimator() -> Estimator {
        let routes = RouteTable::new(vec![
            Route::new("Campinas, SP", "Santos, SP", 160.0),
            Route::new("Campinas, SP", "Sorocaba, SP", 85.0),
        ])
        .unwrap();
        Estimator::new(routes, EmissionCalculator::default())
    }

    #[test]
    fn blank_places_are_checked_first() {
        let est = small_estimator();
        let mut rng = SmallRng::seed_from_u64(1);
        // Also has a bad distance and a bad mode; places win.
        let request = TripRequest::new("  ", "Santos, SP", "plane").with_distance(-1.0);
        assert_eq!(
            est.estimate(&request, &mut rng),
            Err(EstimateError::MissingPlaces)
        );
    }

    #[test]
    fn distance_is_checked_before_mode() {
        let est = small_estimator();
        let mut rng = SmallRng::seed_from_u64(1);
        let request = TripRequest::new("A", "B", "plane").with_distance(0.0);
        assert!(matches!(
            est.estimate(&request, &mut rng),
            Err(EstimateError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn unknown_route_without_manual_distance() {
        let est = small_estimator();
        let mut rng = SmallRng::seed_from_u64(1);
        let request = TripRequest::new("Santos, SP", "Sorocaba, SP", "car");
        assert_eq!(
            est.estimate(&request, &mut rng),
            Err(EstimateError::RouteNotFound {
                origin: "Santos, SP".to_owned(),
                destination: "Sorocaba, SP".to_owned(),
            })
        );
    }

    #[test]
    fn manual_distance_overrides_route_table() {
        let est = small_estimator();
        let resolved = est.resolve_distance("Campinas, SP", "Santos, SP", Some(170.0));
        assert_eq!(resolved, Ok((170.0, DistanceSource::Manual)));

        let resolved = est.resolve_distance("santos, sp", "campinas, sp", None);
        assert_eq!(resolved, Ok((160.0, DistanceSource::RouteTable)));
    }

    #[test]
    fn non_finite_manual_distance_rejected() {
        let est = small_estimator();
        for bad in [f64::NAN, f64::INFINITY, -3.0] {
            assert!(matches!(
                est.resolve_distance("A", "B", Some(bad)),
                Err(EstimateError::InvalidDistance { .. })
            ));
        }
    }

    #[test]
    fn unknown_mode_keeps_the_raw_key() {
        let est = small_estimator();
        let mut rng = SmallRng::seed_from_u64(1);
        let request = TripRequest::new("Campinas, SP", "Santos, SP", "Plane ");
        assert_eq!(
            est.estimate(&request, &mut rng),
            Err(EstimateError::UnknownMode {
                mode: "Plane ".to_owned()
            })
        );
    }

    #[test]
    fn report_uses_trimmed_places_and_route_distance() {
        let est = small_estimator();
        let mut rng = SmallRng::seed_from_u64(11);
        let request = TripRequest::new(" Campinas, SP ", "Sorocaba, SP", "bus");
        let report = est.estimate(&request, &mut rng);
        let report = report.unwrap();

        assert_eq!(report.origin, "Campinas, SP");
        assert_eq!(report.distance_source, DistanceSource::RouteTable);
        assert_eq!(report.mode, TransportMode::Bus);
        assert!((report.emissions_kg - 85.0 * 0.089).abs() < 1e-9);
        assert_eq!(report.comparison.eco_mode, TransportMode::Bicycle);
        assert_eq!(report.credits.credits_needed, 1);
        assert_eq!(report.impact_fact, CO2_EQUIVALENT_FACT);
        assert!(carbon_calculator::tips::tips_for(TransportMode::Bus)
            .contains(&report.eco_tip.as_str()));
    }

    #[test]
    fn request_deserializes_without_distance() {
        let json = r#"{"origin":"A","destination":"B","mode":"car"}"#;
        let request: Result<TripRequest, _> = serde_json::from_str(json);
        assert_eq!(request.ok(), Some(TripRequest::new("A", "B", "car")));
    }
}
