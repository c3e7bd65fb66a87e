//! Core value structs for the carbon emissions estimator.
//!
//! Nothing here is mutated after construction. Routes are loaded once at
//! startup; every other struct is the result of a single calculation
//! request and is recomputed on demand.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{DistanceSource, TransportMode};

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// A known distance between two named places.
///
/// Direction carries no meaning: `(a, b)` implies the same distance for
/// `(b, a)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Route {
    /// First place, e.g. `"São Paulo, SP"`.
    pub origin: String,
    /// Second place.
    pub destination: String,
    /// Road distance in kilometres. Always positive.
    pub distance_km: f64,
}

impl Route {
    /// Build a route from borrowed place names.
    pub fn new(origin: &str, destination: &str, distance_km: f64) -> Self {
        Self {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            distance_km,
        }
    }
}

// ---------------------------------------------------------------------------
// Carbon credits
// ---------------------------------------------------------------------------

/// How many carbon credits offset a trip, and what they would cost today.
///
/// `credits_needed` is deterministic. `estimated_cost` is sampled from a
/// fluctuating market price and differs between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CreditEstimate {
    /// Whole credits required, rounded up.
    pub credits_needed: u64,
    /// Total price for those credits, two decimal places.
    #[ts(as = "String")]
    pub estimated_cost: Decimal,
}

// ---------------------------------------------------------------------------
// Comparison view
// ---------------------------------------------------------------------------

/// One row of the cross-mode comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ModeEmission {
    /// The mode this row describes.
    pub mode: TransportMode,
    /// Emissions for the compared distance, in kg CO2.
    pub emissions_kg: f64,
    /// Bar width relative to the highest-emitting mode (0--100).
    pub bar_percent: f64,
    /// Whether this is the lowest-emitting mode.
    pub eco_friendly: bool,
}

/// Emissions of every mode over the same distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EmissionComparison {
    /// The distance all rows were computed for.
    pub distance_km: f64,
    /// One row per mode, in enumeration order.
    pub entries: Vec<ModeEmission>,
    /// The lowest-emitting mode.
    pub eco_mode: TransportMode,
}

impl EmissionComparison {
    /// Emissions as a plain mode-to-kg mapping.
    pub fn as_map(&self) -> BTreeMap<TransportMode, f64> {
        self.entries
            .iter()
            .map(|row| (row.mode, row.emissions_kg))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Trip report
// ---------------------------------------------------------------------------

/// Everything the presentation layer renders after one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TripReport {
    /// Origin as entered (trimmed).
    pub origin: String,
    /// Destination as entered (trimmed).
    pub destination: String,
    /// Distance used for every figure below.
    pub distance_km: f64,
    /// Whether the distance was looked up or typed in.
    pub distance_source: DistanceSource,
    /// Selected mode.
    pub mode: TransportMode,
    /// Emissions for the selected mode, in kg CO2.
    pub emissions_kg: f64,
    /// Fill of the headline emission bar: one percent per 10 kg, capped at 100.
    pub emission_bar_percent: f64,
    /// All modes side by side.
    pub comparison: EmissionComparison,
    /// Offset estimate for the selected mode's emissions.
    pub credits: CreditEstimate,
    /// A tip for the selected mode.
    pub eco_tip: String,
    /// A general fact about CO2 and offsets.
    pub impact_fact: String,
}
