//! Shared type definitions for the carbon emissions estimator.
//!
//! This crate is the single source of truth for the values that cross the
//! boundary between the calculation core and the browser front end. Types
//! flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`enums`] -- Transport modes, their display profiles, distance provenance
//! - [`structs`] -- Routes, credit estimates, comparison rows, trip reports

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{DistanceSource, ModeProfile, TransportMode, UnknownModeError};
pub use structs::{CreditEstimate, EmissionComparison, ModeEmission, Route, TripReport};

#[cfg(test)]
mod tests {
    //! Type export and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // The files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::enums::TransportMode::export_all();
        let _ = crate::enums::DistanceSource::export_all();
        let _ = crate::structs::Route::export_all();
        let _ = crate::structs::CreditEstimate::export_all();
        let _ = crate::structs::ModeEmission::export_all();
        let _ = crate::structs::EmissionComparison::export_all();
        let _ = crate::structs::TripReport::export_all();
    }

    #[test]
    fn credit_estimate_serializes_cost_as_string() {
        let estimate = crate::CreditEstimate {
            credits_needed: 1,
            estimated_cost: rust_decimal::Decimal::new(9_875, 2),
        };
        let json = serde_json::to_value(&estimate).unwrap_or_default();
        assert_eq!(json["credits_needed"], 1);
        assert_eq!(json["estimated_cost"], "98.75");
    }
}
