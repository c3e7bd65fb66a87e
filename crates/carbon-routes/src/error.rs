//! Error types for the `carbon-routes` crate.
//!
//! Lookups never fail: a missing route is an ordinary `None`. Errors only
//! arise while building a [`RouteTable`](crate::RouteTable) from data that
//! does not describe a usable route.

/// Errors that can occur while building a route table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// A route distance is zero, negative, NaN, or infinite.
    #[error("route {origin} -> {destination} has invalid distance {distance_km}")]
    InvalidDistance {
        /// Origin as supplied.
        origin: String,
        /// Destination as supplied.
        destination: String,
        /// The rejected distance.
        distance_km: f64,
    },

    /// A route endpoint is blank after trimming.
    #[error("route has a blank endpoint: {origin:?} -> {destination:?}")]
    EmptyPlace {
        /// Origin as supplied.
        origin: String,
        /// Destination as supplied.
        destination: String,
    },
}
