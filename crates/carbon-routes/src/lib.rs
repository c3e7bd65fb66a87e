//! Known city-pair distances for the carbon emissions estimator.
//!
//! Distances are not computed: they come from a static, hand-authored table
//! of road routes. A route is usable in either direction.
//!
//! # Modules
//!
//! - [`brazil`] -- Canonical table of 39 Brazilian routes across 25 cities.
//! - [`error`] -- Error types for route-table construction.
//! - [`route_table`] -- [`RouteTable`]: normalized, bidirectional lookup
//!   and the sorted place list used for input suggestions.

pub mod brazil;
pub mod error;
pub mod route_table;

// Re-export primary types at crate root.
pub use brazil::brazil_routes;
pub use error::RouteError;
pub use route_table::{RouteTable, normalize_place};
