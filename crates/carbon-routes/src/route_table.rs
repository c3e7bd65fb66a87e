//! Bidirectional lookup of known city-pair distances.
//!
//! A [`RouteTable`] is built once from a list of [`Route`]s and never
//! mutated afterwards. Place names are compared after normalization
//! (surrounding whitespace trimmed, Unicode lowercase), so
//! `" RIO DE JANEIRO, RJ "` and `"Rio de Janeiro, RJ"` name the same place.
//! Matching is exact on the normalized form; there is no fuzzy search.

use std::collections::BTreeSet;

use carbon_types::Route;
use tracing::{debug, info};

use crate::error::RouteError;

/// Normalize a place name for comparison.
pub fn normalize_place(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A route together with its precomputed normalized endpoints.
#[derive(Debug, Clone)]
struct IndexedRoute {
    route: Route,
    origin_key: String,
    destination_key: String,
}

/// Immutable table of known distances between places.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Routes in their original order. Lookup returns the first match.
    routes: Vec<IndexedRoute>,
    /// Every distinct place name, sorted ascending.
    places: Vec<String>,
}

impl RouteTable {
    /// Build a table from the given routes.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::EmptyPlace`] if an endpoint is blank, or
    /// [`RouteError::InvalidDistance`] if a distance is not a positive
    /// finite number.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut indexed = Vec::with_capacity(routes.len());
        let mut places = BTreeSet::new();

        for route in routes {
            let origin_key = normalize_place(&route.origin);
            let destination_key = normalize_place(&route.destination);

            if origin_key.is_empty() || destination_key.is_empty() {
                return Err(RouteError::EmptyPlace {
                    origin: route.origin,
                    destination: route.destination,
                });
            }
            if !route.distance_km.is_finite() || route.distance_km <= 0.0 {
                return Err(RouteError::InvalidDistance {
                    origin: route.origin,
                    destination: route.destination,
                    distance_km: route.distance_km,
                });
            }

            places.insert(route.origin.clone());
            places.insert(route.destination.clone());
            indexed.push(IndexedRoute {
                route,
                origin_key,
                destination_key,
            });
        }

        info!(
            route_count = indexed.len(),
            place_count = places.len(),
            "Route table built"
        );

        Ok(Self {
            routes: indexed,
            places: places.into_iter().collect(),
        })
    }

    /// Every distinct place appearing as an origin or destination, sorted
    /// ascending and without duplicates.
    pub fn list_places(&self) -> &[String] {
        &self.places
    }

    /// Look up the distance between two places.
    ///
    /// The `(a, b)` direction is searched first, then `(b, a)`. Returns
    /// `None` when neither direction is known.
    pub fn find_distance(&self, a: &str, b: &str) -> Option<f64> {
        let a_key = normalize_place(a);
        let b_key = normalize_place(b);

        let forward = self
            .routes
            .iter()
            .find(|r| r.origin_key == a_key && r.destination_key == b_key);
        let found = forward.or_else(|| {
            self.routes
                .iter()
                .find(|r| r.origin_key == b_key && r.destination_key == a_key)
        });

        match found {
            Some(indexed) => Some(indexed.route.distance_km),
            None => {
                debug!(origin = a, destination = b, "No known route");
                None
            }
        }
    }

    /// The routes in the order they were supplied.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|r| &r.route)
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table() -> RouteTable {
        let routes = vec![
            Route::new("Alpha", "Beta", 10.0),
            Route::new("Beta", "Gamma", 25.5),
            Route::new("Gamma", "Alpha", 40.0),
        ];
        RouteTable::new(routes).unwrap_or_else(|_| RouteTable {
            routes: Vec::new(),
            places: Vec::new(),
        })
    }

    #[test]
    fn finds_distance_in_both_directions() {
        let table = make_table();
        assert_eq!(table.find_distance("Alpha", "Beta"), Some(10.0));
        assert_eq!(table.find_distance("Beta", "Alpha"), Some(10.0));
        assert_eq!(table.find_distance("Alpha", "Gamma"), Some(40.0));
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        let table = make_table();
        assert_eq!(table.find_distance("  gAMMA ", "BETA"), Some(25.5));
    }

    #[test]
    fn unknown_pair_is_none() {
        let table = make_table();
        assert_eq!(table.find_distance("Alpha", "Delta"), None);
        assert_eq!(table.find_distance("Alpha", "Alpha"), None);
        assert_eq!(table.find_distance("", ""), None);
    }

    #[test]
    fn no_partial_matching() {
        let table = make_table();
        assert_eq!(table.find_distance("Alph", "Beta"), None);
        assert_eq!(table.find_distance("Alpha Beta", "Gamma"), None);
    }

    #[test]
    fn forward_match_wins_over_reverse() {
        let routes = vec![
            Route::new("B", "A", 7.0),
            Route::new("A", "B", 9.0),
        ];
        let table = RouteTable::new(routes);
        assert!(table.is_ok());
        let Ok(table) = table else { return };
        assert_eq!(table.find_distance("A", "B"), Some(9.0));
        assert_eq!(table.find_distance("B", "A"), Some(7.0));
    }

    #[test]
    fn places_are_sorted_and_unique() {
        let table = make_table();
        assert_eq!(table.list_places(), ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn rejects_non_positive_distance() {
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let result = RouteTable::new(vec![Route::new("A", "B", bad)]);
            assert!(matches!(result, Err(RouteError::InvalidDistance { .. })));
        }
    }

    #[test]
    fn rejects_blank_place() {
        let result = RouteTable::new(vec![Route::new("   ", "B", 5.0)]);
        assert!(matches!(result, Err(RouteError::EmptyPlace { .. })));
    }

    #[test]
    fn empty_table_is_allowed() {
        let table = RouteTable::new(Vec::new());
        assert!(table.is_ok_and(|t| t.is_empty() && t.list_places().is_empty()));
    }

    #[test]
    fn normalize_handles_accented_capitals() {
        assert_eq!(normalize_place("  SÃO PAULO, SP "), "são paulo, sp");
    }
}
