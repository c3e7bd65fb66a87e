//! Canonical table of Brazilian road distances.
//!
//! Links from São Paulo, Rio de Janeiro, and Brasília to the other major
//! capitals, plus short regional hops from a capital to a nearby city.
//! Distances are road kilometres, rounded to the nearest whole kilometre.

use carbon_types::Route;

use crate::error::RouteError;
use crate::route_table::RouteTable;

/// Return the canonical Brazilian routes in their published order.
pub fn brazil_routes() -> Vec<Route> {
    vec![
        // --- Capital to capital ---
        Route::new("São Paulo, SP", "Rio de Janeiro, RJ", 430.0),
        Route::new("São Paulo, SP", "Brasília, DF", 1015.0),
        Route::new("Rio de Janeiro, RJ", "Brasília, DF", 1148.0),
        Route::new("São Paulo, SP", "Belo Horizonte, MG", 586.0),
        Route::new("Rio de Janeiro, RJ", "Belo Horizonte, MG", 434.0),
        Route::new("Brasília, DF", "Belo Horizonte, MG", 716.0),
        Route::new("São Paulo, SP", "Salvador, BA", 1962.0),
        Route::new("Rio de Janeiro, RJ", "Salvador, BA", 1649.0),
        Route::new("Brasília, DF", "Salvador, BA", 1446.0),
        Route::new("São Paulo, SP", "Recife, PE", 2653.0),
        Route::new("Rio de Janeiro, RJ", "Recife, PE", 2340.0),
        Route::new("Brasília, DF", "Recife, PE", 2205.0),
        Route::new("São Paulo, SP", "Porto Alegre, RS", 1109.0),
        Route::new("Rio de Janeiro, RJ", "Porto Alegre, RS", 1554.0),
        Route::new("Brasília, DF", "Porto Alegre, RS", 2027.0),
        Route::new("São Paulo, SP", "Curitiba, PR", 408.0),
        Route::new("Rio de Janeiro, RJ", "Curitiba, PR", 852.0),
        Route::new("Brasília, DF", "Curitiba, PR", 1368.0),
        Route::new("São Paulo, SP", "Fortaleza, CE", 3120.0),
        Route::new("Rio de Janeiro, RJ", "Fortaleza, CE", 2807.0),
        Route::new("Brasília, DF", "Fortaleza, CE", 2200.0),
        Route::new("São Paulo, SP", "Manaus, AM", 3939.0),
        Route::new("Rio de Janeiro, RJ", "Manaus, AM", 3626.0),
        Route::new("Brasília, DF", "Manaus, AM", 2933.0),
        // --- Regional ---
        Route::new("São Paulo, SP", "Campinas, SP", 95.0),
        Route::new("Rio de Janeiro, RJ", "Niterói, RJ", 13.0),
        Route::new("Belo Horizonte, MG", "Ouro Preto, MG", 100.0),
        Route::new("São Paulo, SP", "Santos, SP", 72.0),
        Route::new("Rio de Janeiro, RJ", "Angra dos Reis, RJ", 156.0),
        Route::new("Brasília, DF", "Goiânia, GO", 209.0),
        Route::new("São Paulo, SP", "Ribeirão Preto, SP", 313.0),
        Route::new("Rio de Janeiro, RJ", "Vitória, ES", 522.0),
        Route::new("Belo Horizonte, MG", "Juiz de Fora, MG", 260.0),
        Route::new("Porto Alegre, RS", "Gramado, RS", 115.0),
        Route::new("Curitiba, PR", "Foz do Iguaçu, PR", 630.0),
        Route::new("Salvador, BA", "Feira de Santana, BA", 108.0),
        Route::new("Recife, PE", "Olinda, PE", 7.0),
        Route::new("Fortaleza, CE", "Caucaia, CE", 20.0),
        Route::new("Manaus, AM", "Manacapuru, AM", 68.0),
    ]
}

impl RouteTable {
    /// Build the table of canonical Brazilian routes.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] if the built-in data is malformed (should not
    /// happen with valid hard-coded data).
    pub fn brazil() -> Result<Self, RouteError> {
        Self::new(brazil_routes())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::brazil().unwrap()
    }

    #[test]
    fn canonical_table_builds() {
        assert_eq!(table().len(), 39);
    }

    #[test]
    fn every_route_resolves_both_ways() {
        let table = table();
        for route in brazil_routes() {
            let forward = table.find_distance(&route.origin, &route.destination);
            let reverse = table.find_distance(&route.destination, &route.origin);
            assert_eq!(forward, Some(route.distance_km), "{route:?}");
            assert_eq!(reverse, Some(route.distance_km), "{route:?}");
        }
    }

    #[test]
    fn every_route_ignores_case_and_padding() {
        let table = table();
        for route in brazil_routes() {
            let origin = format!("  {}\t", route.origin.to_uppercase());
            let destination = route.destination.to_lowercase();
            assert_eq!(
                table.find_distance(&origin, &destination),
                Some(route.distance_km),
                "{route:?}"
            );
            assert_eq!(
                table.find_distance(&destination, &origin),
                Some(route.distance_km),
                "{route:?}"
            );
        }
    }

    #[test]
    fn sao_paulo_to_rio_ignores_case_and_padding() {
        assert_eq!(
            table().find_distance("são paulo, sp", " RIO DE JANEIRO, RJ "),
            Some(430.0)
        );
    }

    #[test]
    fn unlinked_regional_cities_are_not_found() {
        let table = table();
        assert_eq!(table.find_distance("Olinda, PE", "Gramado, RS"), None);
        assert_eq!(table.find_distance("São Paulo", "Rio de Janeiro"), None);
    }

    #[test]
    fn places_cover_every_endpoint_exactly_once() {
        let table = table();
        let places = table.list_places();

        assert!(places.windows(2).all(|w| matches!(w, [a, b] if a < b)));
        for route in brazil_routes() {
            assert!(places.contains(&route.origin));
            assert!(places.contains(&route.destination));
        }
        assert_eq!(places.len(), 25);
        assert_eq!(places.first().map(String::as_str), Some("Angra dos Reis, RJ"));
    }
}
