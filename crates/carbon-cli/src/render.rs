//! Plain-text rendering of a [`TripReport`].
//!
//! Sections follow the results page: result, comparison, credits, tip.
//! Copy is in Brazilian Portuguese; numbers follow the configured locale.

use std::fmt::Write as _;

use carbon_calculator::NumberLocale;
use carbon_core::EstimateError;
use carbon_types::{DistanceSource, TripReport};

/// Cells in a full bar.
const BAR_WIDTH: u32 = 20;

/// Render the full report.
pub fn render_report(report: &TripReport, locale: &NumberLocale) -> String {
    let mut out = String::new();
    let profile = report.mode.profile();
    let source = match report.distance_source {
        DistanceSource::RouteTable => "tabela de rotas",
        DistanceSource::Manual => "informada",
    };

    // `write!` into a String cannot fail.
    let _ = writeln!(out, "{} → {}", report.origin, report.destination);
    let _ = writeln!(
        out,
        "Distância: {} km ({source})",
        locale.format_number(report.distance_km, 0)
    );
    let _ = writeln!(out, "Transporte: {} {}", profile.icon, profile.label);
    let _ = writeln!(
        out,
        "Emissões: {} kg CO2  {}",
        locale.format_number(report.emissions_kg, 2),
        bar(report.emission_bar_percent)
    );

    let _ = writeln!(out, "\nComparação entre meios de transporte:");
    for entry in &report.comparison.entries {
        let profile = entry.mode.profile();
        let badge = if entry.eco_friendly { "  ✓ mais ecológico" } else { "" };
        let _ = writeln!(
            out,
            "  {} {:<10} {:>10} kg  {}{badge}",
            profile.icon,
            profile.label,
            locale.format_number(entry.emissions_kg, 2),
            bar(entry.bar_percent)
        );
    }

    let _ = writeln!(out, "\nCréditos de carbono:");
    let _ = writeln!(out, "  Necessários: {}", report.credits.credits_needed);
    let _ = writeln!(
        out,
        "  Custo estimado: {}",
        locale.format_currency(report.credits.estimated_cost)
    );

    let _ = writeln!(out, "\nDica: {}", report.eco_tip);
    let _ = writeln!(out, "Você sabia? {}", report.impact_fact);
    out
}

/// Render the list of known places, one per line.
pub fn render_places(places: &[String]) -> String {
    places.iter().fold(String::new(), |mut out, place| {
        let _ = writeln!(out, "{place}");
        out
    })
}

/// The message shown to the user for a rejected trip.
pub fn user_message(err: &EstimateError) -> String {
    match err {
        EstimateError::MissingPlaces => "Por favor, selecione origem e destino.".to_owned(),
        EstimateError::InvalidDistance { .. } => {
            "Por favor, insira uma distância válida.".to_owned()
        }
        EstimateError::RouteNotFound {
            origin,
            destination,
        } => format!(
            "Rota entre {origin} e {destination} não encontrada. Informe a distância com --distance."
        ),
        EstimateError::UnknownMode { mode } => format!(
            "Meio de transporte desconhecido: {mode}. Use bicycle, car, bus ou truck."
        ),
        EstimateError::Calculation(source) => format!("Erro no cálculo: {source}"),
    }
}

/// A fixed-width bar filled to `percent` (0-100), one cell per 5%.
fn bar(percent: f64) -> String {
    let cell = 100.0 / f64::from(BAR_WIDTH);
    (1..=BAR_WIDTH)
        .map(|step| {
            if f64::from(step) * cell <= percent + cell / 2.0 {
                '█'
            } else {
                '░'
            }
        })
        .collect()
}
