//! Eco tips and impact facts shown alongside results.
//!
//! Text is in Brazilian Portuguese to match the rest of the display copy.

use carbon_types::TransportMode;
use rand::Rng;

/// "One tonne of CO2 is roughly what 40 trees absorb in a year."
pub const CO2_EQUIVALENT_FACT: &str =
    "1 tonelada de CO2 equivale a plantar cerca de 40 árvores por ano";

/// Transport's share of global greenhouse-gas emissions.
pub const GLOBAL_TRANSPORT_FACT: &str =
    "O transporte responde por cerca de 14% das emissões globais de gases de efeito estufa";

/// Transport's share of Brazil's CO2 emissions.
pub const BRAZIL_TRANSPORT_FACT: &str =
    "No Brasil, o transporte é responsável por aproximadamente 30% das emissões de CO2";

const BICYCLE_TIPS: [&str; 3] = [
    "Pedalar reduz emissões de CO2 em 100% comparado a veículos motorizados",
    "Melhora sua saúde cardiovascular",
    "Não contribui para congestionamentos urbanos",
];

const CAR_TIPS: [&str; 3] = [
    "Considere caronas para reduzir emissões por passageiro",
    "Mantenha pneus calibrados para melhor eficiência",
    "Evite acelerações bruscas e frenagens",
];

const BUS_TIPS: [&str; 3] = [
    "Transporte público é mais eficiente que carros individuais",
    "Reduz congestionamento nas cidades",
    "Opção econômica para viagens longas",
];

const TRUCK_TIPS: [&str; 3] = [
    "Para cargas pesadas, considere consolidação de fretes",
    "Otimize rotas para reduzir quilometragem",
    "Considere veículos elétricos quando disponíveis",
];

/// Every tip for a mode.
pub const fn tips_for(mode: TransportMode) -> &'static [&'static str] {
    match mode {
        TransportMode::Bicycle => &BICYCLE_TIPS,
        TransportMode::Car => &CAR_TIPS,
        TransportMode::Bus => &BUS_TIPS,
        TransportMode::Truck => &TRUCK_TIPS,
    }
}

/// One tip for `mode`, picked uniformly at random.
///
/// Returns an empty string if the mode has no tips.
pub fn random_tip<R: Rng + ?Sized>(mode: TransportMode, rng: &mut R) -> &'static str {
    let tips = tips_for(mode);
    if tips.is_empty() {
        return "";
    }
    let idx = rng.random_range(0..tips.len());
    tips.get(idx).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn every_mode_has_three_tips() {
        for mode in TransportMode::ALL {
            assert_eq!(tips_for(mode).len(), 3, "{mode}");
        }
    }

    #[test]
    fn random_tip_belongs_to_mode() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            for mode in TransportMode::ALL {
                let tip = random_tip(mode, &mut rng);
                assert!(tips_for(mode).contains(&tip));
            }
        }
    }

    #[test]
    fn random_tip_reaches_every_tip() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(random_tip(TransportMode::Bus, &mut rng));
        }
        assert_eq!(seen.len(), BUS_TIPS.len());
    }
}
