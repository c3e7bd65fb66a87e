//! Carbon-credit offsets and their market cost.
//!
//! The number of credits is a ceiling division of emissions by the
//! configured kg-per-credit constant. The cost is deliberately not a lookup:
//! each call samples a unit price uniformly from the configured range, the
//! way a fluctuating market would quote it. The random source is a
//! parameter so tests can seed it; production callers pass `rand::rng()`.
//!
//! All monetary values use [`rust_decimal::Decimal`].

use carbon_types::CreditEstimate;
use rand::Rng;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::emissions::EmissionCalculator;
use crate::error::CalculatorError;

/// Decimal places kept on every cost.
const COST_DECIMAL_PLACES: u32 = 2;

impl EmissionCalculator {
    /// Whole credits needed to offset `emissions_kg`, rounded up.
    ///
    /// Zero emissions need zero credits.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::InvalidEmissions`] for negative or
    /// non-finite input, or [`CalculatorError::ArithmeticOverflow`] if the
    /// count does not fit in a `u64`.
    pub fn carbon_credits_needed(&self, emissions_kg: f64) -> Result<u64, CalculatorError> {
        if !emissions_kg.is_finite() || emissions_kg < 0.0 {
            return Err(CalculatorError::InvalidEmissions { emissions_kg });
        }

        let credits = (emissions_kg / self.config().kg_per_credit).ceil();
        Decimal::from_f64(credits)
            .and_then(|d| d.to_u64())
            .ok_or(CalculatorError::ArithmeticOverflow)
    }

    /// Sample today's cost of `num_credits` credits.
    ///
    /// The unit price is drawn uniformly from the configured range, then
    /// multiplied by `num_credits` and rounded half-up to two decimal
    /// places. The result always lies within
    /// `[num_credits * min, num_credits * max]`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::ArithmeticOverflow`] if the total exceeds
    /// the range of [`Decimal`].
    pub fn calculate_credit_cost<R: Rng + ?Sized>(
        &self,
        num_credits: u64,
        rng: &mut R,
    ) -> Result<Decimal, CalculatorError> {
        let range = self.config().price_range;
        let fraction = Decimal::from_f64(rng.random::<f64>()).unwrap_or(Decimal::ZERO);

        let spread = range
            .max
            .checked_sub(range.min)
            .ok_or(CalculatorError::ArithmeticOverflow)?;
        let unit_price = spread
            .checked_mul(fraction)
            .and_then(|offset| range.min.checked_add(offset))
            .ok_or(CalculatorError::ArithmeticOverflow)?;

        let mut cost = unit_price
            .checked_mul(Decimal::from(num_credits))
            .ok_or(CalculatorError::ArithmeticOverflow)?
            .round_dp_with_strategy(COST_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        cost.rescale(COST_DECIMAL_PLACES);

        debug!(
            num_credits,
            unit_price = %unit_price.round_dp(COST_DECIMAL_PLACES),
            cost = %cost,
            "Credit price sampled"
        );

        Ok(cost)
    }

    /// Credits needed for `emissions_kg` together with a sampled cost.
    ///
    /// # Errors
    ///
    /// Propagates errors from
    /// [`carbon_credits_needed`](Self::carbon_credits_needed) and
    /// [`calculate_credit_cost`](Self::calculate_credit_cost).
    pub fn estimate_credits<R: Rng + ?Sized>(
        &self,
        emissions_kg: f64,
        rng: &mut R,
    ) -> Result<CreditEstimate, CalculatorError> {
        let credits_needed = self.carbon_credits_needed(emissions_kg)?;
        let estimated_cost = self.calculate_credit_cost(credits_needed, rng)?;
        Ok(CreditEstimate {
            credits_needed,
            estimated_cost,
        })
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::config::{CalculatorConfig, PriceRange};

    fn calculator_with_range(min: i64, max: i64) -> EmissionCalculator {
        let config = CalculatorConfig {
            price_range: PriceRange {
                min: Decimal::new(min, 0),
                max: Decimal::new(max, 0),
            },
            ..CalculatorConfig::default()
        };
        EmissionCalculator::new(config).unwrap_or_default()
    }

    #[test]
    fn credits_use_ceiling_division() {
        let calc = EmissionCalculator::default();
        assert_eq!(calc.carbon_credits_needed(0.0), Ok(0));
        assert_eq!(calc.carbon_credits_needed(0.001), Ok(1));
        assert_eq!(calc.carbon_credits_needed(51.6), Ok(1));
        assert_eq!(calc.carbon_credits_needed(1000.0), Ok(1));
        assert_eq!(calc.carbon_credits_needed(1001.0), Ok(2));
        assert_eq!(calc.carbon_credits_needed(2500.0), Ok(3));
    }

    #[test]
    fn credits_follow_configured_kg_per_credit() {
        let config = CalculatorConfig {
            kg_per_credit: 250.0,
            ..CalculatorConfig::default()
        };
        let calc = EmissionCalculator::new(config).unwrap_or_default();
        assert_eq!(calc.carbon_credits_needed(250.0), Ok(1));
        assert_eq!(calc.carbon_credits_needed(251.0), Ok(2));
    }

    #[test]
    fn invalid_emissions_rejected() {
        let calc = EmissionCalculator::default();
        for bad in [-0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                calc.carbon_credits_needed(bad),
                Err(CalculatorError::InvalidEmissions { .. })
            ));
        }
    }

    #[test]
    fn cost_stays_within_range_and_has_two_places() {
        let calc = EmissionCalculator::default();
        for seed in 0..200_u64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for n in [0_u64, 1, 3, 17] {
                let cost = calc.calculate_credit_cost(n, &mut rng).unwrap_or(Decimal::MIN);
                let low = Decimal::from(n) * Decimal::new(50, 0);
                let high = Decimal::from(n) * Decimal::new(150, 0);
                assert!(cost >= low && cost <= high, "seed {seed}, n {n}: {cost}");
                assert_eq!(cost.scale(), 2);
            }
        }
    }

    #[test]
    fn same_seed_same_cost() {
        let calc = EmissionCalculator::default();
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        assert_eq!(
            calc.calculate_credit_cost(5, &mut a),
            calc.calculate_credit_cost(5, &mut b)
        );
    }

    #[test]
    fn cost_varies_between_calls() {
        let calc = EmissionCalculator::default();
        let mut rng = SmallRng::seed_from_u64(99);
        let samples: Vec<Decimal> = (0..20)
            .filter_map(|_| calc.calculate_credit_cost(1, &mut rng).ok())
            .collect();
        assert!(samples.windows(2).any(|w| matches!(w, [a, b] if a != b)));
    }

    #[test]
    fn fixed_price_range_is_exact() {
        let calc = calculator_with_range(80, 80);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            calc.calculate_credit_cost(3, &mut rng),
            Ok(Decimal::new(24_000, 2))
        );
    }

    #[test]
    fn estimate_for_sao_paulo_to_rio_by_car() {
        let calc = EmissionCalculator::default();
        let mut rng = SmallRng::seed_from_u64(2024);
        let estimate = calc.estimate_credits(51.6, &mut rng);
        assert!(estimate.is_ok());
        let Ok(estimate) = estimate else { return };

        assert_eq!(estimate.credits_needed, 1);
        assert!(estimate.estimated_cost >= Decimal::new(50, 0));
        assert!(estimate.estimated_cost <= Decimal::new(150, 0));
    }

    #[test]
    fn zero_emissions_cost_nothing() {
        let calc = EmissionCalculator::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let estimate = calc.estimate_credits(0.0, &mut rng);
        assert_eq!(
            estimate,
            Ok(CreditEstimate {
                credits_needed: 0,
                estimated_cost: Decimal::ZERO,
            })
        );
    }
}
