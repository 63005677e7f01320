//! Tokenization and carbon conversion calculations

use crate::math::fees::FEE_RATE_DENOMINATOR_VALUE;
use crate::utils::mul_div_floor;
use crate::{BASE_RATE_UNITS_PER_GRAM, CARBON_UNITS_PER_KG, WASTE_UNITS_PER_KG};

/// Concrete struct wrapping the deterministic mint/convert arithmetic.
///
/// All inputs are integer base units and basis-point multipliers; both
/// conversions run as sequential floor multiply-divides so no intermediate
/// value can exceed `u64::MAX * 10_000`, which `mul_div_floor` absorbs in
/// its 256-bit intermediate.
pub struct MintCalculator;

impl MintCalculator {
    /// Waste token base units minted for a verified drop-off.
    ///
    /// `tokens = grams * BASE_RATE * type_multiplier * quality_multiplier`,
    /// with both multipliers in basis points. An `Unusable` grade carries a
    /// zero multiplier, so the product collapses to zero for any weight.
    pub fn waste_tokens(
        weight_grams: u64,
        waste_multiplier: u64,
        quality_multiplier: u64,
    ) -> Option<u64> {
        let base = weight_grams.checked_mul(BASE_RATE_UNITS_PER_GRAM)?;
        let typed = mul_div_floor(base, waste_multiplier, FEE_RATE_DENOMINATOR_VALUE)?;
        mul_div_floor(typed, quality_multiplier, FEE_RATE_DENOMINATOR_VALUE)
    }

    /// Gross carbon credit base units for a waste-token conversion.
    ///
    /// The waste amount is read as a nominal mass (1_000_000 base units per
    /// kg), scaled by the per-material emission factor and the bounded
    /// seasonal adjustment, then expressed in credit base units
    /// (1 whole credit = 1 kg CO2e).
    pub fn carbon_credits(
        waste_amount: u64,
        carbon_factor: u64,
        seasonal_adjustment: u64,
    ) -> Option<u64> {
        let scaled = mul_div_floor(waste_amount, carbon_factor, FEE_RATE_DENOMINATOR_VALUE)?;
        let adjusted = mul_div_floor(scaled, seasonal_adjustment, FEE_RATE_DENOMINATOR_VALUE)?;
        mul_div_floor(adjusted, CARBON_UNITS_PER_KG, WASTE_UNITS_PER_KG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::QualityGrade;
    use crate::{MAX_QUALITY_MULTIPLIER, MAX_WASTE_MULTIPLIER};
    use proptest::prelude::*;

    #[test]
    fn pet_excellent_scenario() {
        // 1000 g of PET (1.2x) at Excellent (1.0x): 1_200_000 base units.
        assert_eq!(
            MintCalculator::waste_tokens(1_000, 12_000, 10_000),
            Some(1_200_000)
        );
    }

    #[test]
    fn unusable_mints_nothing_for_any_type() {
        let unusable = crate::states::DEFAULT_QUALITY_MULTIPLIER[QualityGrade::Unusable.index()];
        assert_eq!(unusable, 0);
        for mult in crate::states::DEFAULT_WASTE_MULTIPLIER {
            assert_eq!(MintCalculator::waste_tokens(123_456, mult, unusable), Some(0));
        }
    }

    #[test]
    fn pet_conversion_scenario() {
        // 1 kg-equivalent of PET (factor 1.5x) at a neutral season:
        // 1.5 credits gross.
        assert_eq!(
            MintCalculator::carbon_credits(WASTE_UNITS_PER_KG, 15_000, 10_000),
            Some(1_500)
        );
    }

    #[test]
    fn seasonal_adjustment_scales_credits() {
        let base = MintCalculator::carbon_credits(WASTE_UNITS_PER_KG, 15_000, 10_000).unwrap();
        let half = MintCalculator::carbon_credits(WASTE_UNITS_PER_KG, 15_000, 5_000).unwrap();
        let double = MintCalculator::carbon_credits(WASTE_UNITS_PER_KG, 15_000, 20_000).unwrap();
        assert_eq!(half, base / 2);
        assert_eq!(double, base * 2);
    }

    proptest! {
        #[test]
        fn tokens_bounded_by_max_multipliers(weight in 1u64..=100_000_000) {
            let tokens = MintCalculator::waste_tokens(
                weight,
                MAX_WASTE_MULTIPLIER,
                MAX_QUALITY_MULTIPLIER,
            ).unwrap();
            // 5.0x * 1.0x is the ceiling the admin surface can configure.
            prop_assert_eq!(tokens, weight * BASE_RATE_UNITS_PER_GRAM * 5);
        }

        #[test]
        fn tokens_monotonic_in_weight(weight in 1u64..=1_000_000_000,
                                      mult in 1u64..=MAX_WASTE_MULTIPLIER,
                                      quality in 1u64..=MAX_QUALITY_MULTIPLIER) {
            let small = MintCalculator::waste_tokens(weight, mult, quality).unwrap();
            let large = MintCalculator::waste_tokens(weight + 1, mult, quality).unwrap();
            prop_assert!(large >= small);
        }

        #[test]
        fn credits_never_exceed_factor_ceiling(amount in 0u64..=u64::MAX / 40) {
            let credits = MintCalculator::carbon_credits(
                amount,
                crate::MAX_CARBON_FACTOR,
                crate::MAX_SEASONAL_ADJUSTMENT,
            ).unwrap();
            // 20x factor at 200% season on a 1000:1 unit ratio.
            prop_assert!(credits <= amount / 25 + 1);
        }
    }
}
