use crate::utils::mul_div_floor;

/// Common denominator for every basis-point rate and multiplier
/// (10_000 = 100% = 1.0x).
pub const FEE_RATE_DENOMINATOR_VALUE: u64 = 10_000;

/// Basis-point fee arithmetic, floor-rounded in the protocol's favour.
pub struct Fees;

impl Fees {
    /// Fee skimmed from a gross credit amount.
    pub fn conversion_fee(gross: u64, fee_rate: u64) -> Option<u64> {
        mul_div_floor(gross, fee_rate, FEE_RATE_DENOMINATOR_VALUE)
    }

    /// Splits a gross amount into (net_to_user, fee).
    pub fn split(gross: u64, fee_rate: u64) -> Option<(u64, u64)> {
        let fee = Self::conversion_fee(gross, fee_rate)?;
        let net = gross.checked_sub(fee)?;
        Some((net, fee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one_percent_fee_on_spec_scenario() {
        // 1.5 credits gross at 1% -> 0.015 fee, 1.485 to the user.
        let (net, fee) = Fees::split(1_500, 100).unwrap();
        assert_eq!(fee, 15);
        assert_eq!(net, 1_485);
    }

    #[test]
    fn zero_rate_takes_nothing() {
        assert_eq!(Fees::split(1_000_000, 0), Some((1_000_000, 0)));
    }

    proptest! {
        #[test]
        fn split_conserves_gross(gross in 0u64..=u64::MAX / FEE_RATE_DENOMINATOR_VALUE,
                                 rate in 0u64..=1_000) {
            let (net, fee) = Fees::split(gross, rate).unwrap();
            prop_assert_eq!(net + fee, gross);
            // A capped rate never takes more than 10%.
            prop_assert!(fee <= gross / 10 + 1);
        }
    }
}
