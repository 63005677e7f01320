//! Streaming reward calculations
//!
//! The vault uses the classic lazy reward-per-token accumulator: each pool
//! stores the cumulative reward per staked base unit (scaled by
//! `PRECISION`), folded forward on every mutating operation. A user's
//! earned-but-unclaimed amount is their staked amount times the
//! accumulator delta since their last checkpoint.

use crate::PRECISION;
use spl_math::uint::U256;

pub struct RewardCalculator;

impl RewardCalculator {
    /// Accumulator after `elapsed` seconds of streaming `reward_rate`
    /// base units per second across `total_staked`.
    ///
    /// With zero stakers the accumulator stays frozen: rewards for idle
    /// periods are not diluted into anyone's position.
    pub fn reward_per_token(
        stored: u128,
        reward_rate: u64,
        elapsed: u64,
        total_staked: u64,
    ) -> Option<u128> {
        if total_staked == 0 {
            return Some(stored);
        }
        let accrued = U256::from(elapsed)
            .checked_mul(U256::from(reward_rate))?
            .checked_mul(U256::from(PRECISION))?
            .checked_div(U256::from(total_staked))?;
        if accrued > U256::from(u128::MAX) {
            return None;
        }
        stored.checked_add(accrued.as_u128())
    }

    /// Reward base units newly owed to a position since its last
    /// checkpoint (floor rounded).
    pub fn earned_delta(
        amount_staked: u64,
        reward_per_token: u128,
        reward_per_token_paid: u128,
    ) -> Option<u64> {
        let pending_per_token = reward_per_token.checked_sub(reward_per_token_paid)?;
        let owed = U256::from(amount_staked)
            .checked_mul(U256::from(pending_per_token))?
            .checked_div(U256::from(PRECISION))?;
        if owed > U256::from(u64::MAX) {
            None
        } else {
            Some(owed.as_u64())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lone_staker_earns_rate_times_duration() {
        // rate = 1 base unit/sec, 100 staked for 100 seconds.
        let rpt = RewardCalculator::reward_per_token(0, 1, 100, 100).unwrap();
        assert_eq!(rpt, PRECISION);
        assert_eq!(RewardCalculator::earned_delta(100, rpt, 0), Some(100));
    }

    #[test]
    fn accumulator_freezes_with_zero_stakers() {
        let stored = 42 * PRECISION;
        assert_eq!(
            RewardCalculator::reward_per_token(stored, 1_000, 86_400, 0),
            Some(stored)
        );
    }

    #[test]
    fn accrual_is_checkpoint_count_independent() {
        // Parameters chosen so each step divides exactly: the split
        // accrual must equal the single-shot accrual to the unit.
        let total = 1_000u64;
        let rate = 500u64;
        let mut split = 0u128;
        for _ in 0..10 {
            split = RewardCalculator::reward_per_token(split, rate, 60, total).unwrap();
        }
        let single = RewardCalculator::reward_per_token(0, rate, 600, total).unwrap();
        assert_eq!(split, single);
        assert_eq!(
            RewardCalculator::earned_delta(total, split, 0),
            Some(rate * 600)
        );
    }

    proptest! {
        #[test]
        fn accumulator_is_monotonic(stored in 0u128..=u128::MAX / 2,
                                    rate in 1u64..=1_000_000,
                                    elapsed in 0u64..=31_536_000,
                                    total in 1u64..=u64::MAX) {
            let next = RewardCalculator::reward_per_token(stored, rate, elapsed, total).unwrap();
            prop_assert!(next >= stored);
        }

        #[test]
        fn split_accrual_never_exceeds_single(rate in 1u64..=1_000_000,
                                              total in 1u64..=1_000_000_000,
                                              step in 1u64..=10_000) {
            // Floor rounding loses at most one accumulator unit per step.
            let two_steps = {
                let mid = RewardCalculator::reward_per_token(0, rate, step, total).unwrap();
                RewardCalculator::reward_per_token(mid, rate, step, total).unwrap()
            };
            let single = RewardCalculator::reward_per_token(0, rate, 2 * step, total).unwrap();
            prop_assert!(two_steps <= single);
            prop_assert!(single - two_steps <= 1);
        }

        #[test]
        fn earned_scales_with_stake(amount in 0u64..=1_000_000_000,
                                    delta in 0u128..=1_000_000 * PRECISION) {
            let earned = RewardCalculator::earned_delta(amount, delta, 0).unwrap();
            let expected = (amount as u128) * delta / PRECISION;
            prop_assert_eq!(earned as u128, expected);
        }
    }
}
