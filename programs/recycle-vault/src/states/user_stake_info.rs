use anchor_lang::prelude::*;

use crate::math::RewardCalculator;
use crate::states::StakingPool;

pub const USER_STAKE_INFO_SEED: &str = "user_stake_info";

/// Per-pool, per-user staking position. Created on first stake and never
/// destroyed; a fully unstaked position persists with zero amount as
/// historical residue.
#[account]
#[derive(Default, Debug)]
pub struct UserStakeInfo {
    pub bump: u8,
    pub pool_id: u64,
    pub owner: Pubkey,
    pub amount: u64,
    /// Accumulator snapshot at the last settlement.
    pub reward_per_token_paid: u128,
    /// Reward base units owed but not yet claimed.
    pub pending_rewards: u64,
    /// Reset on every additional stake; the whole position re-locks.
    pub stake_timestamp: u64,
    pub last_claim_timestamp: u64,
    /// Lifetime reward base units claimed (net of fees).
    pub total_claimed: u64,
}

impl UserStakeInfo {
    pub const LEN: usize = 8 + 1 + 8 + 32 + 8 + 16 + 8 * 4;

    /// Folds the accumulator delta since the last settlement into
    /// `pending_rewards` and snapshots the accumulator. Must run after
    /// `pool.checkpoint` and before any amount mutation.
    pub fn settle(&mut self, pool: &StakingPool) -> Option<()> {
        let delta = RewardCalculator::earned_delta(
            self.amount,
            pool.reward_per_token_stored,
            self.reward_per_token_paid,
        )?;
        self.pending_rewards = self.pending_rewards.checked_add(delta)?;
        self.reward_per_token_paid = pool.reward_per_token_stored;
        Some(())
    }

    /// Lock gate for unstaking.
    pub fn lock_expired(&self, min_staking_period: u64, now: u64) -> bool {
        now >= self.stake_timestamp.saturating_add(min_staking_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(rate: u64, staked: u64) -> StakingPool {
        StakingPool {
            reward_rate: rate,
            total_staked: staked,
            ..Default::default()
        }
    }

    #[test]
    fn lone_staker_earns_rate_times_duration() {
        // Spec scenario: 1 unit/sec, 100 staked at t=0, settle at t=100.
        let mut p = pool(1, 100);
        let mut u = UserStakeInfo {
            amount: 100,
            ..Default::default()
        };
        p.checkpoint(100).unwrap();
        u.settle(&p).unwrap();
        assert_eq!(u.pending_rewards, 100);
        assert_eq!(u.reward_per_token_paid, p.reward_per_token_stored);
    }

    #[test]
    fn settlement_is_checkpoint_count_independent() {
        let mut p1 = pool(500, 1_000);
        let mut u1 = UserStakeInfo {
            amount: 1_000,
            ..Default::default()
        };
        for now in [60u64, 120, 180, 240, 300, 360, 420, 480, 540, 600] {
            p1.checkpoint(now).unwrap();
            u1.settle(&p1).unwrap();
        }

        let mut p2 = pool(500, 1_000);
        let mut u2 = UserStakeInfo {
            amount: 1_000,
            ..Default::default()
        };
        p2.checkpoint(600).unwrap();
        u2.settle(&p2).unwrap();

        assert_eq!(u1.pending_rewards, u2.pending_rewards);
        assert_eq!(u1.pending_rewards, 500 * 600);
    }

    #[test]
    fn idle_period_with_no_stakers_pays_nobody() {
        let mut p = pool(1_000, 0);
        let mut u = UserStakeInfo::default();
        p.checkpoint(1_000).unwrap();
        u.settle(&p).unwrap();
        assert_eq!(u.pending_rewards, 0);
    }

    #[test]
    fn lock_boundary_is_inclusive() {
        let u = UserStakeInfo {
            stake_timestamp: 1_000,
            ..Default::default()
        };
        assert!(!u.lock_expired(600, 1_599));
        assert!(u.lock_expired(600, 1_600));
        assert!(u.lock_expired(0, 1_000));
    }
}
