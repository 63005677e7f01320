use anchor_lang::prelude::*;

use crate::states::WasteType;

pub const PLATFORM_STATS_SEED: &str = "platform_stats";
pub const USER_STATS_SEED: &str = "user_stats";

/// Platform-wide running aggregates, including the per-material splits
/// the original reporting surface exposes. Quantities (weights, token
/// amounts) are reversed when a submission or conversion is rejected;
/// the id-backed counts stay monotonic.
#[account]
#[derive(Default, Debug)]
pub struct PlatformStats {
    pub bump: u8,
    pub total_submissions: u64,
    pub total_weight_grams: u64,
    pub total_tokens_minted: u64,
    pub weight_by_type: [u64; 8],
    pub tokens_by_type: [u64; 8],
    pub total_conversions: u64,
    pub total_waste_converted: u64,
    pub total_credits_minted: u64,
    pub total_fee_credits: u64,
    pub total_credits_retired: u64,
}

impl PlatformStats {
    /// discriminator + bump + three submission u64s + two 8-wide tables +
    /// five conversion/retirement u64s.
    pub const LEN: usize = 8 + 1 + 8 * 3 + 8 * 16 + 8 * 5;

    pub fn record_submission(
        &mut self,
        waste_type: WasteType,
        weight_grams: u64,
        tokens: u64,
    ) -> Option<()> {
        let idx = waste_type.index();
        self.total_submissions = self.total_submissions.checked_add(1)?;
        self.total_weight_grams = self.total_weight_grams.checked_add(weight_grams)?;
        self.total_tokens_minted = self.total_tokens_minted.checked_add(tokens)?;
        self.weight_by_type[idx] = self.weight_by_type[idx].checked_add(weight_grams)?;
        self.tokens_by_type[idx] = self.tokens_by_type[idx].checked_add(tokens)?;
        Some(())
    }

    pub fn reverse_submission(
        &mut self,
        waste_type: WasteType,
        weight_grams: u64,
        tokens: u64,
    ) -> Option<()> {
        let idx = waste_type.index();
        self.total_weight_grams = self.total_weight_grams.checked_sub(weight_grams)?;
        self.total_tokens_minted = self.total_tokens_minted.checked_sub(tokens)?;
        self.weight_by_type[idx] = self.weight_by_type[idx].checked_sub(weight_grams)?;
        self.tokens_by_type[idx] = self.tokens_by_type[idx].checked_sub(tokens)?;
        Some(())
    }

    pub fn record_conversion(&mut self, waste_amount: u64) -> Option<()> {
        self.total_conversions = self.total_conversions.checked_add(1)?;
        self.total_waste_converted = self.total_waste_converted.checked_add(waste_amount)?;
        Some(())
    }

    pub fn reverse_conversion(&mut self, waste_amount: u64) -> Option<()> {
        self.total_waste_converted = self.total_waste_converted.checked_sub(waste_amount)?;
        Some(())
    }

    pub fn record_credits(&mut self, net: u64, fee: u64) -> Option<()> {
        self.total_credits_minted = self
            .total_credits_minted
            .checked_add(net)?
            .checked_add(fee)?;
        self.total_fee_credits = self.total_fee_credits.checked_add(fee)?;
        Some(())
    }

    pub fn record_retirement(&mut self, amount: u64) -> Option<()> {
        self.total_credits_retired = self.total_credits_retired.checked_add(amount)?;
        Some(())
    }
}

/// Per-user running aggregates (the user's portfolio summary).
#[account]
#[derive(Default, Debug)]
pub struct UserStats {
    pub bump: u8,
    pub user: Pubkey,
    pub submission_count: u64,
    pub total_weight_grams: u64,
    pub total_tokens_minted: u64,
    pub conversion_count: u64,
    pub total_credits_earned: u64,
    pub total_credits_retired: u64,
}

impl UserStats {
    pub const LEN: usize = 8 + 1 + 32 + 8 * 6;

    pub fn record_submission(&mut self, weight_grams: u64, tokens: u64) -> Option<()> {
        self.submission_count = self.submission_count.checked_add(1)?;
        self.total_weight_grams = self.total_weight_grams.checked_add(weight_grams)?;
        self.total_tokens_minted = self.total_tokens_minted.checked_add(tokens)?;
        Some(())
    }

    pub fn reverse_submission(&mut self, weight_grams: u64, tokens: u64) -> Option<()> {
        self.total_weight_grams = self.total_weight_grams.checked_sub(weight_grams)?;
        self.total_tokens_minted = self.total_tokens_minted.checked_sub(tokens)?;
        Some(())
    }

    pub fn record_conversion(&mut self) -> Option<()> {
        self.conversion_count = self.conversion_count.checked_add(1)?;
        Some(())
    }

    pub fn record_credits(&mut self, net: u64) -> Option<()> {
        self.total_credits_earned = self.total_credits_earned.checked_add(net)?;
        Some(())
    }

    pub fn record_retirement(&mut self, amount: u64) -> Option<()> {
        self.total_credits_retired = self.total_credits_retired.checked_add(amount)?;
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_reversal_restores_quantities() {
        let mut stats = PlatformStats::default();
        stats.record_submission(WasteType::Pet, 1_000, 1_200_000).unwrap();
        stats.record_submission(WasteType::Ewaste, 500, 1_500_000).unwrap();
        stats.reverse_submission(WasteType::Pet, 1_000, 1_200_000).unwrap();

        assert_eq!(stats.total_weight_grams, 500);
        assert_eq!(stats.total_tokens_minted, 1_500_000);
        assert_eq!(stats.weight_by_type[WasteType::Pet.index()], 0);
        // Counts stay monotonic: ids are never reused.
        assert_eq!(stats.total_submissions, 2);
    }

    #[test]
    fn reversal_underflow_is_rejected() {
        let mut stats = PlatformStats::default();
        assert!(stats.reverse_submission(WasteType::Glass, 1, 0).is_none());
    }
}
