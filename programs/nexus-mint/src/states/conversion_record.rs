use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::states::WasteType;

pub const CONVERSION_RECORD_SEED: &str = "conversion_record";

/// Settlement state of a conversion. Small requests settle immediately as
/// `AutoVerified`; large ones hold in `Pending` until a verifier rules.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversionStatus {
    #[default]
    Pending,
    AutoVerified,
    Verified,
    Rejected,
}

/// One entry of a batched conversion request.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct ConversionEntry {
    pub waste_amount: u64,
    pub waste_type: WasteType,
}

/// One waste-to-carbon conversion. The waste debit happens at creation
/// time; credits are minted at creation (auto path) or at verifier
/// approval. Never deleted.
#[account]
#[derive(Default, Debug)]
pub struct ConversionRecord {
    pub bump: u8,
    pub id: u64,
    pub user: Pubkey,
    /// Waste token base units pulled into conversion custody.
    pub waste_amount: u64,
    pub waste_type: WasteType,
    /// Gross carbon credit base units computed at request time.
    pub gross_credits: u64,
    /// Fee portion of `gross_credits` owed to the fee collector.
    pub fee_credits: u64,
    /// Opaque carbon-accounting methodology tag.
    pub methodology: String,
    pub timestamp: u64,
    pub status: ConversionStatus,
    /// Verifier that settled a pending record; default otherwise.
    pub verifier: Pubkey,
}

impl ConversionRecord {
    /// Breakdown: discriminator + bump + id + user + waste_amount + type +
    /// gross + fee + (4 + 32) methodology + timestamp + status + verifier.
    pub const LEN: usize =
        8 + 1 + 8 + 32 + 8 + 1 + 8 + 8 + (4 + crate::MAX_METHODOLOGY_LEN) + 8 + 1 + 32;

    /// Net credit base units owed to the user once settled.
    pub fn net_credits(&self) -> u64 {
        self.gross_credits.saturating_sub(self.fee_credits)
    }

    /// Settle a held record. Auto-verified records were never pending, so
    /// approving them is a distinct caller error from double settlement.
    pub fn settle(&mut self, approved: bool, verifier: Pubkey) -> Result<()> {
        match self.status {
            ConversionStatus::Pending => {
                self.status = if approved {
                    ConversionStatus::Verified
                } else {
                    ConversionStatus::Rejected
                };
                self.verifier = verifier;
                Ok(())
            }
            ConversionStatus::AutoVerified => {
                err!(ErrorCode::BelowVerificationThreshold)
            }
            ConversionStatus::Verified | ConversionStatus::Rejected => {
                err!(ErrorCode::AlreadyVerified)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_record_settles_once() {
        let mut record = ConversionRecord::default();
        record.settle(true, Pubkey::new_unique()).unwrap();
        assert_eq!(record.status, ConversionStatus::Verified);
        assert!(record.settle(true, Pubkey::new_unique()).is_err());
        assert!(record.settle(false, Pubkey::new_unique()).is_err());
    }

    #[test]
    fn auto_verified_record_rejects_manual_approval() {
        let mut record = ConversionRecord {
            status: ConversionStatus::AutoVerified,
            ..Default::default()
        };
        let err = record.settle(true, Pubkey::new_unique()).unwrap_err();
        assert_eq!(
            err,
            anchor_lang::error::Error::from(ErrorCode::BelowVerificationThreshold)
        );
        assert_eq!(record.status, ConversionStatus::AutoVerified);
    }

    #[test]
    fn rejection_keeps_fee_accounting() {
        let mut record = ConversionRecord {
            gross_credits: 1_500,
            fee_credits: 15,
            ..Default::default()
        };
        assert_eq!(record.net_credits(), 1_485);
        record.settle(false, Pubkey::new_unique()).unwrap();
        assert_eq!(record.status, ConversionStatus::Rejected);
    }
}
