use anchor_lang::prelude::*;

use crate::error::ErrorCode;

pub const WASTE_SUBMISSION_SEED: &str = "waste_submission";

/// Material categories accepted by the platform.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WasteType {
    #[default]
    Pet,
    Aluminum,
    Glass,
    Paper,
    Cardboard,
    Ewaste,
    Organic,
    MixedPlastic,
}

impl WasteType {
    pub const COUNT: usize = 8;

    /// Index into the per-material configuration tables.
    pub fn index(&self) -> usize {
        match self {
            WasteType::Pet => 0,
            WasteType::Aluminum => 1,
            WasteType::Glass => 2,
            WasteType::Paper => 3,
            WasteType::Cardboard => 4,
            WasteType::Ewaste => 5,
            WasteType::Organic => 6,
            WasteType::MixedPlastic => 7,
        }
    }
}

/// Assessed material quality, ordered best to worst. Unusable material is
/// recorded but never minted for.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QualityGrade {
    #[default]
    Excellent,
    Good,
    Fair,
    Poor,
    Unusable,
}

impl QualityGrade {
    pub fn index(&self) -> usize {
        match self {
            QualityGrade::Excellent => 0,
            QualityGrade::Good => 1,
            QualityGrade::Fair => 2,
            QualityGrade::Poor => 3,
            QualityGrade::Unusable => 4,
        }
    }
}

/// Tri-state verification lifecycle of a submission. Exactly one
/// transition away from `Pending` is permitted.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerificationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// One waste drop-off. Created at submission time with tokens already
/// minted (optimistic path), mutated exactly once by a verifier, never
/// deleted.
#[account]
#[derive(Default, Debug)]
pub struct WasteSubmission {
    pub bump: u8,
    pub id: u64,
    pub submitter: Pubkey,
    pub waste_type: WasteType,
    pub quality: QualityGrade,
    /// Weight in grams as assessed at the point of submission.
    pub weight_grams: u64,
    /// Waste token base units minted optimistically; burned back if the
    /// submission is later rejected.
    pub tokens_minted: u64,
    /// Opaque hash of the submitted evidence bundle.
    pub evidence_hash: [u8; 32],
    /// Opaque free-form location tag.
    pub location_tag: String,
    pub timestamp: u64,
    pub status: VerificationStatus,
    /// Verifier that settled the record; default until verified.
    pub verifier: Pubkey,
}

impl WasteSubmission {
    /// Breakdown: discriminator + bump + id + submitter + two enums +
    /// weight + tokens + evidence hash + (4 + 64) string + timestamp +
    /// status + verifier.
    pub const LEN: usize =
        8 + 1 + 8 + 32 + 1 + 1 + 8 + 8 + 32 + (4 + crate::MAX_LOCATION_TAG_LEN) + 8 + 1 + 32;

    /// Settle the one-shot verification state machine.
    pub fn mark_verified(&mut self, approved: bool, verifier: Pubkey) -> Result<()> {
        require!(
            self.status == VerificationStatus::Pending,
            ErrorCode::AlreadyVerified
        );
        self.status = if approved {
            VerificationStatus::Approved
        } else {
            VerificationStatus::Rejected
        };
        self.verifier = verifier;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_flips_once() {
        let mut submission = WasteSubmission::default();
        let verifier = Pubkey::new_unique();
        submission.mark_verified(true, verifier).unwrap();
        assert_eq!(submission.status, VerificationStatus::Approved);
        assert_eq!(submission.verifier, verifier);

        // Second settlement attempt must fail and leave state intact.
        let err = submission.mark_verified(false, Pubkey::new_unique());
        assert!(err.is_err());
        assert_eq!(submission.status, VerificationStatus::Approved);
        assert_eq!(submission.verifier, verifier);
    }

    #[test]
    fn rejection_records_rejected_state() {
        let mut submission = WasteSubmission::default();
        submission.mark_verified(false, Pubkey::new_unique()).unwrap();
        assert_eq!(submission.status, VerificationStatus::Rejected);
        assert!(submission.mark_verified(true, Pubkey::new_unique()).is_err());
    }
}
