use anchor_lang::prelude::*;

use crate::states::{QualityGrade, WasteType};

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track protocol state changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the global configuration is initialized.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub fee_collector: Pubkey,
    pub waste_mint: Pubkey,
    pub carbon_mint: Pubkey,
    pub conversion_fee_rate: u64,
    pub min_conversion_amount: u64,
    pub verification_threshold: u64,
    pub seasonal_adjustment: u64,
}

/// Emitted whenever a scalar configuration parameter is modified.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub param: u8,
    pub value: u64,
}

/// Emitted when a multiplier/factor table entry is modified.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RatesUpdated {
    pub admin: Pubkey,
    pub table: u8,
    pub index: u8,
    pub value: u64,
}

/// Emitted when a verifier is granted or revoked.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct VerifierSet {
    pub verifier: Pubkey,
    pub active: bool,
}

/// Emitted for every waste drop-off, minted or not.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct WasteSubmitted {
    pub submission_id: u64,
    pub submitter: Pubkey,
    pub waste_type: WasteType,
    pub quality: QualityGrade,
    pub weight_grams: u64,
    pub tokens_minted: u64,
}

/// Ledger audit record for a mint, with the resulting balance for
/// off-chain reconciliation.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct TokensMinted {
    pub mint: Pubkey,
    pub account: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

/// Ledger audit record for a burn.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct TokensBurned {
    pub mint: Pubkey,
    pub account: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

/// Emitted when a submission is approved or rejected by a verifier.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct SubmissionVerified {
    pub submission_id: u64,
    pub verifier: Pubkey,
    pub approved: bool,
    pub tokens_burned: u64,
}

/// Emitted for every conversion request, including auto-settled ones.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConversionRequested {
    pub conversion_id: u64,
    pub user: Pubkey,
    pub waste_type: WasteType,
    pub waste_amount: u64,
    pub gross_credits: u64,
    pub fee_credits: u64,
    pub auto_verified: bool,
}

/// Emitted when a held conversion is approved (credits minted) or
/// rejected (waste refunded).
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConversionSettled {
    pub conversion_id: u64,
    pub verifier: Pubkey,
    pub approved: bool,
    pub credits_to_user: u64,
    pub fee_credits: u64,
    pub waste_refunded: u64,
}

/// Emitted when a user permanently retires carbon credits for an offset
/// claim.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct CreditsRetired {
    pub user: Pubkey,
    pub amount: u64,
    pub reason: String,
}
