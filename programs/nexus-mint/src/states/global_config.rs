use anchor_lang::prelude::*;

use crate::states::{QualityGrade, WasteType};

//
// ──────────────────────────────────────────────────────────────────────────────
// Global Configuration Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the global configuration account.
pub const GLOBAL_CONFIG_SEED: &str = "global_config";

/// Default per-material type multipliers in basis points, indexed by
/// `WasteType`. PET is the 1.2x reference material; nothing exceeds the
/// 5.0x admin ceiling.
pub const DEFAULT_WASTE_MULTIPLIER: [u64; 8] = [
    12_000, // Pet
    20_000, // Aluminum
    8_000,  // Glass
    9_000,  // Paper
    10_000, // Cardboard
    30_000, // Ewaste
    5_000,  // Organic
    7_000,  // MixedPlastic
];

/// Default quality multipliers in basis points, indexed by `QualityGrade`.
/// Unusable material carries a hard zero so it never mints.
pub const DEFAULT_QUALITY_MULTIPLIER: [u64; 5] = [
    10_000, // Excellent
    8_000,  // Good
    6_000,  // Fair
    3_000,  // Poor
    0,      // Unusable
];

/// Default emission factors (kg CO2e avoided per kg of material) in basis
/// points, indexed by `WasteType`.
pub const DEFAULT_CARBON_FACTOR: [u64; 8] = [
    15_000,  // Pet
    92_000,  // Aluminum
    3_000,   // Glass
    9_000,   // Paper
    8_000,   // Cardboard
    150_000, // Ewaste
    2_000,   // Organic
    10_000,  // MixedPlastic
];

/// Stores all protocol-wide configuration for the tokenization and
/// conversion engines: fixed mint/vault addresses, tunable rates (all
/// basis-point integers bounded by the ceilings in `lib.rs`), feature
/// switches, and the monotonically increasing record id counters.
#[account]
#[derive(Default, Debug)]
pub struct GlobalConfig {
    /// PDA bump for this account (for seed derivation).
    pub bump: u8,

    /// Current admin of the protocol (authorized to update config).
    pub admin: Pubkey,

    /// Receives conversion fees (owner of fee token accounts).
    pub fee_collector: Pubkey,

    /// Advisory carbon price feed. Stored for off-chain consumers only;
    /// never consulted by the mint/convert arithmetic.
    pub price_oracle: Pubkey,

    /// Canonical waste token mint.
    pub waste_mint: Pubkey,

    /// Canonical carbon credit mint.
    pub carbon_mint: Pubkey,

    /// Program-owned waste vault holding pending conversion custody.
    pub conversion_custody: Pubkey,

    /// Program-owned carbon vault receiving conversion fees.
    pub carbon_fee_vault: Pubkey,

    /// Conversion fee in basis points (ceiling 10%).
    pub conversion_fee_rate: u64,

    /// Smallest waste amount accepted for conversion (base units).
    pub min_conversion_amount: u64,

    /// Gross credit amounts at or above this hold for manual verification;
    /// below it conversions settle immediately.
    pub verification_threshold: u64,

    /// Seasonal adjustment scalar in basis points, bounded 50%..200%.
    pub seasonal_adjustment: u64,

    /// Global switch: if `false`, waste submission is disabled.
    pub submission_enabled: bool,

    /// Global switch: if `false`, carbon conversion is disabled.
    pub conversion_enabled: bool,

    /// Next waste submission id.
    pub submission_count: u64,

    /// Next conversion record id.
    pub conversion_count: u64,

    /// Per-material type multipliers (basis points, by `WasteType`).
    pub waste_multiplier: [u64; 8],

    /// Quality multipliers (basis points, by `QualityGrade`).
    pub quality_multiplier: [u64; 5],

    /// Per-material emission factors (basis points, by `WasteType`).
    pub carbon_factor: [u64; 8],
}

impl GlobalConfig {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 7: seven Pubkeys
    /// - 8 * 6: six u64 parameters/counters
    /// - 1 + 1: two booleans
    /// - 8 * 21: three multiplier tables
    pub const LEN: usize = 8 + 1 + 32 * 7 + 8 * 6 + 1 + 1 + 8 * 21;

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        *key == self.admin || *key == crate::admin::id()
    }

    pub fn waste_multiplier_for(&self, waste_type: WasteType) -> u64 {
        self.waste_multiplier[waste_type.index()]
    }

    pub fn quality_multiplier_for(&self, quality: QualityGrade) -> u64 {
        self.quality_multiplier[quality.index()]
    }

    pub fn carbon_factor_for(&self, waste_type: WasteType) -> u64 {
        self.carbon_factor[waste_type.index()]
    }
}
