use anchor_lang::prelude::*;

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Nexus Mint",
    project_url: "https://circularitynexus.io",
    contacts: "email:security@circularitynexus.io",
    policy: "https://circularitynexus.io/security"
}

declare_id!("45gVbLLSYYcW254TFoJMXmfupM5dJaFxTLsbny2eqKWx");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("B8VmoTgg2arRfw7qQVTYK9GohYeyMEjaCSW6jVPVBUgV");
}

pub mod waste_mint {
    use anchor_lang::prelude::declare_id;
    declare_id!("EBHC7XpycnQhCd3zq8iWmSuhvpGVyM6krjb6pvwgZ4zE");
}

pub mod carbon_mint {
    use anchor_lang::prelude::declare_id;
    declare_id!("GpMZbSM2GgvTKHJirzeGfMFoaZ8UR2X7F4v8vHTvxFbL");
}

pub const AUTH_SEED: &str = "mint_and_custody_auth";
pub const CONVERSION_CUSTODY_SEED: &str = "conversion_custody";
pub const CARBON_FEE_VAULT_SEED: &str = "carbon_fee_vault";

/// Waste token base units minted per gram before multipliers.
/// The waste mint uses 3 decimals, so one whole token is one gram
/// of accepted material at 1.0x type and quality multipliers.
pub const BASE_RATE_UNITS_PER_GRAM: u64 = 1_000;

/// Waste token base units corresponding to one kilogram of material.
pub const WASTE_UNITS_PER_KG: u64 = 1_000_000;

/// Carbon credit base units per kilogram of CO2e (3-decimal mint,
/// one whole credit = 1 kg CO2e).
pub const CARBON_UNITS_PER_KG: u64 = 1_000;

/// Ceilings for admin-tunable rates. Updates outside these bounds are
/// rejected with `ValueOutOfRange`.
pub const MAX_WASTE_MULTIPLIER: u64 = 50_000; // 5.0x
pub const MAX_QUALITY_MULTIPLIER: u64 = 10_000; // 1.0x
pub const MAX_CARBON_FACTOR: u64 = 200_000; // 20.0x
pub const MAX_CONVERSION_FEE_RATE: u64 = 1_000; // 10%
pub const MIN_SEASONAL_ADJUSTMENT: u64 = 5_000; // 50%
pub const MAX_SEASONAL_ADJUSTMENT: u64 = 20_000; // 200%

pub const MAX_BATCH_CONVERSIONS: usize = 10;
pub const MAX_LOCATION_TAG_LEN: usize = 64;
pub const MAX_METHODOLOGY_LEN: usize = 32;

pub mod error;
pub mod instructions;
pub mod math;
pub mod states;
pub mod utils;

use instructions::*;
use states::{ConversionEntry, QualityGrade, WasteType};

#[program]
pub mod nexus_mint {

    use super::*;

    pub fn initialise_configs(
        ctx: Context<InitialiseConfigs>,
        admin: Pubkey,
        fee_collector: Pubkey,
        conversion_fee_rate: u64,
        min_conversion_amount: u64,
        verification_threshold: u64,
        seasonal_adjustment: u64,
        submission_enabled: bool,
        conversion_enabled: bool,
    ) -> Result<()> {
        instructions::initialise_configs(
            ctx,
            admin,
            fee_collector,
            conversion_fee_rate,
            min_conversion_amount,
            verification_threshold,
            seasonal_adjustment,
            submission_enabled,
            conversion_enabled,
        )
    }

    pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
        instructions::update_config(ctx, param, value)
    }

    pub fn update_rates(ctx: Context<UpdateRates>, table: u8, index: u8, value: u64) -> Result<()> {
        instructions::update_rates(ctx, table, index, value)
    }

    pub fn set_verifier(ctx: Context<SetVerifier>, active: bool) -> Result<()> {
        instructions::set_verifier(ctx, active)
    }

    pub fn submit_waste(
        ctx: Context<SubmitWaste>,
        waste_type: WasteType,
        quality: QualityGrade,
        weight_grams: u64,
        evidence_hash: [u8; 32],
        location_tag: String,
    ) -> Result<()> {
        instructions::submit_waste(
            ctx,
            waste_type,
            quality,
            weight_grams,
            evidence_hash,
            location_tag,
        )
    }

    pub fn verify_waste(
        ctx: Context<VerifyWaste>,
        submission_id: u64,
        approved: bool,
    ) -> Result<()> {
        instructions::verify_waste(ctx, submission_id, approved)
    }

    pub fn convert(
        ctx: Context<Convert>,
        waste_amount: u64,
        waste_type: WasteType,
        methodology: String,
    ) -> Result<()> {
        instructions::convert(ctx, waste_amount, waste_type, methodology)
    }

    pub fn batch_convert<'info>(
        ctx: Context<'_, '_, '_, 'info, BatchConvert<'info>>,
        entries: Vec<ConversionEntry>,
        methodology: String,
    ) -> Result<()> {
        instructions::batch_convert(ctx, entries, methodology)
    }

    pub fn verify_conversion(
        ctx: Context<VerifyConversion>,
        conversion_id: u64,
        approved: bool,
    ) -> Result<()> {
        instructions::verify_conversion(ctx, conversion_id, approved)
    }

    pub fn retire(ctx: Context<Retire>, amount: u64, reason: String) -> Result<()> {
        instructions::retire(ctx, amount, reason)
    }

    pub fn emergency_withdraw(
        ctx: Context<EmergencyWithdraw>,
        param: u8,
        value: u64,
    ) -> Result<()> {
        instructions::emergency_withdraw(ctx, param, value)
    }
}
