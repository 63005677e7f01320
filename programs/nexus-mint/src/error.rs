use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Required field is zero or empty")]
    InvalidInput,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Balance is insufficient for the operation")]
    InsufficientBalance,

    #[msg("Amount is below the configured minimum")]
    BelowMinimum,

    #[msg("Value is outside the permitted bounds")]
    ValueOutOfRange,

    #[msg("Caller lacks the required role")]
    Unauthorized,

    #[msg("Record has already been verified")]
    AlreadyVerified,

    #[msg("Record was auto-verified below the verification threshold")]
    BelowVerificationThreshold,

    #[msg("Waste submissions are currently disabled")]
    SubmissionsDisabled,

    #[msg("Carbon conversions are currently disabled")]
    ConversionsDisabled,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,

    #[msg("Invalid mint account")]
    InvalidMint,

    #[msg("Invalid vault account")]
    InvalidVault,

    #[msg("Invalid parameter provided")]
    InvalidParam,

    #[msg("Missing remaining account")]
    MissingRemainingAccount,

    #[msg("Batch exceeds the maximum entry count")]
    BatchTooLarge,

    #[msg("Conversion record account does not match the expected address")]
    InvalidConversionAccount,

    #[msg("Name or tag exceeds the maximum length")]
    NameTooLong,
}
