use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Unstake amount exceeds the staked balance")]
    InsufficientStake,

    #[msg("Balance is insufficient for the operation")]
    InsufficientBalance,

    #[msg("Stake would exceed the per-user cap for this pool")]
    ExceedsMaxStake,

    #[msg("Value is outside the permitted bounds")]
    ValueOutOfRange,

    #[msg("Caller lacks the required role")]
    Unauthorized,

    #[msg("Minimum staking period has not elapsed")]
    LockNotExpired,

    #[msg("Reward vault cannot cover the claim")]
    InsufficientRewardFunds,

    #[msg("No rewards available to claim")]
    NoRewardsToClaim,

    #[msg("Pool is not active")]
    PoolInactive,

    #[msg("Vault is paused")]
    SystemPaused,

    #[msg("Vault must be paused for this operation")]
    SystemNotPaused,

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

    #[msg("Name exceeds the maximum length")]
    NameTooLong,
}
