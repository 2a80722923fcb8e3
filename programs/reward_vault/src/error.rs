//! Error types for the Reward Vault program.
//!
//! Every variant aborts the enclosing instruction; the runtime discards all
//! account changes made before the error was raised.
//!
//! ## Error Code Ranges
//! - 6000-6001: Input validation errors
//! - 6002-6005: State/balance errors
//! - 6006: Time errors
//! - 6007-6010: Math/overflow errors
//! - 6011-6012: Authorization errors
//! - 6013-6016: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the Reward Vault program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors ==========

    /// [6000] Zero-amount deposit, withdraw, fund or reward withdrawal.
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    /// [6001] Withdraw amount exceeds the recorded principal.
    #[msg("Insufficient staked balance for this operation")]
    InsufficientBalance,

    // ========== State/Balance Errors ==========

    /// [6002] Claim requested with zero pending reward.
    #[msg("No rewards to claim")]
    NothingToClaim,

    /// [6003] Deposit or withdraw attempted while the pool is paused.
    #[msg("Pool is paused")]
    Paused,

    /// [6004] Unpause requested while the pool is active.
    #[msg("Pool is not paused")]
    NotPaused,

    /// [6005] The reward reserve cannot cover the payout.
    #[msg("Insufficient reward reserve for this payout")]
    InsufficientRewardReserve,

    // ========== Time Errors ==========

    /// [6006] Accrual invoked with a timestamp older than the last update.
    #[msg("Timestamp is older than the last pool update")]
    ClockRegression,

    // ========== Math/Overflow Errors ==========

    /// [6007] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    /// [6008] Division by zero attempted.
    #[msg("Division by zero attempted")]
    DivisionByZero,

    /// [6009] Integer conversion failed (value out of range).
    #[msg("Integer conversion failed - value out of range")]
    ConversionOverflow,

    /// [6010] Reward debt is larger than the accrued reward of a position.
    #[msg("Reward debt exceeds accrued reward")]
    RewardDebtExceedsAccrued,

    // ========== Authorization Errors ==========

    /// [6011] Caller is not the pool authority.
    #[msg("Unauthorized: caller is not the pool authority")]
    Unauthorized,

    /// [6012] New authority is the default (all-zero) key.
    #[msg("Invalid authority")]
    InvalidAuthority,

    // ========== Account Validation Errors ==========

    /// [6013] Token account mint does not match the pool's mint.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// [6014] The provided vault does not match the pool's vault.
    #[msg("Vault address mismatch")]
    VaultMismatch,

    /// [6015] Vault owner is not the stake pool PDA.
    #[msg("Vault owner must be the stake pool PDA")]
    InvalidVaultOwner,

    /// [6016] User stake account does not belong to this pool.
    #[msg("User stake account does not belong to this pool")]
    StakePoolMismatch,
}
