//! Fixed-point helpers for the reward accumulator.
//!
//! Share math is stored as `u128` scaled by [`PRECISION`] and computed with a
//! 256-bit intermediate, so `a * b` never overflows before the division.
//! Division truncates, leaving rounding dust in the pool rather than paying
//! it out. A quotient wider than `u128` is [`StakingError::MathOverflow`].

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::constants::PRECISION;
use crate::error::StakingError;

/// `a * b / denominator`, truncating.
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128> {
    require!(denominator != 0, StakingError::DivisionByZero);
    // u128 × u128 always fits in 256 bits.
    let quotient = U256::from(a) * U256::from(b) / U256::from(denominator);
    require!(
        quotient <= U256::from(u128::MAX),
        StakingError::MathOverflow
    );
    Ok(quotient.low_u128())
}

/// Accumulator increment for `elapsed` seconds at `rate` spread over `total_staked`.
///
/// ```text
/// Δacc = elapsed × rate × PRECISION / total_staked
/// ```
pub fn reward_per_share_delta(elapsed: u64, rate: u64, total_staked: u64) -> Result<u128> {
    // u64 × u64 always fits in u128.
    let emitted = (elapsed as u128) * (rate as u128);
    mul_div(emitted, PRECISION, total_staked as u128)
}

/// Cumulative reward of `principal` at accumulator value `acc`, in reward units.
pub fn accrued(principal: u64, acc_reward_per_share: u128) -> Result<u128> {
    mul_div(principal as u128, acc_reward_per_share, PRECISION)
}

/// Unsettled reward: `accrued(principal, acc) − reward_debt`.
///
/// A debt above the accrued value means the ledger is corrupt; it is an
/// error, never clamped to zero.
pub fn pending(principal: u64, acc_reward_per_share: u128, reward_debt: u128) -> Result<u64> {
    let gross = accrued(principal, acc_reward_per_share)?;
    let net = gross
        .checked_sub(reward_debt)
        .ok_or(StakingError::RewardDebtExceedsAccrued)?;
    to_u64(net)
}

pub fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(StakingError::ConversionOverflow))
}
