//! Owner-gated transitions on the pool.

use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::StakePool;

/// Advance the pool to `now`. Permissionless.
pub fn update_pool(pool: &mut StakePool, now: i64) -> Result<()> {
    pool.advance(now)
}

/// Change the emission rate. Elapsed time up to `now` accrues at the old rate.
///
/// Returns the previous rate.
pub fn set_reward_rate(
    pool: &mut StakePool,
    caller: &Pubkey,
    new_rate: u64,
    now: i64,
) -> Result<u64> {
    pool.require_owner(caller)?;
    pool.advance(now)?;

    let old_rate = pool.reward_rate_per_second;
    pool.reward_rate_per_second = new_rate;
    Ok(old_rate)
}

pub fn fund_rewards(pool: &mut StakePool, caller: &Pubkey, amount: u64) -> Result<()> {
    pool.require_owner(caller)?;
    require!(amount > 0, StakingError::InvalidAmount);

    pool.reward_reserve = pool
        .reward_reserve
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    Ok(())
}

/// Release reward asset back to the owner.
///
/// Only the reserve balance bounds the amount; rewards already accrued to
/// positions are not set aside.
pub fn withdraw_unused_rewards(pool: &mut StakePool, caller: &Pubkey, amount: u64) -> Result<()> {
    pool.require_owner(caller)?;
    require!(amount > 0, StakingError::InvalidAmount);

    pool.reward_reserve = pool
        .reward_reserve
        .checked_sub(amount)
        .ok_or(StakingError::InsufficientRewardReserve)?;
    Ok(())
}

pub fn pause(pool: &mut StakePool, caller: &Pubkey) -> Result<()> {
    pool.require_owner(caller)?;
    pool.require_not_paused()?;
    pool.paused = true;
    Ok(())
}

pub fn unpause(pool: &mut StakePool, caller: &Pubkey) -> Result<()> {
    pool.require_owner(caller)?;
    require!(pool.paused, StakingError::NotPaused);
    pool.paused = false;
    Ok(())
}

/// Hand the pool over to `new_authority`. Returns the previous authority.
pub fn transfer_authority(
    pool: &mut StakePool,
    caller: &Pubkey,
    new_authority: Pubkey,
) -> Result<Pubkey> {
    pool.require_owner(caller)?;
    require!(
        new_authority != Pubkey::default(),
        StakingError::InvalidAuthority
    );

    let old_authority = pool.authority;
    pool.authority = new_authority;
    Ok(old_authority)
}
