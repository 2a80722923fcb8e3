//! Participant-facing transitions: deposit, withdraw, claim, emergency withdraw.

use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::ledger::Settlement;
use crate::state::{StakePool, UserStake};

/// Pay out the pending reward of `position` from the reserve.
///
/// Callers advance the pool first and resync the reward debt afterwards.
fn settle(pool: &mut StakePool, position: &mut UserStake) -> Result<u64> {
    let pending = pool.pending_reward(position)?;
    if pending == 0 {
        return Ok(0);
    }

    pool.reward_reserve = pool
        .reward_reserve
        .checked_sub(pending)
        .ok_or(StakingError::InsufficientRewardReserve)?;
    pool.total_rewards_paid = pool
        .total_rewards_paid
        .checked_add(pending)
        .ok_or(StakingError::MathOverflow)?;
    position.total_rewards_claimed = position
        .total_rewards_claimed
        .checked_add(pending)
        .ok_or(StakingError::MathOverflow)?;

    Ok(pending)
}

/// Add `amount` to the position, settling any reward accrued so far.
pub fn deposit(
    pool: &mut StakePool,
    position: &mut UserStake,
    amount: u64,
    now: i64,
) -> Result<Settlement> {
    require!(amount > 0, StakingError::InvalidAmount);
    pool.require_not_paused()?;

    let mut next_pool = pool.clone();
    let mut next_position = position.clone();
    next_pool.advance(now)?;

    let reward_paid = if next_position.principal > 0 {
        settle(&mut next_pool, &mut next_position)?
    } else {
        0
    };

    if next_position.principal == 0 {
        next_pool.staker_count = next_pool
            .staker_count
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
    }
    next_position.principal = next_position
        .principal
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    next_pool.total_staked = next_pool
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    next_position.sync_reward_debt(next_pool.acc_reward_per_share)?;
    next_position.last_action_time = now;

    *pool = next_pool;
    *position = next_position;

    Ok(Settlement {
        reward_paid,
        principal: amount,
    })
}

/// Remove `amount` from the position, settling any reward accrued so far.
pub fn withdraw(
    pool: &mut StakePool,
    position: &mut UserStake,
    amount: u64,
    now: i64,
) -> Result<Settlement> {
    require!(amount > 0, StakingError::InvalidAmount);
    pool.require_not_paused()?;
    require!(
        amount <= position.principal,
        StakingError::InsufficientBalance
    );

    let mut next_pool = pool.clone();
    let mut next_position = position.clone();
    next_pool.advance(now)?;

    let reward_paid = settle(&mut next_pool, &mut next_position)?;

    next_position.principal = next_position
        .principal
        .checked_sub(amount)
        .ok_or(StakingError::MathOverflow)?;
    next_pool.total_staked = next_pool
        .total_staked
        .checked_sub(amount)
        .ok_or(StakingError::MathOverflow)?;
    if next_position.principal == 0 {
        next_pool.staker_count = next_pool.staker_count.saturating_sub(1);
    }
    next_position.sync_reward_debt(next_pool.acc_reward_per_share)?;
    next_position.last_action_time = now;

    *pool = next_pool;
    *position = next_position;

    Ok(Settlement {
        reward_paid,
        principal: amount,
    })
}

/// Pay out the pending reward. Not gated by the pause flag.
pub fn claim(pool: &mut StakePool, position: &mut UserStake, now: i64) -> Result<u64> {
    let mut next_pool = pool.clone();
    let mut next_position = position.clone();
    next_pool.advance(now)?;

    require!(
        next_pool.pending_reward(&next_position)? > 0,
        StakingError::NothingToClaim
    );
    let reward_paid = settle(&mut next_pool, &mut next_position)?;
    next_position.sync_reward_debt(next_pool.acc_reward_per_share)?;
    next_position.last_action_time = now;

    *pool = next_pool;
    *position = next_position;

    Ok(reward_paid)
}

/// Return the whole principal without touching the accumulator.
///
/// Works while paused. Any unclaimed reward is forfeited.
pub fn emergency_withdraw(pool: &mut StakePool, position: &mut UserStake, now: i64) -> Result<u64> {
    let amount = position.principal;
    require!(amount > 0, StakingError::InsufficientBalance);

    let total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(StakingError::MathOverflow)?;

    pool.total_staked = total_staked;
    pool.staker_count = pool.staker_count.saturating_sub(1);
    position.principal = 0;
    position.reward_debt = 0;
    position.last_action_time = now;

    Ok(amount)
}
