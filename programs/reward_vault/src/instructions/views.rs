//! Read-only instructions. Values are returned through program return data.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::StakingError;
use crate::state::{StakePool, UserStake};

#[derive(Accounts)]
pub struct PendingRewards<'info> {
    pub stake_pool: Account<'info, StakePool>,

    /// Absent for a participant that has never interacted with the pool.
    #[account(
        constraint = user_stake.stake_pool == stake_pool.key() @ StakingError::StakePoolMismatch
    )]
    pub user_stake: Option<Account<'info, UserStake>>,
}

/// Pending reward of a position, previewed at the current clock.
pub fn pending_rewards_handler(ctx: Context<PendingRewards>) -> Result<u64> {
    let clock = Clock::get()?;
    preview_pending(
        &ctx.accounts.stake_pool,
        ctx.accounts.user_stake.as_deref(),
        clock.unix_timestamp,
    )
}

/// A missing position has nothing pending.
pub fn preview_pending(pool: &StakePool, position: Option<&UserStake>, now: i64) -> Result<u64> {
    match position {
        Some(position) => pool.pending_reward_at(position, now),
        None => Ok(0),
    }
}

#[derive(Accounts)]
pub struct RewardTokenBalance<'info> {
    #[account(has_one = reward_vault @ StakingError::VaultMismatch)]
    pub stake_pool: Account<'info, StakePool>,

    pub reward_vault: Account<'info, TokenAccount>,
}

/// Reward asset actually held by the reward vault.
pub fn reward_token_balance_handler(ctx: Context<RewardTokenBalance>) -> Result<u64> {
    Ok(ctx.accounts.reward_vault.amount)
}
