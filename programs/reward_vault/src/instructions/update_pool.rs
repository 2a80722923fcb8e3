//! Update pool instruction handler.
//!
//! Permissionless accrual checkpoint.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::PoolUpdated;
use crate::ledger;
use crate::state::StakePool;

#[derive(Accounts)]
pub struct UpdatePool<'info> {
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,
}

pub fn handler(ctx: Context<UpdatePool>) -> Result<()> {
    let clock = Clock::get()?;
    let stake_pool = &mut ctx.accounts.stake_pool;

    ledger::update_pool(stake_pool, clock.unix_timestamp)?;

    emit!(PoolUpdated {
        acc_reward_per_share: stake_pool.acc_reward_per_share,
        last_update_time: stake_pool.last_update_time,
    });
    msg!(
        "Pool updated: acc_reward_per_share={}",
        stake_pool.acc_reward_per_share
    );

    Ok(())
}
