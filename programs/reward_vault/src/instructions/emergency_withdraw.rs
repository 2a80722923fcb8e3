//! Emergency withdraw instruction handler.
//!
//! Returns the whole principal without reward settlement. Works while paused.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::EmergencyWithdrawn;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::token_gateway;

/// Accounts required for an emergency withdraw.
#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    /// The participant recovering principal.
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = staking_vault @ StakingError::VaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's position.
    #[account(
        mut,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ StakingError::Unauthorized,
        constraint = user_stake.stake_pool == stake_pool.key() @ StakingError::StakePoolMismatch
    )]
    pub user_stake: Account<'info, UserStake>,

    /// User's stake asset account (receives principal).
    #[account(
        mut,
        constraint = user_staking_account.mint == stake_pool.staking_mint @ StakingError::MintMismatch,
        constraint = user_staking_account.owner == user.key()
    )]
    pub user_staking_account: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

pub fn handler(mut ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let clock = Clock::get()?;
    let user_key = ctx.accounts.user.key();
    let accounts = &mut ctx.accounts;

    let amount = ledger::emergency_withdraw(
        &mut accounts.stake_pool,
        &mut accounts.user_stake,
        clock.unix_timestamp,
    )?;

    token_gateway::transfer_out(
        &accounts.token_program,
        &accounts.staking_vault,
        &accounts.user_staking_account,
        &accounts.stake_pool,
        amount,
    )?;

    emit!(EmergencyWithdrawn {
        user: user_key,
        amount,
    });

    msg!("Emergency withdrew {} tokens, pending rewards forfeited", amount);

    Ok(())
}
