//! Claim rewards instruction handler.
//!
//! Pays out accrued reward without touching principal. Available while the
//! pool is paused.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsClaimed;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::token_gateway;

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    /// The participant claiming rewards.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's position. Claiming without one fails with `NothingToClaim`.
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// User's token account for receiving rewards.
    #[account(
        mut,
        constraint = user_reward_account.mint == stake_pool.reward_mint @ StakingError::MintMismatch,
        constraint = user_reward_account.owner == user.key()
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim accumulated rewards.
///
/// # Arguments
/// * `ctx` - ClaimRewards accounts context
pub fn handler(mut ctx: Context<ClaimRewards>) -> Result<()> {
    let clock = Clock::get()?;
    let user_key = ctx.accounts.user.key();
    let pool_key = ctx.accounts.stake_pool.key();
    let bump = ctx.bumps.user_stake;

    let accounts = &mut ctx.accounts;
    accounts.user_stake.ensure_initialized(user_key, pool_key, bump);

    let reward_paid = ledger::claim(
        &mut accounts.stake_pool,
        &mut accounts.user_stake,
        clock.unix_timestamp,
    )?;

    token_gateway::transfer_out(
        &accounts.token_program,
        &accounts.reward_vault,
        &accounts.user_reward_account,
        &accounts.stake_pool,
        reward_paid,
    )?;

    emit!(RewardsClaimed {
        user: user_key,
        amount: reward_paid,
    });

    msg!("Claimed {} reward tokens", reward_paid);
    msg!(
        "Total rewards claimed by user: {}",
        accounts.user_stake.total_rewards_claimed
    );
    msg!("Reward reserve left: {}", accounts.stake_pool.reward_reserve);

    Ok(())
}
