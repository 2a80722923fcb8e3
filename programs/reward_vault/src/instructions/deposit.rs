//! Deposit instruction handler.
//!
//! Adds stake asset to the caller's position, paying out any reward accrued
//! on the existing principal first.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Deposited;
use crate::ledger;
use crate::state::{StakePool, UserStake};
use crate::token_gateway;

/// Accounts required for depositing.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The participant depositing tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = staking_vault @ StakingError::VaultMismatch,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// User's position (created on first deposit).
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [USER_STAKE_SEED, stake_pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    /// User's stake asset account (source of the deposit).
    #[account(
        mut,
        constraint = user_staking_account.mint == stake_pool.staking_mint @ StakingError::MintMismatch,
        constraint = user_staking_account.owner == user.key()
    )]
    pub user_staking_account: Account<'info, TokenAccount>,

    /// User's reward asset account (receives settled rewards).
    #[account(
        mut,
        constraint = user_reward_account.mint == stake_pool.reward_mint @ StakingError::MintMismatch,
        constraint = user_reward_account.owner == user.key()
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Deposit tokens into the pool.
///
/// # Arguments
/// * `ctx` - Deposit accounts context
/// * `amount` - Amount of stake asset to deposit
pub fn handler(mut ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let user_key = ctx.accounts.user.key();
    let pool_key = ctx.accounts.stake_pool.key();
    let bump = ctx.bumps.user_stake;

    let accounts = &mut ctx.accounts;
    accounts.user_stake.ensure_initialized(user_key, pool_key, bump);

    let settlement = ledger::deposit(
        &mut accounts.stake_pool,
        &mut accounts.user_stake,
        amount,
        clock.unix_timestamp,
    )?;

    token_gateway::transfer_in(
        &accounts.token_program,
        &accounts.user_staking_account,
        &accounts.staking_vault,
        &accounts.user,
        amount,
    )?;
    token_gateway::transfer_out(
        &accounts.token_program,
        &accounts.reward_vault,
        &accounts.user_reward_account,
        &accounts.stake_pool,
        settlement.reward_paid,
    )?;

    emit!(Deposited {
        user: user_key,
        amount,
        reward_paid: settlement.reward_paid,
    });

    msg!("Deposited {} tokens", amount);
    msg!("Rewards paid: {}", settlement.reward_paid);
    msg!("Total staked by user: {}", accounts.user_stake.principal);
    msg!("Total staked in pool: {}", accounts.stake_pool.total_staked);

    Ok(())
}
