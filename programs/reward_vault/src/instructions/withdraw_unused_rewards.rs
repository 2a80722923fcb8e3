//! Withdraw unused rewards instruction handler.
//!
//! Returns reward asset from the reserve to the authority. Rewards already
//! accrued to positions are not set aside, so over-withdrawing can leave
//! later claims unpaid.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::UnusedRewardsWithdrawn;
use crate::ledger;
use crate::state::StakePool;
use crate::token_gateway;

#[derive(Accounts)]
pub struct WithdrawUnusedRewards<'info> {
    /// The pool authority.
    pub authority: Signer<'info>,

    /// The stake pool.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = authority @ StakingError::Unauthorized,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// Authority's reward asset account (receives the withdrawal).
    #[account(
        mut,
        constraint = authority_reward_account.mint == stake_pool.reward_mint @ StakingError::MintMismatch,
        constraint = authority_reward_account.owner == authority.key()
    )]
    pub authority_reward_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

pub fn handler(mut ctx: Context<WithdrawUnusedRewards>, amount: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let accounts = &mut ctx.accounts;

    ledger::withdraw_unused_rewards(&mut accounts.stake_pool, &authority, amount)?;

    token_gateway::transfer_out(
        &accounts.token_program,
        &accounts.reward_vault,
        &accounts.authority_reward_account,
        &accounts.stake_pool,
        amount,
    )?;

    emit!(UnusedRewardsWithdrawn {
        to: authority,
        amount,
    });

    msg!("Withdrew {} unused reward tokens", amount);
    msg!("Reward reserve left: {}", accounts.stake_pool.reward_reserve);

    Ok(())
}
