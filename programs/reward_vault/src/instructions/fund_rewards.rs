/// Fund rewards instruction handler.
///
/// Moves reward asset from the authority into the reward vault and credits
/// the reserve.
///
/// ## Security Guarantees
/// - Only the pool authority can fund
/// - Reward vault and mint validated against pool state

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardsFunded;
use crate::ledger;
use crate::state::StakePool;
use crate::token_gateway;

/// Accounts required for funding the reward reserve.
#[derive(Accounts)]
pub struct FundRewards<'info> {
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

    /// Authority's reward asset account.
    #[account(
        mut,
        constraint = authority_reward_account.mint == stake_pool.reward_mint @ StakingError::MintMismatch,
        constraint = authority_reward_account.owner == authority.key()
    )]
    pub authority_reward_account: Account<'info, TokenAccount>,

    /// Pool's reward vault.
    #[account(
        mut,
        constraint = reward_vault.owner == stake_pool.key() @ StakingError::InvalidVaultOwner
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the reward reserve.
///
/// # Arguments
/// * `ctx` - FundRewards accounts context
/// * `amount` - Amount of reward asset to add
pub fn handler(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    require!(amount > 0, StakingError::InvalidAmount);

    // Inbound: the transfer must land before the reserve is credited.
    token_gateway::transfer_in(
        &ctx.accounts.token_program,
        &ctx.accounts.authority_reward_account,
        &ctx.accounts.reward_vault,
        &ctx.accounts.authority,
        amount,
    )?;

    ledger::fund_rewards(&mut ctx.accounts.stake_pool, &authority, amount)?;

    ctx.accounts.reward_vault.reload()?;

    emit!(RewardsFunded { amount });

    msg!("Reward reserve funded with {} tokens", amount);
    msg!("Reward reserve: {}", ctx.accounts.stake_pool.reward_reserve);
    msg!("Reward vault balance: {}", ctx.accounts.reward_vault.amount);

    Ok(())
}
