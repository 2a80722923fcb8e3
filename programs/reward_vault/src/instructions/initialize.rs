/// Initialize instruction handler.
///
/// Creates the stake pool and its two vaults.
///
/// ## Security Guarantees
/// - Both vaults are PDAs owned by the stake pool
/// - Staking and reward mints are locked to pool state permanently
/// - The signer becomes the pool authority

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolInitialized;
use crate::state::StakePool;

/// Accounts required for pool initialization.
///
/// ## Security Notes
/// - `staking_vault` and `reward_vault` are PDAs with `stake_pool` as authority
/// - The pool PDA is unique per (staking mint, reward mint) pair
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The admin authority that will control the pool.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The stake pool account to be created.
    #[account(
        init,
        payer = authority,
        space = StakePool::LEN,
        seeds = [STAKE_POOL_SEED, staking_mint.key().as_ref(), reward_mint.key().as_ref()],
        bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// Mint of the asset participants deposit.
    pub staking_mint: Account<'info, Mint>,

    /// Mint of the asset paid out as reward.
    pub reward_mint: Account<'info, Mint>,

    /// Vault holding deposited principal.
    #[account(
        init,
        payer = authority,
        seeds = [STAKING_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = stake_pool
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Vault holding the reward reserve.
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, stake_pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = stake_pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account operations.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new reward vault.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `reward_rate_per_second` - Initial emission rate (reward units per second, may be zero)
pub fn handler(ctx: Context<Initialize>, reward_rate_per_second: u64) -> Result<()> {
    require!(
        ctx.accounts.staking_vault.owner == ctx.accounts.stake_pool.key(),
        StakingError::InvalidVaultOwner
    );
    require!(
        ctx.accounts.reward_vault.owner == ctx.accounts.stake_pool.key(),
        StakingError::InvalidVaultOwner
    );

    let clock = Clock::get()?;
    let pool_key = ctx.accounts.stake_pool.key();
    let stake_pool = &mut ctx.accounts.stake_pool;

    stake_pool.authority = ctx.accounts.authority.key();
    stake_pool.staking_mint = ctx.accounts.staking_mint.key();
    stake_pool.reward_mint = ctx.accounts.reward_mint.key();
    stake_pool.staking_vault = ctx.accounts.staking_vault.key();
    stake_pool.reward_vault = ctx.accounts.reward_vault.key();

    stake_pool.total_staked = 0;
    stake_pool.acc_reward_per_share = 0;
    stake_pool.last_update_time = clock.unix_timestamp;
    stake_pool.reward_rate_per_second = reward_rate_per_second;
    stake_pool.reward_reserve = 0;
    stake_pool.staker_count = 0;
    stake_pool.total_rewards_paid = 0;
    stake_pool.paused = false;
    stake_pool.created_at = clock.unix_timestamp;

    stake_pool.bump = ctx.bumps.stake_pool;
    stake_pool.staking_vault_bump = ctx.bumps.staking_vault;
    stake_pool.reward_vault_bump = ctx.bumps.reward_vault;

    emit!(PoolInitialized {
        pool: pool_key,
        authority: stake_pool.authority,
        staking_mint: stake_pool.staking_mint,
        reward_mint: stake_pool.reward_mint,
        reward_rate_per_second,
    });

    msg!("Reward vault initialized");
    msg!("Admin: {}", stake_pool.authority);
    msg!("Staking mint: {}", stake_pool.staking_mint);
    msg!("Reward mint: {}", stake_pool.reward_mint);
    msg!("Reward rate: {}/s", reward_rate_per_second);

    Ok(())
}
