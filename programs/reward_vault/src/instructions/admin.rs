/// Admin instruction handlers.
///
/// Handles owner-only operations on the stake pool.
///
/// ## Security Guarantees
/// - All admin functions require signer == pool.authority
/// - The ledger re-checks the caller against the stored authority

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::{AuthorityTransferred, PoolPaused, PoolUnpaused, RewardRateUpdated};
use crate::ledger;
use crate::state::StakePool;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The admin authority.
    /// SECURITY: Must be signer AND match pool.authority.
    pub authority: Signer<'info>,

    /// The stake pool to modify.
    #[account(
        mut,
        seeds = [STAKE_POOL_SEED, stake_pool.staking_mint.as_ref(), stake_pool.reward_mint.as_ref()],
        bump = stake_pool.bump,
        has_one = authority @ StakingError::Unauthorized
    )]
    pub stake_pool: Account<'info, StakePool>,
}

/// Change the reward emission rate.
///
/// The pool is advanced first so time elapsed up to now accrues at the old rate.
pub fn set_reward_rate_handler(ctx: Context<AdminControl>, new_rate: u64) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let old_rate = ledger::set_reward_rate(
        &mut ctx.accounts.stake_pool,
        &authority,
        new_rate,
        clock.unix_timestamp,
    )?;

    emit!(RewardRateUpdated { old_rate, new_rate });

    msg!("Reward rate updated: {} -> {}", old_rate, new_rate);
    msg!("Admin: {}", authority);

    Ok(())
}

/// Pause deposits and withdrawals. Claims and emergency withdraws stay open.
pub fn pause_handler(ctx: Context<AdminControl>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ledger::pause(&mut ctx.accounts.stake_pool, &authority)?;

    emit!(PoolPaused { by: authority });
    msg!("Pool PAUSED by {}", authority);

    Ok(())
}

pub fn unpause_handler(ctx: Context<AdminControl>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ledger::unpause(&mut ctx.accounts.stake_pool, &authority)?;

    emit!(PoolUnpaused { by: authority });
    msg!("Pool RESUMED by {}", authority);

    Ok(())
}

/// Transfer admin authority to a new address.
///
/// # Security
/// - Only current authority can call this
/// - New authority must be a valid pubkey (non-zero)
pub fn transfer_authority_handler(
    ctx: Context<AdminControl>,
    new_authority: Pubkey,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let old_authority =
        ledger::transfer_authority(&mut ctx.accounts.stake_pool, &authority, new_authority)?;

    emit!(AuthorityTransferred {
        old_authority,
        new_authority,
    });
    msg!("Authority transferred: {} -> {}", old_authority, new_authority);

    Ok(())
}
