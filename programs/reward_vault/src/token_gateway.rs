//! SPL Token transfers in and out of the pool vaults.
//!
//! Outbound transfers are signed by the stake pool PDA. Handlers call these
//! only after the ledger transition has been committed to the accounts.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::STAKE_POOL_SEED;
use crate::state::StakePool;

/// Pull `amount` from a participant-owned token account into a vault.
pub fn transfer_in<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = Transfer {
        from: from.to_account_info(),
        to: vault.to_account_info(),
        authority: authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)
}

/// Push `amount` from a pool vault to `to`, signed by the pool PDA.
pub fn transfer_out<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    stake_pool: &Account<'info, StakePool>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let bump = [stake_pool.bump];
    let seeds = &[
        STAKE_POOL_SEED,
        stake_pool.staking_mint.as_ref(),
        stake_pool.reward_mint.as_ref(),
        &bump,
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: vault.to_account_info(),
        to: to.to_account_info(),
        authority: stake_pool.to_account_info(),
    };
    let cpi_ctx =
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)
}
