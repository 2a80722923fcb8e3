//! # Reward Vault Program
//!
//! Participants stake one SPL token and continuously accrue a second one,
//! proportional to their share of the pool over time.
//!
//! ## Features
//! - Reward-per-share accumulator: O(1) accrual regardless of staker count
//! - Pending rewards settled automatically on every deposit and withdraw
//! - Claim rewards without unstaking, even while paused
//! - Emergency withdraw that returns principal without settlement
//! - Owner-funded reward reserve with adjustable emission rate
//! - Checked fixed-point math (10^18 precision)

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;
pub mod token_gateway;

use instructions::*;

#[program]
pub mod reward_vault {
    use super::*;

    /// Creates the stake pool and its staking and reward vaults.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `reward_rate_per_second` - Initial emission rate in reward units per second
    pub fn initialize(ctx: Context<Initialize>, reward_rate_per_second: u64) -> Result<()> {
        instructions::initialize::handler(ctx, reward_rate_per_second)
    }

    /// Deposits stake asset, settling any pending reward first.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - The pool is paused
    /// - The reward reserve cannot cover the settled reward
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraws stake asset, settling any pending reward first.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - The pool is paused
    /// - Amount exceeds the position's principal
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Claims pending rewards without unstaking.
    ///
    /// # Errors
    /// Returns an error if there is nothing to claim or the reserve is short.
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Returns the whole principal and forfeits pending rewards. Works while paused.
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw::handler(ctx)
    }

    /// Advances the reward accumulator to the current time. Anyone may call it.
    pub fn update_pool(ctx: Context<UpdatePool>) -> Result<()> {
        instructions::update_pool::handler(ctx)
    }

    /// Admin function to change the emission rate.
    pub fn set_reward_rate(ctx: Context<AdminControl>, new_rate: u64) -> Result<()> {
        instructions::admin::set_reward_rate_handler(ctx, new_rate)
    }

    /// Admin function to add reward asset to the reserve.
    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards::handler(ctx, amount)
    }

    /// Admin function to take reward asset back out of the reserve.
    pub fn withdraw_unused_rewards(ctx: Context<WithdrawUnusedRewards>, amount: u64) -> Result<()> {
        instructions::withdraw_unused_rewards::handler(ctx, amount)
    }

    /// Admin function to pause deposits and withdrawals.
    pub fn pause(ctx: Context<AdminControl>) -> Result<()> {
        instructions::admin::pause_handler(ctx)
    }

    /// Admin function to resume deposits and withdrawals.
    pub fn unpause(ctx: Context<AdminControl>) -> Result<()> {
        instructions::admin::unpause_handler(ctx)
    }

    /// Admin function to transfer authority to a new address.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the current admin
    /// - New authority is zero address
    pub fn transfer_authority(ctx: Context<AdminControl>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority_handler(ctx, new_authority)
    }

    /// Pending reward of a position at the current clock.
    pub fn pending_rewards(ctx: Context<PendingRewards>) -> Result<u64> {
        instructions::views::pending_rewards_handler(ctx)
    }

    /// Reward asset held by the reward vault.
    pub fn reward_token_balance(ctx: Context<RewardTokenBalance>) -> Result<u64> {
        instructions::views::reward_token_balance_handler(ctx)
    }
}
