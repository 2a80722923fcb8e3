use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::math;
use crate::state::UserStake;

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakePool {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,

    pub total_staked: u64,
    /// Reward per staked unit since inception, scaled by `PRECISION`.
    pub acc_reward_per_share: u128,
    pub last_update_time: i64,
    pub reward_rate_per_second: u64,
    pub reward_reserve: u64,

    pub staker_count: u64,
    pub total_rewards_paid: u64,

    pub paused: bool,

    pub created_at: i64,

    pub staking_vault_bump: u8,
    pub reward_vault_bump: u8,
    pub bump: u8,
}

impl StakePool {
    pub const LEN: usize = 8
        + (32 * 5)
        + 8
        + 16
        + 8
        + (8 * 2)
        + (8 * 2)
        + 1
        + 8
        + 3;

    /// Accumulator value `advance(now)` would produce, without mutating.
    ///
    /// Intervals with nothing staked leave the accumulator unchanged; the
    /// rewards emitted during them are never distributed.
    pub fn acc_reward_per_share_at(&self, now: i64) -> Result<u128> {
        require!(now >= self.last_update_time, StakingError::ClockRegression);
        if now == self.last_update_time || self.total_staked == 0 {
            return Ok(self.acc_reward_per_share);
        }

        let elapsed = now
            .checked_sub(self.last_update_time)
            .ok_or(StakingError::MathOverflow)?;
        let elapsed = u64::try_from(elapsed).map_err(|_| StakingError::ConversionOverflow)?;

        let delta =
            math::reward_per_share_delta(elapsed, self.reward_rate_per_second, self.total_staked)?;
        self.acc_reward_per_share
            .checked_add(delta)
            .ok_or_else(|| error!(StakingError::MathOverflow))
    }

    /// Bring the accumulator forward to `now`. Idempotent for a fixed `now`.
    pub fn advance(&mut self, now: i64) -> Result<()> {
        let acc = self.acc_reward_per_share_at(now)?;
        self.acc_reward_per_share = acc;
        self.last_update_time = now;
        Ok(())
    }

    /// Unsettled reward of `position` against the stored accumulator.
    pub fn pending_reward(&self, position: &UserStake) -> Result<u64> {
        math::pending(
            position.principal,
            self.acc_reward_per_share,
            position.reward_debt,
        )
    }

    /// Live preview: pending reward as if the pool were advanced to `now`.
    pub fn pending_reward_at(&self, position: &UserStake, now: i64) -> Result<u64> {
        let acc = self.acc_reward_per_share_at(now)?;
        math::pending(position.principal, acc, position.reward_debt)
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, StakingError::Unauthorized);
        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.paused, StakingError::Paused);
        Ok(())
    }

    pub fn total_staked(&self) -> u64 {
        self.total_staked
    }

    pub fn reward_rate(&self) -> u64 {
        self.reward_rate_per_second
    }

    pub fn acc_reward_per_share(&self) -> u128 {
        self.acc_reward_per_share
    }
}
