use anchor_lang::prelude::*;

use crate::math;

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct UserStake {
    pub owner: Pubkey,
    pub stake_pool: Pubkey,

    pub principal: u64,
    /// `principal * acc_reward_per_share / PRECISION` at the last settlement.
    pub reward_debt: u128,
    pub total_rewards_claimed: u64,

    pub last_action_time: i64,

    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 16 + 8 + 8 + 1;

    /// A freshly created account still carries the default owner.
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Bind a lazily created account to its owner and pool.
    pub fn ensure_initialized(&mut self, owner: Pubkey, stake_pool: Pubkey, bump: u8) {
        if self.is_initialized() {
            return;
        }
        self.owner = owner;
        self.stake_pool = stake_pool;
        self.bump = bump;
    }

    /// Reset the debt so nothing is pending at `acc_reward_per_share`.
    pub fn sync_reward_debt(&mut self, acc_reward_per_share: u128) -> Result<()> {
        self.reward_debt = math::accrued(self.principal, acc_reward_per_share)?;
        Ok(())
    }

    pub fn user_info(&self) -> (u64, u128) {
        (self.principal, self.reward_debt)
    }
}
