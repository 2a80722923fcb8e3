//! Events emitted by the Reward Vault program.

use anchor_lang::prelude::*;

/// Emitted once when a pool is created.
#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_rate_per_second: u64,
}

#[event]
pub struct Deposited {
    pub user: Pubkey,
    pub amount: u64,
    /// Pending reward settled before the deposit.
    pub reward_paid: u64,
}

#[event]
pub struct Withdrawn {
    pub user: Pubkey,
    pub amount: u64,
    pub reward_paid: u64,
}

#[event]
pub struct RewardsClaimed {
    pub user: Pubkey,
    pub amount: u64,
}

/// Principal returned without reward settlement.
#[event]
pub struct EmergencyWithdrawn {
    pub user: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PoolUpdated {
    pub acc_reward_per_share: u128,
    pub last_update_time: i64,
}

#[event]
pub struct RewardRateUpdated {
    pub old_rate: u64,
    pub new_rate: u64,
}

#[event]
pub struct RewardsFunded {
    pub amount: u64,
}

#[event]
pub struct UnusedRewardsWithdrawn {
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PoolPaused {
    pub by: Pubkey,
}

#[event]
pub struct PoolUnpaused {
    pub by: Pubkey,
}

#[event]
pub struct AuthorityTransferred {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}
