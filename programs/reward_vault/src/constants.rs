//! Program constants for the Reward Vault program.
//!
//! PDA seeds and the fixed-point precision used by the reward accumulator.

/// Seed for deriving the stake pool PDA
pub const STAKE_POOL_SEED: &[u8] = b"stake_pool";

/// Seed for deriving user stake account PDAs
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Seed for deriving the vault holding staked principal
pub const STAKING_VAULT_SEED: &[u8] = b"staking_vault";

/// Seed for deriving the vault holding the reward reserve
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Scale of `acc_reward_per_share` (10^18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;
