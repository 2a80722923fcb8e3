//! Ledger state transitions.
//!
//! Each function here takes the pool and position by reference, validates,
//! stages every change on a copy and commits only when the whole transition
//! succeeded. Token movements are returned to the caller, which performs
//! them after the new state is in place.

pub mod admin;
pub mod vault;

#[cfg(test)]
mod tests;

pub use admin::*;
pub use vault::*;

/// Token movements owed by a committed vault transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settlement {
    /// Reward asset to send from the reward vault to the participant.
    pub reward_paid: u64,
    /// Stake asset moved between the participant and the staking vault.
    pub principal: u64,
}
