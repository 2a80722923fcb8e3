//! Instruction handlers for the Reward Vault program.
//!
//! Each handler validates accounts, runs the matching `ledger` transition,
//! then moves tokens and emits an event.

pub mod admin;
pub mod claim_rewards;
pub mod deposit;
pub mod emergency_withdraw;
pub mod fund_rewards;
pub mod initialize;
pub mod update_pool;
pub mod views;
pub mod withdraw;
pub mod withdraw_unused_rewards;

pub use admin::*;
pub use claim_rewards::*;
pub use deposit::*;
pub use emergency_withdraw::*;
pub use fund_rewards::*;
pub use initialize::*;
pub use update_pool::*;
pub use views::*;
pub use withdraw::*;
pub use withdraw_unused_rewards::*;
