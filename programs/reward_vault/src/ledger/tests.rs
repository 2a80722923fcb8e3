use anchor_lang::prelude::*;

use super::*;
use crate::error::StakingError;
use crate::state::{StakePool, UserStake};

/// One whole token at 9 decimals.
const ONE: u64 = 1_000_000_000;
const T0: i64 = 1_700_000_000;

fn funded_pool() -> StakePool {
    let mut pool = StakePool {
        authority: Pubkey::new_unique(),
        reward_rate_per_second: ONE,
        last_update_time: T0,
        created_at: T0,
        ..StakePool::default()
    };
    let owner = pool.authority;
    fund_rewards(&mut pool, &owner, 100_000 * ONE).unwrap();
    pool
}

fn position() -> UserStake {
    UserStake {
        owner: Pubkey::new_unique(),
        ..UserStake::default()
    }
}

fn assert_ledger_consistent(pool: &StakePool, positions: &[UserStake]) {
    let principal: u64 = positions.iter().map(|p| p.principal).sum();
    assert_eq!(pool.total_staked, principal);
    let stakers = positions.iter().filter(|p| p.principal > 0).count() as u64;
    assert_eq!(pool.staker_count, stakers);
}

// ── Accrual ────────────────────────────────────────────────────────────────

#[test]
fn single_staker_accrues_linearly() {
    let mut pool = funded_pool();
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();

    assert_eq!(pool.pending_reward_at(&alice, T0 + 10).unwrap(), 10 * ONE);
    assert_eq!(pool.pending_reward_at(&alice, T0 + 20).unwrap(), 20 * ONE);
    assert_eq!(pool.pending_reward_at(&alice, T0 + 30).unwrap(), 30 * ONE);
}

#[test]
fn rewards_split_by_share() {
    let mut pool = funded_pool();
    let mut alice = position();
    let mut bob = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();
    deposit(&mut pool, &mut bob, 2_000 * ONE, T0).unwrap();

    let pending_alice = pool.pending_reward_at(&alice, T0 + 100).unwrap();
    let pending_bob = pool.pending_reward_at(&bob, T0 + 100).unwrap();

    assert!(pending_alice > 0);
    assert!(pending_bob.abs_diff(2 * pending_alice) <= 1);
    // Truncation keeps the payout at or below what was emitted.
    assert!(pending_alice + pending_bob <= 100 * ONE);
}

#[test]
fn later_deposit_changes_split_going_forward_only() {
    let mut pool = funded_pool();
    let mut alice = position();
    let mut bob = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();
    deposit(&mut pool, &mut bob, 1_000 * ONE, T0 + 100).unwrap();

    // Alice had the pool to herself for 100s, then half of it for 100s.
    assert_eq!(pool.pending_reward_at(&alice, T0 + 200).unwrap(), 150 * ONE);
    assert_eq!(pool.pending_reward_at(&bob, T0 + 200).unwrap(), 50 * ONE);
}

#[test]
fn empty_pool_interval_is_not_distributed() {
    let mut pool = funded_pool();
    update_pool(&mut pool, T0 + 100).unwrap();
    assert_eq!(pool.acc_reward_per_share, 0);
    assert_eq!(pool.last_update_time, T0 + 100);

    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0 + 100).unwrap();
    assert_eq!(pool.pending_reward_at(&alice, T0 + 110).unwrap(), 10 * ONE);
}

#[test]
fn pending_view_is_idempotent() {
    let mut pool = funded_pool();
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();

    let first = pool.pending_reward_at(&alice, T0 + 42).unwrap();
    let second = pool.pending_reward_at(&alice, T0 + 42).unwrap();
    assert_eq!(first, second);
    assert_eq!(pool.pending_reward(&alice).unwrap(), 0);
}

#[test]
fn tiny_and_huge_positions_still_accrue() {
    let mut pool = funded_pool();
    let mut dust = position();
    deposit(&mut pool, &mut dust, 1, T0).unwrap();
    assert_eq!(pool.pending_reward_at(&dust, T0 + 10).unwrap(), 10 * ONE);

    let mut pool = funded_pool();
    let mut whale = position();
    deposit(&mut pool, &mut whale, 1_000_000 * ONE, T0).unwrap();
    assert_eq!(pool.pending_reward_at(&whale, T0 + 100).unwrap(), 100 * ONE);
}

#[test]
fn dust_first_staker_does_not_block_later_deposits() {
    let mut pool = funded_pool();
    let mut dust = position();
    let mut bob = position();
    deposit(&mut pool, &mut dust, 1, T0).unwrap();
    update_pool(&mut pool, T0 + 3_600).unwrap();
    assert_eq!(
        pool.acc_reward_per_share,
        3_600_000_000_000_000_000_000_000_000_000
    );

    deposit(&mut pool, &mut bob, 1_000 * ONE, T0 + 3_600).unwrap();
    assert_eq!(bob.reward_debt, 3_600_000_000_000_000_000_000_000);
    assert_eq!(pool.pending_reward_at(&dust, T0 + 3_600).unwrap(), 3_600 * ONE);

    let bob_pending = pool.pending_reward_at(&bob, T0 + 3_700).unwrap();
    assert!(bob_pending.abs_diff(100 * ONE) <= 1);
    assert_eq!(claim(&mut pool, &mut bob, T0 + 3_700).unwrap(), bob_pending);
    assert_eq!(claim(&mut pool, &mut dust, T0 + 3_700).unwrap(), 3_600 * ONE);
    withdraw(&mut pool, &mut bob, 1_000 * ONE, T0 + 3_700).unwrap();
    assert_ledger_consistent(&pool, &[dust, bob]);
}

#[test]
fn high_emission_rate_keeps_pool_operable() {
    const RATE: u64 = 1_000_000_000_000_000_000;
    let mut pool = StakePool {
        authority: Pubkey::new_unique(),
        reward_rate_per_second: RATE,
        last_update_time: T0,
        ..StakePool::default()
    };
    let owner = pool.authority;
    fund_rewards(&mut pool, &owner, 15 * RATE).unwrap();
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();

    assert_eq!(claim(&mut pool, &mut alice, T0 + 10).unwrap(), 10 * RATE);

    // 390 more seconds emit more than u128 can hold once scaled by PRECISION.
    assert_eq!(set_reward_rate(&mut pool, &owner, ONE, T0 + 400).unwrap(), RATE);
    assert_eq!(
        pool.acc_reward_per_share,
        400_000_000_000_000_000_000_000_000
    );
    assert_eq!(pool.last_update_time, T0 + 400);

    update_pool(&mut pool, T0 + 500).unwrap();
    let mut bob = position();
    deposit(&mut pool, &mut bob, ONE, T0 + 500).unwrap();
    assert_eq!(pool.total_staked, 1_000 * ONE + ONE);
    assert_eq!(pool.pending_reward(&bob).unwrap(), 0);
}

// ── Vault operations ───────────────────────────────────────────────────────

#[test]
fn deposit_rejects_zero_amount() {
    let mut pool = funded_pool();
    let mut alice = position();
    assert_eq!(
        deposit(&mut pool, &mut alice, 0, T0).unwrap_err(),
        StakingError::InvalidAmount.into()
    );
}

#[test]
fn deposit_settles_pending_reward() {
    let mut pool = funded_pool();
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();

    let settlement = deposit(&mut pool, &mut alice, 1_000 * ONE, T0 + 100).unwrap();
    assert_eq!(
        settlement,
        Settlement {
            reward_paid: 100 * ONE,
            principal: 1_000 * ONE,
        }
    );
    assert_eq!(alice.principal, 2_000 * ONE);
    assert_eq!(alice.total_rewards_claimed, 100 * ONE);
    assert_eq!(pool.reward_reserve, 99_900 * ONE);
    assert_eq!(pool.pending_reward(&alice).unwrap(), 0);
}

#[test]
fn withdraw_settles_then_reduces_principal() {
    let mut pool = funded_pool();
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();

    let before = pool.pending_reward_at(&alice, T0 + 100).unwrap();
    let settlement = withdraw(&mut pool, &mut alice, 500 * ONE, T0 + 100).unwrap();
    let after = pool.pending_reward_at(&alice, T0 + 100).unwrap();

    assert_eq!(settlement.reward_paid, before);
    assert_eq!(settlement.principal, 500 * ONE);
    assert!(after < before);
    assert_eq!(alice.principal, 500 * ONE);
    assert_eq!(pool.total_staked, 500 * ONE);
}

#[test]
fn withdraw_more_than_principal_fails() {
    let mut pool = funded_pool();
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();

    assert_eq!(
        withdraw(&mut pool, &mut alice, 1_000 * ONE + 1, T0).unwrap_err(),
        StakingError::InsufficientBalance.into()
    );
    assert_eq!(
        withdraw(&mut pool, &mut alice, 0, T0).unwrap_err(),
        StakingError::InvalidAmount.into()
    );
}

#[test]
fn full_withdraw_then_redeposit_reuses_position() {
    let mut pool = funded_pool();
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();
    withdraw(&mut pool, &mut alice, 1_000 * ONE, T0 + 10).unwrap();

    assert_eq!(alice.user_info(), (0, 0));
    assert_eq!(pool.total_staked, 0);
    assert_eq!(pool.staker_count, 0);

    deposit(&mut pool, &mut alice, 300 * ONE, T0 + 20).unwrap();
    assert_eq!(alice.principal, 300 * ONE);
    assert_eq!(alice.total_rewards_claimed, 10 * ONE);
    assert_eq!(pool.staker_count, 1);
}

#[test]
fn claim_resets_pending() {
    let mut pool = funded_pool();
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();

    let paid = claim(&mut pool, &mut alice, T0 + 50).unwrap();
    assert_eq!(paid, 50 * ONE);
    assert_eq!(pool.pending_reward_at(&alice, T0 + 50).unwrap(), 0);
    assert_eq!(pool.total_rewards_paid, 50 * ONE);
    assert_eq!(pool.reward_reserve, 99_950 * ONE);
}

#[test]
fn claim_without_stake_fails_and_leaves_pool_untouched() {
    let mut pool = funded_pool();
    let mut alice = position();
    let snapshot = pool.clone();

    assert_eq!(
        claim(&mut pool, &mut alice, T0 + 100).unwrap_err(),
        StakingError::NothingToClaim.into()
    );
    assert_eq!(pool, snapshot);
}

#[test]
fn claim_is_available_while_paused() {
    let mut pool = funded_pool();
    let owner = pool.authority;
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();
    pause(&mut pool, &owner).unwrap();

    assert_eq!(claim(&mut pool, &mut alice, T0 + 10).unwrap(), 10 * ONE);
}

#[test]
fn deposit_and_withdraw_blocked_while_paused() {
    let mut pool = funded_pool();
    let owner = pool.authority;
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();
    pause(&mut pool, &owner).unwrap();

    assert_eq!(
        deposit(&mut pool, &mut alice, ONE, T0 + 1).unwrap_err(),
        StakingError::Paused.into()
    );
    assert_eq!(
        withdraw(&mut pool, &mut alice, ONE, T0 + 1).unwrap_err(),
        StakingError::Paused.into()
    );

    unpause(&mut pool, &owner).unwrap();
    assert!(withdraw(&mut pool, &mut alice, ONE, T0 + 2).is_ok());
}

#[test]
fn emergency_withdraw_forfeits_rewards_even_when_paused() {
    let mut pool = funded_pool();
    let owner = pool.authority;
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();
    assert!(pool.pending_reward_at(&alice, T0 + 100).unwrap() > 0);
    pause(&mut pool, &owner).unwrap();

    let reserve = pool.reward_reserve;
    let returned = emergency_withdraw(&mut pool, &mut alice, T0 + 100).unwrap();

    assert_eq!(returned, 1_000 * ONE);
    assert_eq!(alice.user_info(), (0, 0));
    assert_eq!(alice.total_rewards_claimed, 0);
    assert_eq!(pool.total_staked, 0);
    assert_eq!(pool.reward_reserve, reserve);
    // No accrual step runs.
    assert_eq!(pool.last_update_time, T0);
    assert_eq!(pool.pending_reward_at(&alice, T0 + 200).unwrap(), 0);
}

#[test]
fn emergency_withdraw_without_principal_fails() {
    let mut pool = funded_pool();
    let mut alice = position();
    assert_eq!(
        emergency_withdraw(&mut pool, &mut alice, T0).unwrap_err(),
        StakingError::InsufficientBalance.into()
    );
}

#[test]
fn failed_payout_leaves_state_unchanged() {
    let mut pool = StakePool {
        authority: Pubkey::new_unique(),
        reward_rate_per_second: ONE,
        last_update_time: T0,
        ..StakePool::default()
    };
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();

    let pool_before = pool.clone();
    let alice_before = alice.clone();
    assert_eq!(
        withdraw(&mut pool, &mut alice, 10 * ONE, T0 + 10).unwrap_err(),
        StakingError::InsufficientRewardReserve.into()
    );
    assert_eq!(
        claim(&mut pool, &mut alice, T0 + 10).unwrap_err(),
        StakingError::InsufficientRewardReserve.into()
    );
    assert_eq!(pool, pool_before);
    assert_eq!(alice, alice_before);

    // The circuit breaker still returns principal.
    assert_eq!(
        emergency_withdraw(&mut pool, &mut alice, T0 + 10).unwrap(),
        1_000 * ONE
    );
}

#[test]
fn regressing_clock_is_rejected() {
    let mut pool = funded_pool();
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0 + 10).unwrap();

    let pool_before = pool.clone();
    assert_eq!(
        deposit(&mut pool, &mut alice, ONE, T0 + 5).unwrap_err(),
        StakingError::ClockRegression.into()
    );
    assert_eq!(pool, pool_before);
}

// ── Admin ──────────────────────────────────────────────────────────────────

#[test]
fn rate_change_applies_old_rate_to_elapsed_time() {
    let mut pool = funded_pool();
    let owner = pool.authority;
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();

    let old = set_reward_rate(&mut pool, &owner, 2 * ONE, T0 + 50).unwrap();
    assert_eq!(old, ONE);
    assert_eq!(pool.reward_rate(), 2 * ONE);
    assert_eq!(pool.pending_reward_at(&alice, T0 + 100).unwrap(), 150 * ONE);
}

#[test]
fn zero_rate_stops_growth() {
    let mut pool = funded_pool();
    let owner = pool.authority;
    let mut alice = position();
    deposit(&mut pool, &mut alice, 1_000 * ONE, T0).unwrap();
    set_reward_rate(&mut pool, &owner, 0, T0 + 10).unwrap();

    let at_change = pool.pending_reward_at(&alice, T0 + 10).unwrap();
    assert_eq!(at_change, 10 * ONE);
    assert_eq!(pool.pending_reward_at(&alice, T0 + 10_000).unwrap(), at_change);
}

#[test]
fn admin_operations_require_owner() {
    let mut pool = funded_pool();
    let stranger = Pubkey::new_unique();
    let unauthorized: anchor_lang::error::Error = StakingError::Unauthorized.into();

    assert_eq!(set_reward_rate(&mut pool, &stranger, 5, T0).unwrap_err(), unauthorized);
    assert_eq!(fund_rewards(&mut pool, &stranger, 5).unwrap_err(), unauthorized);
    assert_eq!(
        withdraw_unused_rewards(&mut pool, &stranger, 5).unwrap_err(),
        unauthorized
    );
    assert_eq!(pause(&mut pool, &stranger).unwrap_err(), unauthorized);
    assert_eq!(unpause(&mut pool, &stranger).unwrap_err(), unauthorized);
    assert_eq!(
        transfer_authority(&mut pool, &stranger, stranger).unwrap_err(),
        unauthorized
    );
}

#[test]
fn reserve_funding_and_withdrawal() {
    let mut pool = funded_pool();
    let owner = pool.authority;

    assert_eq!(
        fund_rewards(&mut pool, &owner, 0).unwrap_err(),
        StakingError::InvalidAmount.into()
    );
    fund_rewards(&mut pool, &owner, 50_000 * ONE).unwrap();
    assert_eq!(pool.reward_reserve, 150_000 * ONE);

    withdraw_unused_rewards(&mut pool, &owner, 10_000 * ONE).unwrap();
    assert_eq!(pool.reward_reserve, 140_000 * ONE);

    assert_eq!(
        withdraw_unused_rewards(&mut pool, &owner, 140_000 * ONE + 1).unwrap_err(),
        StakingError::InsufficientRewardReserve.into()
    );
    assert_eq!(
        withdraw_unused_rewards(&mut pool, &owner, 0).unwrap_err(),
        StakingError::InvalidAmount.into()
    );
}

#[test]
fn pause_and_unpause_toggle() {
    let mut pool = funded_pool();
    let owner = pool.authority;

    assert_eq!(
        unpause(&mut pool, &owner).unwrap_err(),
        StakingError::NotPaused.into()
    );
    pause(&mut pool, &owner).unwrap();
    assert!(pool.paused);
    assert_eq!(
        pause(&mut pool, &owner).unwrap_err(),
        StakingError::Paused.into()
    );
    unpause(&mut pool, &owner).unwrap();
    assert!(!pool.paused);
}

#[test]
fn authority_transfer_moves_admin_rights() {
    let mut pool = funded_pool();
    let owner = pool.authority;
    let successor = Pubkey::new_unique();

    assert_eq!(
        transfer_authority(&mut pool, &owner, Pubkey::default()).unwrap_err(),
        StakingError::InvalidAuthority.into()
    );
    assert_eq!(transfer_authority(&mut pool, &owner, successor).unwrap(), owner);
    assert_eq!(
        pause(&mut pool, &owner).unwrap_err(),
        StakingError::Unauthorized.into()
    );
    pause(&mut pool, &successor).unwrap();
}

// ── Invariants over a mixed sequence ───────────────────────────────────────

#[test]
fn mixed_sequence_preserves_invariants() {
    let mut pool = funded_pool();
    let owner = pool.authority;
    let mut users = vec![position(), position(), position()];
    let mut last_acc = pool.acc_reward_per_share();

    let mut check = |pool: &StakePool, users: &[UserStake]| {
        assert_ledger_consistent(pool, users);
        assert!(pool.acc_reward_per_share() >= last_acc);
        last_acc = pool.acc_reward_per_share();
        for user in users {
            assert!(pool.pending_reward(user).is_ok());
        }
    };

    deposit(&mut pool, &mut users[0], 1_000 * ONE, T0).unwrap();
    check(&pool, users.as_slice());
    deposit(&mut pool, &mut users[1], 250 * ONE, T0 + 7).unwrap();
    check(&pool, users.as_slice());
    deposit(&mut pool, &mut users[2], 3_333 * ONE, T0 + 19).unwrap();
    check(&pool, users.as_slice());
    withdraw(&mut pool, &mut users[0], 400 * ONE, T0 + 23).unwrap();
    check(&pool, users.as_slice());
    set_reward_rate(&mut pool, &owner, 3 * ONE, T0 + 40).unwrap();
    check(&pool, users.as_slice());
    claim(&mut pool, &mut users[1], T0 + 41).unwrap();
    check(&pool, users.as_slice());
    emergency_withdraw(&mut pool, &mut users[2], T0 + 60).unwrap();
    check(&pool, users.as_slice());
    update_pool(&mut pool, T0 + 61).unwrap();
    check(&pool, users.as_slice());
    deposit(&mut pool, &mut users[2], 10 * ONE, T0 + 75).unwrap();
    check(&pool, users.as_slice());
    withdraw(&mut pool, &mut users[0], 600 * ONE, T0 + 90).unwrap();
    check(&pool, users.as_slice());

    let paid: u64 = users.iter().map(|u| u.total_rewards_claimed).sum();
    assert_eq!(pool.total_rewards_paid, paid);
    assert_eq!(pool.reward_reserve, 100_000 * ONE - paid);
}
