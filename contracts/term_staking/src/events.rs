#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub token: Address,
    pub apy_bps: u32,
    pub timestamp: u64,
}

/// Fired when a user opens a fixed-term stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub principal: i128,
    pub tier_index: u32,
    pub apy_bps: u32,
    pub unlock_at: u64,
    pub timestamp: u64,
}

/// Fired when a stake is settled and paid out.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub principal: i128,
    pub payout: i128,
    pub timestamp: u64,
}

/// Fired when the owner changes the global APY.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApySetEvent {
    pub apy_bps: u32,
    pub timestamp: u64,
}

/// Fired when ownership moves to a new address.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

/// Fired when the owner withdraws uncommitted custody.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerWithdrawnEvent {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, token: Address, apy_bps: u32) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            token,
            apy_bps,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    staker: Address,
    principal: i128,
    tier_index: u32,
    apy_bps: u32,
    unlock_at: u64,
) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            principal,
            tier_index,
            apy_bps,
            unlock_at,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(env: &Env, staker: Address, principal: i128, payout: i128) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            staker,
            principal,
            payout,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_apy_set(env: &Env, apy_bps: u32) {
    env.events().publish(
        (symbol_short!("APY_SET"),),
        ApySetEvent {
            apy_bps,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_transferred(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_XFER"), new_owner.clone()),
        OwnershipTransferredEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_withdrawn(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("OWN_WDRW"), owner.clone()),
        OwnerWithdrawnEvent {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
