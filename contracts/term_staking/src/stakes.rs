//! Per-account stake records.
//!
//! Each account holds at most one active stake, stored in persistent storage
//! under a `(STK, address)` tuple key. The record is written once by `create`
//! and only ever removed by `clear`; there is no mutation path in between.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::ContractError;

const STAKE: Symbol = symbol_short!("STK");

/// A single account's active stake.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    /// Token units locked, > 0 for the life of the record.
    pub principal: i128,
    /// Index into the lock-duration table.
    pub tier_index: u32,
    /// APY in force when the stake was created, in basis points.
    /// Later global APY changes never touch this.
    pub apy_bps: u32,
    /// Ledger timestamp at creation.
    pub started_at: u64,
}

fn stake_key(staker: &Address) -> (Symbol, Address) {
    (STAKE, staker.clone())
}

/// Return the account's active stake, if any.
pub fn get(env: &Env, staker: &Address) -> Option<StakeRecord> {
    env.storage().persistent().get(&stake_key(staker))
}

/// Install a new record for the account.
pub fn create(env: &Env, staker: &Address, record: &StakeRecord) -> Result<(), ContractError> {
    let key = stake_key(staker);
    if env.storage().persistent().has(&key) {
        return Err(ContractError::AlreadyStaking);
    }
    env.storage().persistent().set(&key, record);
    Ok(())
}

/// Remove the account's record, returning its prior value.
///
/// Callers compute the payout from the returned record; removal is kept as
/// the final storage write of an unstake.
pub fn clear(env: &Env, staker: &Address) -> Result<StakeRecord, ContractError> {
    let key = stake_key(staker);
    let record: StakeRecord = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NoActiveStake)?;
    env.storage().persistent().remove(&key);
    Ok(record)
}
