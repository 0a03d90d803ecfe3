//! Obligation accounting.
//!
//! Because a stake's payout is fixed at creation, the total owed to all
//! active stakers is an exact running sum: `stake` adds `principal + payout`,
//! `unstake` releases the same amount. The free (owner-withdrawable) balance
//! is whatever the live custody balance holds beyond that sum. The custody
//! balance is read from the token on every call, never cached, so external
//! deposits into the contract count immediately.

use soroban_sdk::{symbol_short, token, Address, Env, Symbol};

const TOTAL_OWED: Symbol = symbol_short!("TOT_OWED");

/// Sum of `principal + payout` over all active stakes.
pub fn total_obligations(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_OWED).unwrap_or(0)
}

/// Register a new stake's full obligation.
pub fn add_obligation(env: &Env, amount: i128) {
    let total = total_obligations(env).saturating_add(amount);
    env.storage().instance().set(&TOTAL_OWED, &total);
}

/// Release a settled stake's obligation.
pub fn release_obligation(env: &Env, amount: i128) {
    let total = total_obligations(env).saturating_sub(amount);
    env.storage().instance().set(&TOTAL_OWED, &total);
}

/// Custody balance not committed to any stake.
pub fn free_amount(env: &Env, token_addr: &Address) -> i128 {
    let custody =
        token::Client::new(env, token_addr).balance(&env.current_contract_address());
    custody.saturating_sub(total_obligations(env)).max(0)
}
