#![no_std]

pub mod events;
pub mod rewards;
pub mod solvency;
pub mod stakes;
pub mod tiers;

use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol};

use stakes::StakeRecord;

// ── Storage key constants ────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const INITIALIZED: Symbol = symbol_short!("INIT");
const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");
const APY: Symbol = symbol_short!("APY");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    InvalidTier = 5,
    AlreadyStaking = 6,
    NoActiveStake = 7,
    PeriodNotFinished = 8,
    InsufficientFree = 9,
    Overflow = 10,
}

// ── Public-facing types (re-exported for test consumers) ─────────────────────

/// Read-only projection of a caller's active stake returned by `get_stake_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeInfo {
    pub principal: i128,
    pub tier_index: u32,
    pub apy_bps: u32,
    pub started_at: u64,
    pub unlock_at: u64,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct TermStakingContract;

#[contractimpl]
impl TermStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner`   – administrator; may set the APY and withdraw free custody.
    /// * `token`   – SAC address of the staked token.
    /// * `apy_bps` – initial APY in basis points (150 = 1.50 %).
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        apy_bps: u32,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&OWNER, &owner);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&STAKE_TOKEN, &token);
        env.storage().instance().set(&APY, &apy_bps);
        // TOTAL_OWED starts at zero; unwrap_or(0) handles the absent key,
        // so no explicit init needed.

        events::publish_initialized(&env, owner, token, apy_bps);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` tokens for the duration selected by `tier_index`.
    ///
    /// The current APY and timestamp are snapshotted into the record, so the
    /// payout is decided here and never changes afterwards. One active stake
    /// per account: a second call before `unstake` fails with `AlreadyStaking`.
    pub fn stake(
        env: Env,
        staker: Address,
        amount: i128,
        tier_index: u32,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        let duration = tiers::duration_of(tier_index)?;

        let apy_bps: u32 = env.storage().instance().get(&APY).unwrap_or(0);
        let payout =
            rewards::payout(amount, apy_bps, duration).ok_or(ContractError::Overflow)?;

        let now = env.ledger().timestamp();
        let record = StakeRecord {
            principal: amount,
            tier_index,
            apy_bps,
            started_at: now,
        };
        stakes::create(&env, &staker, &record)?;

        // Obligation is exact from here on: principal plus the fixed payout.
        solvency::add_obligation(&env, amount.saturating_add(payout));

        // Pull the principal into custody.
        let stake_token = Self::stake_token(&env)?;
        token::Client::new(&env, &stake_token).transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );

        events::publish_staked(
            &env,
            staker,
            amount,
            tier_index,
            apy_bps,
            now.saturating_add(duration),
        );

        Ok(())
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Settle the caller's stake after its lock period, returning
    /// `principal + payout`.
    ///
    /// Fails with `PeriodNotFinished` while the lock is still running. The
    /// payout uses the record's own APY snapshot; unstaking late pays exactly
    /// the same as unstaking at expiry. Record removal is the last storage
    /// write, after the token transfer has gone through.
    pub fn unstake(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let record = stakes::get(&env, &staker).ok_or(ContractError::NoActiveStake)?;
        let duration = tiers::duration_of(record.tier_index)?;

        let now = env.ledger().timestamp();
        if now < record.started_at.saturating_add(duration) {
            return Err(ContractError::PeriodNotFinished);
        }

        let payout = rewards::payout(record.principal, record.apy_bps, duration)
            .ok_or(ContractError::Overflow)?;
        let total = record.principal.saturating_add(payout);

        // Return principal plus yield to the staker. A failed transfer traps
        // and rolls back the whole invocation, leaving the record in place.
        let stake_token = Self::stake_token(&env)?;
        token::Client::new(&env, &stake_token).transfer(
            &env.current_contract_address(),
            &staker,
            &total,
        );

        solvency::release_obligation(&env, total);
        stakes::clear(&env, &staker)?;

        events::publish_unstaked(&env, staker, record.principal, payout);

        Ok(total)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the caller's active stake, or `None` without failing.
    pub fn get_stake_info(env: Env, staker: Address) -> Option<StakeInfo> {
        let record = stakes::get(&env, &staker)?;
        let duration = tiers::duration_of(record.tier_index).ok()?;
        Some(StakeInfo {
            principal: record.principal,
            tier_index: record.tier_index,
            apy_bps: record.apy_bps,
            started_at: record.started_at,
            unlock_at: record.started_at.saturating_add(duration),
        })
    }

    /// Return the APY that new stakes would snapshot, in basis points.
    pub fn get_apy(env: Env) -> u32 {
        env.storage().instance().get(&APY).unwrap_or(0)
    }

    /// Return the lock duration in seconds for a tier index.
    pub fn get_tier_duration(_env: Env, tier_index: u32) -> Result<u64, ContractError> {
        tiers::duration_of(tier_index)
    }

    /// Return the sum of `principal + payout` owed to all active stakes.
    pub fn get_total_obligations(env: Env) -> i128 {
        solvency::total_obligations(&env)
    }

    /// Return the custody balance not owed to any staker.
    ///
    /// Recomputed from the live token balance on every call; external
    /// deposits into the contract raise it immediately.
    pub fn free_amount(env: Env) -> Result<i128, ContractError> {
        let stake_token = Self::stake_token(&env)?;
        Ok(solvency::free_amount(&env, &stake_token))
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Owner functions ──────────────────────────────────────────────────────

    /// Update the APY snapshotted by *future* stakes.
    ///
    /// Existing records keep the snapshot they were created with, so this
    /// never changes an outstanding obligation.
    pub fn set_apy(env: Env, caller: Address, apy_bps: u32) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        env.storage().instance().set(&APY, &apy_bps);

        events::publish_apy_set(&env, apy_bps);

        Ok(())
    }

    /// Withdraw `amount` of uncommitted custody to the owner.
    ///
    /// Bounded by `free_amount`: principal and fixed payouts owed to active
    /// stakes can never be withdrawn.
    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let stake_token = Self::stake_token(&env)?;
        if amount > solvency::free_amount(&env, &stake_token) {
            return Err(ContractError::InsufficientFree);
        }

        token::Client::new(&env, &stake_token).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        events::publish_owner_withdrawn(&env, caller, amount);

        Ok(())
    }

    /// Hand the owner role to `new_owner`. Active stakes are unaffected.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        env.storage().instance().set(&OWNER, &new_owner);

        events::publish_ownership_transferred(&env, caller, new_owner);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != owner {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn stake_token(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&STAKE_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_solvency;
