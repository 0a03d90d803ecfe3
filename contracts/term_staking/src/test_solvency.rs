extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use crate::{rewards, ContractError, TermStakingContract, TermStakingContractClient};

const DAY: u64 = 86_400;

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup(
    apy_bps: u32,
) -> (
    Env,
    TermStakingContractClient<'static>,
    Address, // owner
    Address, // token
) {
    let env = Env::default();
    env.mock_all_auths();

    let token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token_id = token.address();

    let contract_id = env.register(TermStakingContract, ());
    let client = TermStakingContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &token_id, &apy_bps);

    (env, client, owner, token_id)
}

fn mint(env: &Env, token: &Address, recipient: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(recipient, &amount);
}

fn custody_balance(env: &Env, token: &Address, client: &TermStakingContractClient) -> i128 {
    TokenClient::new(env, token).balance(&client.address)
}

// ── Free amount ───────────────────────────────────────────────────────────────

#[test]
fn test_free_amount_starts_at_zero() {
    let (_env, client, _owner, _token) = setup(150);
    assert_eq!(client.free_amount(), 0);
}

#[test]
fn test_free_amount_sees_external_deposits() {
    let (env, client, _owner, token) = setup(150);

    // A plain token transfer into the contract is immediately withdrawable:
    // no stake owns it.
    mint(&env, &token, &client.address, 500);
    assert_eq!(client.free_amount(), 500);
}

#[test]
fn test_stake_reserves_principal_and_payout() {
    let (env, client, _owner, token) = setup(2_000);

    mint(&env, &token, &client.address, 1_000_000);

    let staker = Address::generate(&env);
    let amount = 10_000_000i128;
    mint(&env, &token, &staker, amount);

    env.ledger().set_timestamp(0);
    client.stake(&staker, &amount, &3);

    let payout = rewards::payout(amount, 2_000, 60 * DAY).unwrap();
    assert!(payout > 0);

    // Custody grew by the principal, but the whole obligation is reserved:
    // only the pre-funded surplus minus the future payout is free.
    assert_eq!(client.get_total_obligations(), amount + payout);
    assert_eq!(client.free_amount(), 1_000_000 - payout);
}

#[test]
fn test_free_amount_never_exceeds_custody() {
    let (env, client, _owner, token) = setup(2_000);

    mint(&env, &token, &client.address, 1_000_000);

    let staker = Address::generate(&env);
    mint(&env, &token, &staker, 5_000_000);

    env.ledger().set_timestamp(0);
    client.stake(&staker, &5_000_000, &1);

    let free = client.free_amount();
    assert!(free >= 0);
    assert!(free <= custody_balance(&env, &token, &client));
}

#[test]
fn test_unstake_releases_obligation() {
    let (env, client, _owner, token) = setup(2_000);

    mint(&env, &token, &client.address, 1_000_000);

    let staker = Address::generate(&env);
    let amount = 10_000_000i128;
    mint(&env, &token, &staker, amount);

    env.ledger().set_timestamp(0);
    client.stake(&staker, &amount, &0);

    env.ledger().set_timestamp(7 * DAY);
    client.unstake(&staker);

    let payout = rewards::payout(amount, 2_000, 7 * DAY).unwrap();
    assert_eq!(client.get_total_obligations(), 0);
    // All that remains in custody is the surplus left after paying the yield.
    assert_eq!(client.free_amount(), 1_000_000 - payout);
}

// ── Owner withdrawal ──────────────────────────────────────────────────────────

#[test]
fn test_withdraw_by_non_owner_fails() {
    let (env, client, _owner, token) = setup(150);

    mint(&env, &token, &client.address, 500);

    let intruder = Address::generate(&env);
    let result = client.try_withdraw(&intruder, &100);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(custody_balance(&env, &token, &client), 500);
}

#[test]
fn test_withdraw_zero_fails() {
    let (_env, client, owner, _token) = setup(150);

    let result = client.try_withdraw(&owner, &0);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

#[test]
fn test_withdraw_more_than_free_fails() {
    let (env, client, owner, token) = setup(150);

    mint(&env, &token, &client.address, 500);

    let result = client.try_withdraw(&owner, &501);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InsufficientFree),
        _ => unreachable!("Expected InsufficientFree error"),
    }
    // Custody is untouched by the failed attempt.
    assert_eq!(custody_balance(&env, &token, &client), 500);
}

#[test]
fn test_withdraw_cannot_touch_staked_principal() {
    let (env, client, owner, token) = setup(0);

    let staker = Address::generate(&env);
    mint(&env, &token, &staker, 1_000);

    env.ledger().set_timestamp(0);
    client.stake(&staker, &1_000, &0);

    // Custody holds exactly the principal; nothing is free.
    assert_eq!(custody_balance(&env, &token, &client), 1_000);
    assert_eq!(client.free_amount(), 0);

    let result = client.try_withdraw(&owner, &1);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InsufficientFree),
        _ => unreachable!("Expected InsufficientFree error"),
    }
}

#[test]
fn test_withdraw_free_surplus() {
    let (env, client, owner, token) = setup(150);

    mint(&env, &token, &client.address, 500);

    client.withdraw(&owner, &200);
    assert_eq!(TokenClient::new(&env, &token).balance(&owner), 200);
    assert_eq!(client.free_amount(), 300);
}

/// Full cycle: the contract is funded for yield, a stake runs its term and
/// settles, and the owner then drains exactly `free_amount`, leaving custody
/// empty.
#[test]
fn test_withdraw_everything_after_settlement() {
    let (env, client, owner, token) = setup(150);

    let staker = Address::generate(&env);
    let amount = 10_000_000i128;
    mint(&env, &token, &staker, amount);

    // Fund custody to cover the yield in full, plus a surplus to drain.
    let payout = rewards::payout(amount, 150, 7 * DAY).unwrap();
    mint(&env, &token, &client.address, payout + 500);

    env.ledger().set_timestamp(0);
    client.stake(&staker, &amount, &0);

    env.ledger().set_timestamp(8 * DAY);
    assert_eq!(client.unstake(&staker), amount + payout);

    let free = client.free_amount();
    assert_eq!(free, 500);
    assert_eq!(free, custody_balance(&env, &token, &client));

    client.withdraw(&owner, &free);
    assert_eq!(client.free_amount(), 0);
    assert_eq!(custody_balance(&env, &token, &client), 0);
}
