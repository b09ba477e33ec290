mod common;

use boostswap_pair::PairError;
use common::{add_liquidity, E18, START_TIME};
use soroban_sdk::{testutils::Address as _, Address, Env, TryFromVal};

fn funded(env: &Env) -> (common::TestPair<'_>, Address, i128) {
    let t = common::setup_pair(env);
    let holder = Address::generate(env);
    let liquidity = add_liquidity(env, &t, &holder, E18, E18);
    (t, holder, liquidity)
}

// ============================================================
// TRANSFER
// ============================================================

#[test]
fn test_transfer_moves_claims() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, liquidity) = funded(&env);
    let other = Address::generate(&env);

    t.pair.transfer(&holder, &other, &1000);

    assert_eq!(t.pair.balance(&holder), liquidity - 1000);
    assert_eq!(t.pair.balance(&other), 1000);
    assert_eq!(t.pair.total_supply(), liquidity + 1000);

    let transfers = common::pair_events(&env, &t, "Transfer");
    assert_eq!(transfers.len(), 1);
    let data: (Option<Address>, Option<Address>, i128) =
        TryFromVal::try_from_val(&env, &transfers.get(0).unwrap()).unwrap();
    assert_eq!(data, (Some(holder), Some(other), 1000));
}

#[test]
fn test_transfer_exceeding_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, liquidity) = funded(&env);
    let other = Address::generate(&env);

    assert_eq!(
        t.pair.try_transfer(&holder, &other, &(liquidity + 1)),
        Err(Ok(PairError::InsufficientBalance))
    );
}

#[test]
fn test_transfer_negative_amount() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, _) = funded(&env);
    let other = Address::generate(&env);

    assert_eq!(
        t.pair.try_transfer(&holder, &other, &-1),
        Err(Ok(PairError::InvalidAmount))
    );
}

#[test]
fn test_transfer_zero_is_allowed() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, liquidity) = funded(&env);
    let other = Address::generate(&env);

    t.pair.transfer(&holder, &other, &0);
    assert_eq!(t.pair.balance(&holder), liquidity);
    assert_eq!(t.pair.balance(&other), 0);
}

#[test]
fn test_locked_claims_have_no_holder() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, liquidity) = funded(&env);

    assert_eq!(t.pair.locked_supply(), 1000);
    assert_eq!(t.pair.balance(&t.pair.address), 0);
    assert_eq!(t.pair.total_supply(), t.pair.balance(&holder) + 1000);
    assert_eq!(liquidity, (E18 - 1000) as i128);
}

// ============================================================
// ALLOWANCES
// ============================================================

#[test]
fn test_approve_and_transfer_from() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, liquidity) = funded(&env);
    let spender = Address::generate(&env);
    let other = Address::generate(&env);

    t.pair.approve(&holder, &spender, &5000);
    assert_eq!(t.pair.allowance(&holder, &spender), 5000);

    t.pair.transfer_from(&spender, &holder, &other, &2000);
    assert_eq!(t.pair.allowance(&holder, &spender), 3000);
    assert_eq!(t.pair.balance(&holder), liquidity - 2000);
    assert_eq!(t.pair.balance(&other), 2000);
}

#[test]
fn test_approve_emits_approval() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, _) = funded(&env);
    let spender = Address::generate(&env);

    t.pair.approve(&holder, &spender, &42);
    let approvals = common::pair_events(&env, &t, "Approval");
    assert_eq!(approvals.len(), 1);
    let data: (Address, Address, i128) =
        TryFromVal::try_from_val(&env, &approvals.get(0).unwrap()).unwrap();
    assert_eq!(data, (holder, spender, 42));
}

#[test]
fn test_transfer_from_exceeding_allowance() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, _) = funded(&env);
    let spender = Address::generate(&env);

    t.pair.approve(&holder, &spender, &100);
    assert_eq!(
        t.pair.try_transfer_from(&spender, &holder, &spender, &101),
        Err(Ok(PairError::InsufficientAllowance))
    );
}

#[test]
fn test_unlimited_allowance_is_not_spent() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, _) = funded(&env);
    let spender = Address::generate(&env);

    t.pair.approve(&holder, &spender, &i128::MAX);
    t.pair.transfer_from(&spender, &holder, &spender, &12345);
    assert_eq!(t.pair.allowance(&holder, &spender), i128::MAX);
    assert_eq!(t.pair.balance(&spender), 12345);
}

#[test]
fn test_transfer_from_exceeding_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, liquidity) = funded(&env);
    let spender = Address::generate(&env);

    t.pair.approve(&holder, &spender, &i128::MAX);
    assert_eq!(
        t.pair.try_transfer_from(&spender, &holder, &spender, &(liquidity + 1)),
        Err(Ok(PairError::InsufficientBalance))
    );
}

// ============================================================
// PERMIT
// ============================================================

#[test]
fn test_permit_sets_allowance_and_consumes_nonce() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, _) = funded(&env);
    let spender = Address::generate(&env);

    assert_eq!(t.pair.nonce(&holder), 0);
    t.pair.permit(&holder, &spender, &777, &(START_TIME + 100));
    assert_eq!(t.pair.allowance(&holder, &spender), 777);
    assert_eq!(t.pair.nonce(&holder), 1);

    t.pair.permit(&holder, &spender, &0, &START_TIME);
    assert_eq!(t.pair.allowance(&holder, &spender), 0);
    assert_eq!(t.pair.nonce(&holder), 2);
}

#[test]
fn test_permit_expired() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, _) = funded(&env);
    let spender = Address::generate(&env);

    assert_eq!(
        t.pair.try_permit(&holder, &spender, &777, &(START_TIME - 1)),
        Err(Ok(PairError::PermitExpired))
    );
    assert_eq!(t.pair.nonce(&holder), 0);
}

#[test]
#[should_panic]
fn test_permit_requires_owner_auth() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, holder, _) = funded(&env);
    let spender = Address::generate(&env);

    env.set_auths(&[]);
    t.pair.permit(&holder, &spender, &777, &(START_TIME + 100));
}
