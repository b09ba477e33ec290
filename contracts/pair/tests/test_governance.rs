mod common;

use boostswap_pair::{PairError, Role};
use common::{add_liquidity, E18};
use soroban_sdk::{testutils::Address as _, Address, Env, TryFromVal};

// ============================================================
// TRADE FEE
// ============================================================

#[test]
fn test_set_trade_fee() {
    let env = Env::default();
    env.mock_all_auths();

    let t = common::setup_pair(&env);
    t.pair.set_trade_fee(&100);
    assert_eq!(t.pair.get_config().trade_fee_bps, 100);

    let updates = common::pair_events(&env, &t, "FeeUpdated");
    let data: (u32, u32) = TryFromVal::try_from_val(&env, &updates.get(0).unwrap()).unwrap();
    assert_eq!(data, (30, 100));
}

#[test]
fn test_set_trade_fee_out_of_range() {
    let env = Env::default();
    env.mock_all_auths();

    let t = common::setup_pair(&env);
    assert_eq!(t.pair.try_set_trade_fee(&0), Err(Ok(PairError::InvalidTradeFee)));
    assert_eq!(t.pair.try_set_trade_fee(&101), Err(Ok(PairError::InvalidTradeFee)));
    assert_eq!(t.pair.get_config().trade_fee_bps, 30);
}

#[test]
fn test_trade_fee_changes_quote() {
    let env = Env::default();
    env.mock_all_auths();

    let t = common::setup_pair(&env);
    let lp = Address::generate(&env);
    add_liquidity(&env, &t, &lp, 100 * E18, 100 * E18);

    let before = t.pair.quote_amount_out(&t.token0, &E18);
    t.pair.set_trade_fee(&100);
    let after = t.pair.quote_amount_out(&t.token0, &E18);
    assert!(after < before);
}

#[test]
#[should_panic]
fn test_set_trade_fee_requires_governance_auth() {
    let env = Env::default();
    env.mock_all_auths();
    let t = common::setup_pair(&env);

    env.set_auths(&[]);
    t.pair.set_trade_fee(&50);
}

// ============================================================
// PROTOCOL FEE SWITCH
// ============================================================

#[test]
fn test_toggle_protocol_fee() {
    let env = Env::default();
    env.mock_all_auths();

    let t = common::setup_pair(&env);
    assert!(!t.pair.get_config().protocol_fee_on);

    t.pair.set_protocol_fee(&true);
    assert!(t.pair.get_config().protocol_fee_on);
    let events = common::pair_events(&env, &t, "ProtocolFee");
    let data: (bool,) = TryFromVal::try_from_val(&env, &events.get(0).unwrap()).unwrap();
    assert_eq!(data, (true,));

    t.pair.set_protocol_fee(&false);
    assert!(!t.pair.get_config().protocol_fee_on);
}

// ============================================================
// ROLE HANDOVER
// ============================================================

#[test]
fn test_governance_handover() {
    let env = Env::default();
    env.mock_all_auths();

    let t = common::setup_pair(&env);
    let successor = Address::generate(&env);

    t.pair.propose_governance(&successor);
    assert_eq!(t.pair.get_pending_role(&Role::Governance), Some(successor.clone()));
    assert_eq!(t.pair.get_governance(), t.governance);

    t.pair.accept_governance(&successor);
    assert_eq!(t.pair.get_governance(), successor);
    assert_eq!(t.pair.get_pending_role(&Role::Governance), None);

    let accepted = common::pair_events(&env, &t, "RoleAccepted");
    let data: (Role, Address) =
        TryFromVal::try_from_val(&env, &accepted.get(0).unwrap()).unwrap();
    assert_eq!(data, (Role::Governance, successor));
}

#[test]
fn test_new_governance_can_act() {
    let env = Env::default();
    env.mock_all_auths();

    let t = common::setup_pair(&env);
    let successor = Address::generate(&env);
    t.pair.propose_governance(&successor);
    t.pair.accept_governance(&successor);

    t.pair.set_trade_fee(&5);
    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, successor);
}

#[test]
fn test_accept_without_proposal() {
    let env = Env::default();
    env.mock_all_auths();

    let t = common::setup_pair(&env);
    let stranger = Address::generate(&env);
    assert_eq!(
        t.pair.try_accept_governance(&stranger),
        Err(Ok(PairError::NoPendingRole))
    );
}

#[test]
fn test_accept_by_wrong_address() {
    let env = Env::default();
    env.mock_all_auths();

    let t = common::setup_pair(&env);
    let successor = Address::generate(&env);
    let stranger = Address::generate(&env);
    t.pair.propose_governance(&successor);

    assert_eq!(
        t.pair.try_accept_governance(&stranger),
        Err(Ok(PairError::Unauthorized))
    );
    assert_eq!(t.pair.get_governance(), t.governance);
}

#[test]
fn test_fee_recipient_handover() {
    let env = Env::default();
    env.mock_all_auths();

    let t = common::setup_pair(&env);
    let successor = Address::generate(&env);

    t.pair.propose_fee_recipient(&successor);
    let auths = env.auths();
    assert_eq!(auths[0].0, t.fee_recipient);

    t.pair.accept_fee_recipient(&successor);
    assert_eq!(t.pair.get_fee_recipient(), successor);
    assert_eq!(t.pair.get_governance(), t.governance);
}

#[test]
fn test_proposal_can_be_replaced() {
    let env = Env::default();
    env.mock_all_auths();

    let t = common::setup_pair(&env);
    let first = Address::generate(&env);
    let second = Address::generate(&env);
    t.pair.propose_governance(&first);
    t.pair.propose_governance(&second);

    assert_eq!(
        t.pair.try_accept_governance(&first),
        Err(Ok(PairError::Unauthorized))
    );
    t.pair.accept_governance(&second);
    assert_eq!(t.pair.get_governance(), second);
}
