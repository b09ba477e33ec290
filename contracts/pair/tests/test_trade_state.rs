mod common;

use boostswap_pair::{PairError, TradeState};
use common::{add_liquidity, fund_input, swap_exact_in, E18};
use soroban_sdk::{testutils::Address as _, Address, Bytes, Env};

fn seeded(env: &Env) -> (common::TestPair<'_>, Address) {
    let t = common::setup_pair(env);
    let lp = Address::generate(env);
    add_liquidity(env, &t, &lp, 100 * E18, 100 * E18);
    (t, Address::generate(env))
}

#[test]
fn test_default_sell_all() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, trader) = seeded(&env);

    assert_eq!(t.pair.get_trade_state(), TradeState::SellAll);
    swap_exact_in(&env, &t, &trader, true, E18, 1000);
    swap_exact_in(&env, &t, &trader, false, E18, 1000);
}

#[test]
fn test_sell_token0_only() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, trader) = seeded(&env);
    t.pair.set_trade_state(&TradeState::SellToken0Only);

    swap_exact_in(&env, &t, &trader, true, E18, 1000);

    fund_input(&env, &t, false, E18);
    assert_eq!(
        t.pair.try_swap(&trader, &1000, &0, &trader, &Bytes::new(&env)),
        Err(Ok(PairError::TradeForbidden))
    );
}

#[test]
fn test_sell_token1_only() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, trader) = seeded(&env);
    t.pair.set_trade_state(&TradeState::SellToken1Only);

    swap_exact_in(&env, &t, &trader, false, E18, 1000);

    fund_input(&env, &t, true, E18);
    assert_eq!(
        t.pair.try_swap(&trader, &0, &1000, &trader, &Bytes::new(&env)),
        Err(Ok(PairError::TradeForbidden))
    );
}

#[test]
fn test_sell_none_blocks_swaps_not_liquidity() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, trader) = seeded(&env);
    t.pair.set_trade_state(&TradeState::SellNone);

    fund_input(&env, &t, true, E18);
    assert_eq!(
        t.pair.try_swap(&trader, &0, &1000, &trader, &Bytes::new(&env)),
        Err(Ok(PairError::TradeForbidden))
    );

    let lp = Address::generate(&env);
    let liquidity = add_liquidity(&env, &t, &lp, E18, E18);
    assert!(liquidity > 0);
}

#[test]
fn test_restore_sell_all() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, trader) = seeded(&env);
    t.pair.set_trade_state(&TradeState::SellNone);
    t.pair.set_trade_state(&TradeState::SellAll);

    swap_exact_in(&env, &t, &trader, false, E18, 1000);
}

#[test]
#[should_panic]
fn test_set_trade_state_requires_governance_auth() {
    let env = Env::default();
    env.mock_all_auths();
    let (t, _) = seeded(&env);

    env.set_auths(&[]);
    t.pair.set_trade_state(&TradeState::SellNone);
}
