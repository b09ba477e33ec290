#![allow(dead_code)]

use boostswap_pair::{BoostPair, BoostPairClient, PairParams};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Bytes, Env, Symbol, TryFromVal, Val, Vec,
};

// Test constants
pub const E18: u128 = 1_000_000_000_000_000_000;
pub const DEFAULT_FEE_BPS: u32 = 30; // 0.30%
pub const TEST_WINDOW: u64 = 50; // seconds
pub const START_TIME: u64 = 1_000_000;

pub struct TestPair<'a> {
    pub pair: BoostPairClient<'a>,
    pub factory: Address,
    pub governance: Address,
    pub fee_recipient: Address,
    pub token0: Address,
    pub token1: Address,
}

/// Setup pair with the default fee and a 50-second transition window
pub fn setup_pair(env: &Env) -> TestPair<'_> {
    setup_custom_pair(
        env,
        PairParams {
            trade_fee_bps: DEFAULT_FEE_BPS,
            transition_window: TEST_WINDOW,
        },
    )
}

pub fn setup_custom_pair(env: &Env, params: PairParams) -> TestPair<'_> {
    set_time(env, START_TIME);

    let factory = Address::generate(env);
    let governance = Address::generate(env);
    let fee_recipient = Address::generate(env);
    let token_a = create_token(env, &governance);
    let token_b = create_token(env, &governance);

    let pair_id = env.register(BoostPair, ());
    let pair = BoostPairClient::new(env, &pair_id);
    pair.initialize(&factory, &token_a, &token_b, &governance, &fee_recipient, &params);

    let token0 = pair.token0();
    let token1 = pair.token1();
    TestPair {
        pair,
        factory,
        governance,
        fee_recipient,
        token0,
        token1,
    }
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: u128) {
    StellarAssetClient::new(env, token).mint(to, &(amount as i128));
}

pub fn token_balance(env: &Env, token: &Address, id: &Address) -> u128 {
    TokenClient::new(env, token).balance(id) as u128
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

pub fn advance_time(env: &Env, seconds: u64) {
    let now = env.ledger().timestamp();
    set_time(env, now + seconds);
}

// ============================================================
// ROUTER STAND-INS
// ============================================================

/// Send both assets to the pair and mint claims to `provider`
pub fn add_liquidity(
    env: &Env,
    t: &TestPair,
    provider: &Address,
    amount0: u128,
    amount1: u128,
) -> i128 {
    mint_tokens(env, &t.token0, &t.pair.address, amount0);
    mint_tokens(env, &t.token1, &t.pair.address, amount1);
    t.pair.mint(provider, provider)
}

/// Return `liquidity` claims to the pair and burn them for `provider`
pub fn remove_liquidity(t: &TestPair, provider: &Address, liquidity: i128) -> (u128, u128) {
    t.pair.transfer(provider, &t.pair.address, &liquidity);
    t.pair.burn(provider, provider)
}

/// Fund the pair with `amount_in` of one asset and request the outputs
pub fn fund_input(env: &Env, t: &TestPair, zero_for_one: bool, amount_in: u128) {
    let token_in = if zero_for_one { &t.token0 } else { &t.token1 };
    mint_tokens(env, token_in, &t.pair.address, amount_in);
}

pub fn swap_exact_in(
    env: &Env,
    t: &TestPair,
    trader: &Address,
    zero_for_one: bool,
    amount_in: u128,
    amount_out: u128,
) {
    fund_input(env, t, zero_for_one, amount_in);
    let (out0, out1) = if zero_for_one { (0, amount_out) } else { (amount_out, 0) };
    t.pair.swap(trader, &out0, &out1, trader, &Bytes::new(env));
}

// ============================================================
// EVENTS
// ============================================================

/// Data of every event the pair published under `name` in the last invocation
pub fn pair_events(env: &Env, t: &TestPair, name: &str) -> Vec<Val> {
    let wanted = Symbol::new(env, name);
    let mut found = Vec::new(env);
    for (contract, topics, data) in env.events().all().iter() {
        if contract != t.pair.address {
            continue;
        }
        let topic = topics
            .get(0)
            .and_then(|v| Symbol::try_from_val(env, &v).ok());
        if topic == Some(wanted.clone()) {
            found.push_back(data);
        }
    }
    found
}
