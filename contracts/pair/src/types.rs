// Pair Types

use soroban_sdk::{contracttype, Address, Env, U256};

pub use boostswap_boost::{Boost, BoostPhase, BoostSchedule};

// ============================================================
// PAIR CONFIGURATION
// ============================================================

/// Parameters supplied at initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct PairParams {
    /// Trading fee in basis points (e.g., 30 = 0.30%)
    pub trade_fee_bps: u32,
    /// Length of a boost transition in seconds
    pub transition_window: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PairConfig {
    pub factory: Address,
    /// Sorted: token0 < token1
    pub token0: Address,
    pub token1: Address,
    pub trade_fee_bps: u32,
    pub transition_window: u64,
    /// Whether the fee recipient accrues 1/6 of the invariant growth
    pub protocol_fee_on: bool,
}

// ============================================================
// PAIR STATE
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct PairState {
    pub reserve0: u128,
    pub reserve1: u128,
    /// Ledger timestamp of the last reserve update, modulo 2^32
    pub block_timestamp_last: u32,
    /// Sum of UQ112x112 reserve1/reserve0 prices weighted by seconds
    pub price0_cumulative_last: U256,
    /// Sum of UQ112x112 reserve0/reserve1 prices weighted by seconds
    pub price1_cumulative_last: U256,
    /// Invariant of the reserves after the last liquidity event, on the
    /// curve then in effect. 0 while the protocol fee is off.
    pub k_last: U256,
    /// Reserves the protocol fee snapshot was taken at
    pub reserve0_last: u128,
    pub reserve1_last: u128,
}

impl PairState {
    pub fn new(env: &Env) -> Self {
        Self {
            reserve0: 0,
            reserve1: 0,
            block_timestamp_last: 0,
            price0_cumulative_last: U256::from_u32(env, 0),
            price1_cumulative_last: U256::from_u32(env, 0),
            k_last: U256::from_u32(env, 0),
            reserve0_last: 0,
            reserve1_last: 0,
        }
    }
}

// ============================================================
// TRADE STATE
// ============================================================

/// Which direction of trade the pair currently accepts
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TradeState {
    SellAll = 0,
    SellToken0Only = 1,
    SellToken1Only = 2,
    SellNone = 3,
}

impl TradeState {
    /// Whether a swap with these inputs may proceed
    pub fn allows(&self, amount0_in: u128, amount1_in: u128) -> bool {
        match self {
            TradeState::SellAll => true,
            TradeState::SellToken0Only => amount1_in == 0,
            TradeState::SellToken1Only => amount0_in == 0,
            TradeState::SellNone => false,
        }
    }
}

// ============================================================
// ROLES
// ============================================================

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// Sets boost, trade state, trade fee and the protocol fee switch
    Governance,
    /// Receives protocol fee claims
    FeeRecipient,
}
