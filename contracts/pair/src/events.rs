// Pair events module for BoostSwap

use soroban_sdk::{Address, Env, Symbol};

use crate::types::{BoostSchedule, Role, TradeState};

// ============================================================
// RESERVES & LIQUIDITY
// ============================================================

/// Topics: ("Sync",)
/// Data: (reserve0, reserve1)
pub fn emit_sync(env: &Env, reserve0: u128, reserve1: u128) {
    env.events()
        .publish((Symbol::new(env, "Sync"),), (reserve0, reserve1));
}

/// Topics: ("Mint",)
/// Data: (sender, amount0, amount1)
pub fn emit_mint(env: &Env, sender: &Address, amount0: u128, amount1: u128) {
    env.events().publish(
        (Symbol::new(env, "Mint"),),
        (sender.clone(), amount0, amount1),
    );
}

/// Topics: ("Burn",)
/// Data: (sender, amount0, amount1, to)
pub fn emit_burn(env: &Env, sender: &Address, amount0: u128, amount1: u128, to: &Address) {
    env.events().publish(
        (Symbol::new(env, "Burn"),),
        (sender.clone(), amount0, amount1, to.clone()),
    );
}

/// Topics: ("Swap",)
/// Data: (sender, amount0_in, amount1_in, amount0_out, amount1_out, to)
pub fn emit_swap(
    env: &Env,
    sender: &Address,
    amount0_in: u128,
    amount1_in: u128,
    amount0_out: u128,
    amount1_out: u128,
    to: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (
            sender.clone(),
            amount0_in,
            amount1_in,
            amount0_out,
            amount1_out,
            to.clone(),
        ),
    );
}

// ============================================================
// CLAIM TOKEN
// ============================================================

/// `None` on the `from` side is a mint, on the `to` side a burn.
/// Topics: ("Transfer",)
/// Data: (from, to, value)
pub fn emit_transfer(env: &Env, from: Option<Address>, to: Option<Address>, value: i128) {
    env.events()
        .publish((Symbol::new(env, "Transfer"),), (from, to, value));
}

/// Topics: ("Approval",)
/// Data: (owner, spender, value)
pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, value: i128) {
    env.events().publish(
        (Symbol::new(env, "Approval"),),
        (owner.clone(), spender.clone(), value),
    );
}

// ============================================================
// BOOST
// ============================================================

/// Topics: ("ChangeInvariant",)
/// Data: (is_boosted, boost0, boost1)
pub fn emit_change_invariant(env: &Env, is_boosted: bool, boost0: u32, boost1: u32) {
    env.events().publish(
        (Symbol::new(env, "ChangeInvariant"),),
        (is_boosted, boost0, boost1),
    );
}

/// Topics: ("UpdatedBoost",)
/// Data: (old_boost0, old_boost1, new_boost0, new_boost1, start_time, end_time)
pub fn emit_updated_boost(env: &Env, schedule: &BoostSchedule) {
    env.events().publish(
        (Symbol::new(env, "UpdatedBoost"),),
        (
            schedule.start.boost0,
            schedule.start.boost1,
            schedule.end.boost0,
            schedule.end.boost1,
            schedule.start_time,
            schedule.end_time,
        ),
    );
}

// ============================================================
// GOVERNANCE
// ============================================================

/// Topics: ("Initialized",)
/// Data: (token0, token1, trade_fee_bps, transition_window)
pub fn emit_initialized(
    env: &Env,
    token0: &Address,
    token1: &Address,
    trade_fee_bps: u32,
    transition_window: u64,
) {
    env.events().publish(
        (Symbol::new(env, "Initialized"),),
        (token0.clone(), token1.clone(), trade_fee_bps, transition_window),
    );
}

/// Topics: ("TradeState",)
/// Data: (state,)
pub fn emit_trade_state(env: &Env, state: TradeState) {
    env.events()
        .publish((Symbol::new(env, "TradeState"),), (state,));
}

/// Topics: ("FeeUpdated",)
/// Data: (old_bps, new_bps)
pub fn emit_fee_updated(env: &Env, old_bps: u32, new_bps: u32) {
    env.events()
        .publish((Symbol::new(env, "FeeUpdated"),), (old_bps, new_bps));
}

/// Topics: ("ProtocolFee",)
/// Data: (enabled,)
pub fn emit_protocol_fee(env: &Env, enabled: bool) {
    env.events()
        .publish((Symbol::new(env, "ProtocolFee"),), (enabled,));
}

/// Topics: ("RoleProposed",)
/// Data: (role, holder)
pub fn emit_role_proposed(env: &Env, role: Role, holder: &Address) {
    env.events()
        .publish((Symbol::new(env, "RoleProposed"),), (role, holder.clone()));
}

/// Topics: ("RoleAccepted",)
/// Data: (role, holder)
pub fn emit_role_accepted(env: &Env, role: Role, holder: &Address) {
    env.events()
        .publish((Symbol::new(env, "RoleAccepted"),), (role, holder.clone()));
}
