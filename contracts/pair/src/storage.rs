// Pair storage module for BoostSwap

use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val};

use crate::error::PairError;
use crate::types::{BoostSchedule, PairConfig, PairState, Role, TradeState};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Initialization flag
    Initialized,
    /// Tokens, fees and transition window
    Config,
    /// Reserves, oracle accumulators and k_last
    State,
    /// Boost transition anchors
    Schedule,
    TradeState,
    /// Current holder of a privileged role
    Role(Role),
    /// Holder proposed for a role, awaiting acceptance
    PendingRole(Role),
    /// Claim token total supply
    TotalSupply,
    /// Claims permanently locked by the first deposit
    LockedSupply,
    /// Claim balance by holder
    Balance(Address),
    /// Claim allowance by (owner, spender)
    Allowance(Address, Address),
    /// Permit nonce by owner
    Nonce(Address),
    /// Reentrancy flag (instance storage)
    Locked,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// Extend once the remaining lifetime drops below ~30 days
const PERSISTENT_THRESHOLD: u32 = 518_400;

const INSTANCE_LIFETIME: u32 = 518_400;
const INSTANCE_THRESHOLD: u32 = 120_960;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD, PERSISTENT_LIFETIME);
}

fn write<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    extend_ttl(env, key);
}

/// Read a persistent entry, extending its TTL when present
fn read<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let result = env.storage().persistent().get(key);
    if result.is_some() {
        extend_ttl(env, key);
    }
    result
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    read::<bool>(env, &DataKey::Initialized).is_some()
}

pub fn set_initialized(env: &Env) {
    write(env, &DataKey::Initialized, &true);
}

// ============================================================
// CONFIG & STATE
// ============================================================

pub fn write_config(env: &Env, config: &PairConfig) {
    write(env, &DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<PairConfig, PairError> {
    read(env, &DataKey::Config).ok_or(PairError::NotInitialized)
}

pub fn write_state(env: &Env, state: &PairState) {
    write(env, &DataKey::State, state);
}

pub fn read_state(env: &Env) -> Result<PairState, PairError> {
    read(env, &DataKey::State).ok_or(PairError::NotInitialized)
}

pub fn write_schedule(env: &Env, schedule: &BoostSchedule) {
    write(env, &DataKey::Schedule, schedule);
}

pub fn read_schedule(env: &Env) -> Result<BoostSchedule, PairError> {
    read(env, &DataKey::Schedule).ok_or(PairError::NotInitialized)
}

pub fn write_trade_state(env: &Env, state: TradeState) {
    write(env, &DataKey::TradeState, &state);
}

pub fn read_trade_state(env: &Env) -> TradeState {
    read(env, &DataKey::TradeState).unwrap_or(TradeState::SellAll)
}

// ============================================================
// ROLES
// ============================================================

pub fn write_role(env: &Env, role: Role, holder: &Address) {
    write(env, &DataKey::Role(role), holder);
}

pub fn read_role(env: &Env, role: Role) -> Result<Address, PairError> {
    read(env, &DataKey::Role(role)).ok_or(PairError::NotInitialized)
}

pub fn write_pending_role(env: &Env, role: Role, holder: &Address) {
    write(env, &DataKey::PendingRole(role), holder);
}

pub fn read_pending_role(env: &Env, role: Role) -> Option<Address> {
    read(env, &DataKey::PendingRole(role))
}

pub fn remove_pending_role(env: &Env, role: Role) {
    env.storage().persistent().remove(&DataKey::PendingRole(role));
}

// ============================================================
// CLAIM TOKEN LEDGER
// ============================================================

pub fn read_total_supply(env: &Env) -> i128 {
    read(env, &DataKey::TotalSupply).unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    write(env, &DataKey::TotalSupply, &supply);
}

pub fn read_locked_supply(env: &Env) -> i128 {
    read(env, &DataKey::LockedSupply).unwrap_or(0)
}

pub fn write_locked_supply(env: &Env, locked: i128) {
    write(env, &DataKey::LockedSupply, &locked);
}

pub fn read_balance(env: &Env, holder: &Address) -> i128 {
    read(env, &DataKey::Balance(holder.clone())).unwrap_or(0)
}

pub fn write_balance(env: &Env, holder: &Address, balance: i128) {
    write(env, &DataKey::Balance(holder.clone()), &balance);
}

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    read(env, &DataKey::Allowance(owner.clone(), spender.clone())).unwrap_or(0)
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    write(env, &DataKey::Allowance(owner.clone(), spender.clone()), &amount);
}

pub fn read_nonce(env: &Env, owner: &Address) -> u64 {
    read(env, &DataKey::Nonce(owner.clone())).unwrap_or(0)
}

pub fn write_nonce(env: &Env, owner: &Address, nonce: u64) {
    write(env, &DataKey::Nonce(owner.clone()), &nonce);
}

// ============================================================
// REENTRANCY LOCK
// ============================================================

/// Take the pair-wide lock held for the duration of a state-changing call
pub fn acquire_lock(env: &Env) -> Result<(), PairError> {
    let storage = env.storage().instance();
    if storage.get(&DataKey::Locked).unwrap_or(false) {
        return Err(PairError::Reentrancy);
    }
    storage.set(&DataKey::Locked, &true);
    storage.extend_ttl(INSTANCE_THRESHOLD, INSTANCE_LIFETIME);
    Ok(())
}

pub fn release_lock(env: &Env) {
    env.storage().instance().set(&DataKey::Locked, &false);
}
