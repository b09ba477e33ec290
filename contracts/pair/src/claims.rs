// Claim token ledger
//
// Balances, allowances and supply of the pair's liquidity claims. Every
// movement keeps sum(balance) + locked_supply == total_supply.

use soroban_sdk::{Address, Env};

use crate::error::PairError;
use crate::events::{emit_approval, emit_transfer};
use crate::storage::*;

/// Allowance that is never decremented
pub const UNLIMITED_ALLOWANCE: i128 = i128::MAX;

pub fn require_non_negative(amount: i128) -> Result<i128, PairError> {
    if amount < 0 {
        return Err(PairError::InvalidAmount);
    }
    Ok(amount)
}

fn increase_supply(env: &Env, amount: i128) -> Result<(), PairError> {
    let supply = read_total_supply(env)
        .checked_add(amount)
        .ok_or(PairError::Overflow)?;
    write_total_supply(env, supply);
    Ok(())
}

pub fn mint_claims(env: &Env, to: &Address, amount: i128) -> Result<(), PairError> {
    increase_supply(env, amount)?;
    let balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(PairError::Overflow)?;
    write_balance(env, to, balance);
    emit_transfer(env, None, Some(to.clone()), amount);
    Ok(())
}

/// Mint claims that no holder can ever burn
pub fn lock_claims(env: &Env, amount: i128) -> Result<(), PairError> {
    increase_supply(env, amount)?;
    let locked = read_locked_supply(env)
        .checked_add(amount)
        .ok_or(PairError::Overflow)?;
    write_locked_supply(env, locked);
    emit_transfer(env, None, None, amount);
    Ok(())
}

pub fn burn_claims(env: &Env, from: &Address, amount: i128) -> Result<(), PairError> {
    let balance = read_balance(env, from);
    if balance < amount {
        return Err(PairError::InsufficientBalance);
    }
    write_balance(env, from, balance - amount);
    write_total_supply(env, read_total_supply(env) - amount);
    emit_transfer(env, Some(from.clone()), None, amount);
    Ok(())
}

pub fn move_claims(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), PairError> {
    let from_balance = read_balance(env, from);
    if from_balance < amount {
        return Err(PairError::InsufficientBalance);
    }
    write_balance(env, from, from_balance - amount);
    let to_balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(PairError::Overflow)?;
    write_balance(env, to, to_balance);
    emit_transfer(env, Some(from.clone()), Some(to.clone()), amount);
    Ok(())
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    write_allowance(env, owner, spender, amount);
    emit_approval(env, owner, spender, amount);
}

pub fn spend_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), PairError> {
    let allowance = read_allowance(env, owner, spender);
    if allowance < amount {
        return Err(PairError::InsufficientAllowance);
    }
    if allowance != UNLIMITED_ALLOWANCE {
        write_allowance(env, owner, spender, allowance - amount);
    }
    Ok(())
}
