// 256-bit unsigned arithmetic on the host U256 type.
//
// The host traps on overflow; these helpers check first so callers get a
// typed MathError they can map to a stable contract error.

use soroban_sdk::{Env, U256};

use crate::error::MathError;

/// Lift a u128 into a U256
#[inline]
pub fn u256(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

#[inline]
pub fn zero(env: &Env) -> U256 {
    U256::from_u32(env, 0)
}

/// 2^256 - 1
pub fn max_u256(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

pub fn checked_add(a: &U256, b: &U256) -> Result<U256, MathError> {
    let headroom = max_u256(a.env()).sub(a);
    if b > &headroom {
        return Err(MathError::Overflow);
    }
    Ok(a.add(b))
}

pub fn checked_sub(a: &U256, b: &U256) -> Result<U256, MathError> {
    if b > a {
        return Err(MathError::Underflow);
    }
    Ok(a.sub(b))
}

pub fn checked_mul(a: &U256, b: &U256) -> Result<U256, MathError> {
    let env = a.env();
    let zero = zero(env);
    if *a == zero || *b == zero {
        return Ok(zero);
    }
    let limit = max_u256(env).div(b);
    if a > &limit {
        return Err(MathError::Overflow);
    }
    Ok(a.mul(b))
}

/// Floor division
pub fn checked_div(a: &U256, b: &U256) -> Result<U256, MathError> {
    if *b == zero(a.env()) {
        return Err(MathError::DivisionByZero);
    }
    Ok(a.div(b))
}

/// Ceiling division
pub fn div_round_up(a: &U256, b: &U256) -> Result<U256, MathError> {
    let quotient = checked_div(a, b)?;
    if a.rem_euclid(b) != zero(a.env()) {
        checked_add(&quotient, &U256::from_u32(a.env(), 1))
    } else {
        Ok(quotient)
    }
}

/// Narrow a U256 back to u128, failing if it does not fit
pub fn to_u128(value: &U256) -> Result<u128, MathError> {
    value.to_u128().ok_or(MathError::Overflow)
}

/// floor(a * b / denominator) with a 256-bit intermediate
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let product = u256(env, a).mul(&u256(env, b));
    to_u128(&product.div(&u256(env, denominator)))
}

/// Addition modulo 2^256. Only the price accumulators use this.
pub fn wrapping_add(a: &U256, b: &U256) -> U256 {
    let env = a.env();
    let headroom = max_u256(env).sub(a);
    if b > &headroom {
        // a + b - 2^256 == b - (headroom + 1)
        b.sub(&headroom).sub(&U256::from_u32(env, 1))
    } else {
        a.add(b)
    }
}

/// Number of significant bits (0 for zero)
pub fn bit_length(value: &U256) -> u32 {
    let bytes = value.to_be_bytes();
    let len = bytes.len();
    for i in 0..len {
        let byte = bytes.get_unchecked(i);
        if byte != 0 {
            return (len - i) * 8 - byte.leading_zeros();
        }
    }
    0
}

/// floor(sqrt(value)) by Newton iteration.
///
/// Seeded with 2^ceil(bits/2), which is never below the true root, so the
/// sequence decreases monotonically and stops at the floor.
pub fn sqrt(value: &U256) -> U256 {
    let env = value.env();
    let zero = zero(env);
    if *value == zero {
        return zero;
    }

    let bits = bit_length(value);
    let mut x = U256::from_u32(env, 1).shl((bits + 1) / 2);
    loop {
        let y = x.add(&value.div(&x)).shr(1);
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// floor(sqrt(a * b)) for two u128 factors
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> Result<u128, MathError> {
    let product = u256(env, a).mul(&u256(env, b));
    to_u128(&sqrt(&product))
}

// ============================================================
// ASSET AMOUNT CONVERSIONS
// ============================================================

/// Token clients speak i128; the pair keeps unsigned amounts.
#[inline]
pub fn to_i128(value: u128) -> Result<i128, MathError> {
    i128::try_from(value).map_err(|_| MathError::Overflow)
}

#[inline]
pub fn from_i128(value: i128) -> Result<u128, MathError> {
    u128::try_from(value).map_err(|_| MathError::Underflow)
}
