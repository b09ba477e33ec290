// Invariant evaluation and the post-trade check

use boostswap_math::{
    checked_add, checked_div, checked_mul, checked_sub, sqrt, u256, MathError, FEE_DENOMINATOR,
};
use soroban_sdk::{Env, U256};

use crate::types::{Curve, InvariantError, SwapContext};

// ============================================================
// CURVE VALUE
// ============================================================

/// Invariant value K of the point (x, y) on `curve`.
///
/// On the boosted curve the side boost is `boost0` while x > y and `boost1`
/// otherwise. With b = boost - 1, s is the positive root of
/// (2b + 1) s^2 - b (x + y) s - x y = 0:
///
///   term = b (x + y) / (2 (2b + 1))
///   s    = sqrt(term^2 + x y / (2b + 1)) + term
///
/// and K = s^2. A side boost of 1 yields exactly x * y.
pub fn evaluate(env: &Env, curve: &Curve, x: &U256, y: &U256) -> Result<U256, MathError> {
    let boost = match curve {
        Curve::ConstantProduct => return checked_mul(x, y),
        Curve::Boosted(boost) => boost,
    };

    let side = if x > y { boost.boost0 } else { boost.boost1 };
    if side <= 1 {
        return checked_mul(x, y);
    }

    let b = U256::from_u32(env, side - 1);
    let den = checked_add(&checked_mul(&b, &U256::from_u32(env, 2))?, &U256::from_u32(env, 1))?;

    let sum = checked_add(x, y)?;
    let term = checked_div(
        &checked_mul(&b, &sum)?,
        &checked_mul(&den, &U256::from_u32(env, 2))?,
    )?;
    let product = checked_div(&checked_mul(x, y)?, &den)?;
    let radicand = checked_add(&checked_mul(&term, &term)?, &product)?;
    let s = checked_add(&sqrt(&radicand), &term)?;

    checked_mul(&s, &s)
}

// ============================================================
// SWAP CHECK
// ============================================================

/// Whether post-trade balances keep the invariant, fee included.
///
/// Each side is scaled to `balance * 10_000 - amount_in * fee_bps` and the
/// result compared against K(reserves) * 10_000^2.
pub fn accepts(
    env: &Env,
    ctx: &SwapContext,
    balance0: u128,
    balance1: u128,
    amount0_in: u128,
    amount1_in: u128,
) -> Result<bool, MathError> {
    let adjusted0 = fee_adjusted(env, balance0, amount0_in, ctx.fee_bps)?;
    let adjusted1 = fee_adjusted(env, balance1, amount1_in, ctx.fee_bps)?;

    let k_after = evaluate(env, &ctx.curve, &adjusted0, &adjusted1)?;
    let k_before = evaluate(env, &ctx.curve, &u256(env, ctx.reserve0), &u256(env, ctx.reserve1))?;
    let denominator = u256(env, FEE_DENOMINATOR);
    let k_required = checked_mul(&k_before, &checked_mul(&denominator, &denominator)?)?;

    Ok(k_after >= k_required)
}

/// `accepts`, reporting a curve-specific error on rejection
pub fn check_swap(
    env: &Env,
    ctx: &SwapContext,
    balance0: u128,
    balance1: u128,
    amount0_in: u128,
    amount1_in: u128,
) -> Result<(), InvariantError> {
    if accepts(env, ctx, balance0, balance1, amount0_in, amount1_in)? {
        Ok(())
    } else {
        Err(ctx.curve.insufficient_k())
    }
}

fn fee_adjusted(env: &Env, balance: u128, amount_in: u128, fee_bps: u32) -> Result<U256, MathError> {
    let scaled = checked_mul(&u256(env, balance), &u256(env, FEE_DENOMINATOR))?;
    let fee = checked_mul(&u256(env, amount_in), &U256::from_u32(env, fee_bps))?;
    checked_sub(&scaled, &fee)
}
