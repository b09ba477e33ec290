// Largest output a swap may take

use boostswap_math::{
    checked_add, checked_mul, checked_sub, div_round_up, sqrt, to_u128, u256, MathError,
    FEE_DENOMINATOR,
};
use soroban_sdk::{Env, U256};

use crate::curve::{accepts, evaluate};
use crate::types::{Curve, InvariantError, SwapContext};

/// Steps the closed-form estimate may be nudged before bisecting
const MAX_CORRECTION_STEPS: u32 = 8;

// ============================================================
// PUBLIC QUOTE
// ============================================================

/// Largest `amount_out` the pair accepts for `amount_in` of one asset.
///
/// # Arguments
/// * `ctx` - Curve, fee and reserves the trade is checked against
/// * `amount_in` - Amount of the input asset sent to the pair
/// * `zero_for_one` - Direction (true = token0 in, token1 out)
///
/// The closed form is exact up to rounding; the result is walked to the
/// accepting boundary one unit at a time and bisected if the walk runs long.
pub fn quote_amount_out(
    env: &Env,
    ctx: &SwapContext,
    amount_in: u128,
    zero_for_one: bool,
) -> Result<u128, InvariantError> {
    if amount_in == 0 {
        return Err(InvariantError::InsufficientInputAmount);
    }
    if ctx.reserve0 == 0 || ctx.reserve1 == 0 {
        return Err(InvariantError::InsufficientLiquidity);
    }

    let trial = Trial { env, ctx, amount_in, zero_for_one };
    let max_out = trial.reserve_out() - 1;

    let estimate = match estimate_amount_out(&trial) {
        Ok(estimate) => estimate.min(max_out),
        // (b + 1)^2 K overflows 256 bits only for extreme boosts
        Err(_) => return Ok(trial.bisect(0, max_out)?),
    };

    if trial.accepts(estimate)? {
        let mut best = estimate;
        for _ in 0..MAX_CORRECTION_STEPS {
            if best == max_out || !trial.accepts(best + 1)? {
                return Ok(best);
            }
            best += 1;
        }
        Ok(trial.bisect(best, max_out)?)
    } else {
        let mut candidate = estimate;
        for _ in 0..MAX_CORRECTION_STEPS {
            if candidate == 0 {
                return Ok(0);
            }
            candidate -= 1;
            if trial.accepts(candidate)? {
                return Ok(candidate);
            }
        }
        Ok(trial.bisect(0, candidate.saturating_sub(1))?)
    }
}

// ============================================================
// INTERNAL
// ============================================================

struct Trial<'a> {
    env: &'a Env,
    ctx: &'a SwapContext,
    amount_in: u128,
    zero_for_one: bool,
}

impl Trial<'_> {
    fn reserve_in(&self) -> u128 {
        if self.zero_for_one {
            self.ctx.reserve0
        } else {
            self.ctx.reserve1
        }
    }

    fn reserve_out(&self) -> u128 {
        if self.zero_for_one {
            self.ctx.reserve1
        } else {
            self.ctx.reserve0
        }
    }

    fn accepts(&self, amount_out: u128) -> Result<bool, MathError> {
        let balance_in = self
            .reserve_in()
            .checked_add(self.amount_in)
            .ok_or(MathError::Overflow)?;
        let balance_out = self.reserve_out() - amount_out;

        if self.zero_for_one {
            accepts(self.env, self.ctx, balance_in, balance_out, self.amount_in, 0)
        } else {
            accepts(self.env, self.ctx, balance_out, balance_in, 0, self.amount_in)
        }
    }

    /// Largest accepted output in [lo, hi]; `lo` is returned when nothing
    /// above it passes.
    fn bisect(&self, mut lo: u128, mut hi: u128) -> Result<u128, MathError> {
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if self.accepts(mid)? {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        Ok(lo)
    }
}

/// Closed-form output on the curve through the current reserves.
///
/// With S = sqrt(K) scaled by the fee denominator, X the fee-adjusted input
/// balance and b the side boost minus one, the output balance solves
///
///   Y = (b + 1)^2 S^2 / (X + b S) - b S
///
/// rounded up, so the estimate never overshoots by more than rounding.
fn estimate_amount_out(trial: &Trial) -> Result<u128, MathError> {
    let env = trial.env;
    let ctx = trial.ctx;
    let denominator = u256(env, FEE_DENOMINATOR);

    let k = evaluate(env, &ctx.curve, &u256(env, ctx.reserve0), &u256(env, ctx.reserve1))?;

    let grown_in = trial
        .reserve_in()
        .checked_add(trial.amount_in)
        .ok_or(MathError::Overflow)?;
    let b = match ctx.curve {
        Curve::ConstantProduct => 0,
        Curve::Boosted(boost) => {
            let token0_heavier = if trial.zero_for_one {
                grown_in > trial.reserve_out()
            } else {
                trial.reserve_out() > grown_in
            };
            let side = if token0_heavier { boost.boost0 } else { boost.boost1 };
            side.saturating_sub(1)
        }
    };

    let x = checked_sub(
        &checked_mul(&u256(env, grown_in), &denominator)?,
        &checked_mul(&u256(env, trial.amount_in), &U256::from_u32(env, ctx.fee_bps))?,
    )?;

    // K = s^2 exactly on the boosted curve, so S^2 = K * D^2 on both curves
    let b = U256::from_u32(env, b);
    let b_s = checked_mul(&b, &checked_mul(&sqrt(&k), &denominator)?)?;
    let b_plus_one = checked_add(&b, &U256::from_u32(env, 1))?;
    let numerator = checked_mul(
        &checked_mul(&checked_mul(&b_plus_one, &b_plus_one)?, &k)?,
        &checked_mul(&denominator, &denominator)?,
    )?;

    let y_scaled = div_round_up(&numerator, &checked_add(&x, &b_s)?)?;
    let balance_out = match checked_sub(&y_scaled, &b_s) {
        Ok(y) => to_u128(&div_round_up(&y, &denominator)?)?,
        Err(_) => 0,
    };

    Ok(trial.reserve_out().saturating_sub(balance_out))
}
