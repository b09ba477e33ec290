// Protocol fee accrual
//
// While the fee switch is on, the fee recipient is minted claims worth
// 1/6 of the growth in sqrt(K) since the last liquidity event, where K is
// the invariant of the curve in effect. Both sides of the comparison are
// measured on the same curve, so a boost change alone never accrues.
// Nothing accrues between events; the snapshot is taken on mint and burn.

use boostswap_math::{
    checked_add, checked_div, checked_mul, checked_sub, sqrt, to_u128, u256, zero,
    PROTOCOL_FEE_SHARE,
};
use soroban_sdk::{Env, U256};

use crate::types::LedgerError;

/// Claims owed to the fee recipient:
///
///   S * (rootK - rootKLast) / ((PROTOCOL_FEE_SHARE - 1) * rootK + rootKLast)
///
/// `k` is the invariant of the current reserves and `k_last` that of the
/// snapshot reserves, both on the current curve. Zero when no snapshot
/// exists or the invariant has not grown.
pub fn protocol_fee_liquidity(
    env: &Env,
    k: &U256,
    k_last: &U256,
    total_supply: u128,
) -> Result<u128, LedgerError> {
    if *k_last == zero(env) {
        return Ok(0);
    }

    let root_k = sqrt(k);
    let root_k_last = sqrt(k_last);
    if root_k <= root_k_last {
        return Ok(0);
    }

    let numerator = checked_mul(&u256(env, total_supply), &checked_sub(&root_k, &root_k_last)?)?;
    let denominator = checked_add(
        &checked_mul(&root_k, &u256(env, PROTOCOL_FEE_SHARE - 1))?,
        &root_k_last,
    )?;
    Ok(to_u128(&checked_div(&numerator, &denominator)?)?)
}
