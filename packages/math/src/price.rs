// UQ112x112 price encoding and the cumulative price oracle

use soroban_sdk::{Env, U256};

use crate::constants::Q112_BITS;
use crate::error::MathError;
use crate::wide::{checked_div, u256, wrapping_add};

/// numerator / denominator as a UQ112x112 fixed-point value
pub fn encode_price(env: &Env, numerator: u128, denominator: u128) -> Result<U256, MathError> {
    checked_div(&u256(env, numerator).shl(Q112_BITS), &u256(env, denominator))
}

/// Advance a price accumulator by `price * elapsed`.
///
/// Prices are below 2^224 and elapsed time is a u32, so the product never
/// exceeds 256 bits; the running sum wraps like any cumulative oracle.
pub fn accumulate_price(cumulative: &U256, price: &U256, elapsed: u32) -> U256 {
    let weighted = price.mul(&U256::from_u32(price.env(), elapsed));
    wrapping_add(cumulative, &weighted)
}
