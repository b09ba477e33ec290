// BoostSwap Math Package
//
// Overflow-checked 256-bit arithmetic, integer square root, boost
// interpolation and the UQ112x112 price oracle encoding.

#![no_std]

pub mod constants;
pub mod error;
pub mod interpolate;
pub mod price;
pub mod wide;

pub use constants::*;
pub use error::MathError;
pub use interpolate::lin_interpolate;
pub use price::{accumulate_price, encode_price};
pub use wide::{
    bit_length, checked_add, checked_div, checked_mul, checked_sub, div_round_up, from_i128,
    max_u256, mul_div, sqrt, sqrt_product, to_i128, to_u128, u256, wrapping_add, zero,
};
