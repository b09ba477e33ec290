#![no_std]

pub mod types;
pub mod curve;
pub mod quote;

pub use types::{Curve, InvariantError, SwapContext};
pub use curve::{accepts, check_swap, evaluate};
pub use quote::quote_amount_out;
