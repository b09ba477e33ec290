#![no_std]

pub mod types;
pub mod issuance;
pub mod fees;

pub use types::LedgerError;
pub use issuance::{initial_liquidity, proportional_liquidity, withdrawal_amounts};
pub use fees::protocol_fee_liquidity;
