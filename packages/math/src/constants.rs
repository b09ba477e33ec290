// Constants shared by every BoostSwap package.
//
// Grouped by concern; amounts are in the smallest unit of the asset.

// ============================================================
// RESERVE CONSTANTS
// ============================================================

/// Reserves are bounded to 112 bits so that the product of two reserves,
/// scaled by FEE_DENOMINATOR^2, still fits a 256-bit accumulator.
pub const RESERVE_BITS: u32 = 112;

/// Largest value a reserve may hold (2^112 - 1)
pub const MAX_RESERVE: u128 = (1u128 << RESERVE_BITS) - 1;

// ============================================================
// LIQUIDITY CONSTANTS
// ============================================================

/// Claims permanently locked on the first mint.
/// Keeps total supply away from zero once the pair has been seeded.
pub const MINIMUM_LIQUIDITY: u128 = 1000;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Denominator for basis-point fees (100% = 10000 bps)
pub const FEE_DENOMINATOR: u128 = 10_000;

/// Default trading fee (0.30%)
pub const DEFAULT_TRADE_FEE_BPS: u32 = 30;

/// Minimum trading fee (0.01%)
pub const MIN_TRADE_FEE_BPS: u32 = 1;

/// Maximum trading fee (1.00%)
pub const MAX_TRADE_FEE_BPS: u32 = 100;

/// Protocol fee takes 1/PROTOCOL_FEE_SHARE of the growth in sqrt(k)
pub const PROTOCOL_FEE_SHARE: u128 = 6;

// ============================================================
// BOOST CONSTANTS
// ============================================================

/// Boost value of the plain constant-product curve
pub const UNITY_BOOST: u32 = 1;

/// Upper bound on a single side's boost
pub const MAX_BOOST: u32 = 1_000_000;

/// Length of a boost transition in seconds (one day)
pub const DEFAULT_TRANSITION_WINDOW: u64 = 86_400;

// ============================================================
// PRICE ORACLE CONSTANTS
// ============================================================

/// Fractional bits of the UQ112x112 price encoding
pub const Q112_BITS: u32 = 112;
