// Pair error module for BoostSwap

use boostswap_boost::BoostError;
use boostswap_invariant::InvariantError;
use boostswap_ledger::LedgerError;
use boostswap_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    // Lifecycle errors (100-199)
    AlreadyInitialized = 100,
    NotInitialized = 101,

    // Configuration errors (200-299)
    /// Trade fee outside [MIN_TRADE_FEE_BPS, MAX_TRADE_FEE_BPS]
    InvalidTradeFee = 200,
    /// Transition window must be positive
    InvalidTransitionWindow = 201,
    IdenticalTokens = 202,
    /// Token is neither asset of this pair
    InvalidToken = 203,

    // Access errors (300-399)
    Unauthorized = 300,
    NoPendingRole = 301,
    Reentrancy = 302,

    // Liquidity errors (400-499)
    InsufficientLiquidityMinted = 400,
    InsufficientLiquidityBurned = 401,
    InsufficientLiquidity = 402,
    InsufficientOutputAmount = 403,
    InsufficientInputAmount = 404,
    /// Swap output sent to one of the pair's own assets
    InvalidRecipient = 405,
    InsufficientBalance = 406,
    InsufficientAllowance = 407,
    /// Negative claim amount
    InvalidAmount = 408,

    // Invariant errors (500-599)
    InsufficientUniK = 500,
    InsufficientBoostedK = 501,

    // Boost state machine errors (600-699)
    InvalidBoost = 600,
    BoostAlreadyChanging = 601,
    AlreadyBoosted = 602,
    NotBoosted = 603,

    // Trade state errors (700-799)
    TradeForbidden = 700,

    // Arithmetic errors (800-899)
    Overflow = 800,
    Underflow = 801,
    DivisionByZero = 802,

    // Claim token errors (900-999)
    PermitExpired = 900,
}

// ============================================================
// PACKAGE ERROR CONVERSIONS
// ============================================================

impl From<MathError> for PairError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Overflow => PairError::Overflow,
            MathError::Underflow => PairError::Underflow,
            MathError::DivisionByZero => PairError::DivisionByZero,
        }
    }
}

impl From<BoostError> for PairError {
    fn from(err: BoostError) -> Self {
        match err {
            BoostError::InvalidBoost => PairError::InvalidBoost,
            BoostError::BoostAlreadyChanging => PairError::BoostAlreadyChanging,
        }
    }
}

impl From<InvariantError> for PairError {
    fn from(err: InvariantError) -> Self {
        match err {
            InvariantError::InsufficientUniK => PairError::InsufficientUniK,
            InvariantError::InsufficientBoostedK => PairError::InsufficientBoostedK,
            InvariantError::InsufficientInputAmount => PairError::InsufficientInputAmount,
            InvariantError::InsufficientLiquidity => PairError::InsufficientLiquidity,
            InvariantError::Math(err) => err.into(),
        }
    }
}

impl From<LedgerError> for PairError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientLiquidityMinted => PairError::InsufficientLiquidityMinted,
            LedgerError::InsufficientLiquidityBurned => PairError::InsufficientLiquidityBurned,
            LedgerError::Math(err) => err.into(),
        }
    }
}
