use boostswap_boost::Boost;
use boostswap_math::MathError;

/// Bonding curve selected by the boost in effect
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Curve {
    /// K = x * y
    ConstantProduct,
    /// K = s^2 with (x + b*s)(y + b*s) = (b + 1)^2 * s^2
    Boosted(Boost),
}

impl Curve {
    pub fn for_boost(boost: Boost) -> Self {
        if boost.is_unity() {
            Curve::ConstantProduct
        } else {
            Curve::Boosted(boost)
        }
    }

    pub fn is_boosted(&self) -> bool {
        matches!(self, Curve::Boosted(_))
    }

    /// Error reported when a trade would shrink this curve's invariant
    pub fn insufficient_k(&self) -> InvariantError {
        match self {
            Curve::ConstantProduct => InvariantError::InsufficientUniK,
            Curve::Boosted(_) => InvariantError::InsufficientBoostedK,
        }
    }
}

/// Pre-trade state a swap is validated against
#[derive(Clone, Copy, Debug)]
pub struct SwapContext {
    pub curve: Curve,
    pub fee_bps: u32,
    pub reserve0: u128,
    pub reserve1: u128,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvariantError {
    InsufficientUniK,
    InsufficientBoostedK,
    InsufficientInputAmount,
    InsufficientLiquidity,
    Math(MathError),
}

impl From<MathError> for InvariantError {
    fn from(err: MathError) -> Self {
        InvariantError::Math(err)
    }
}
