use boostswap_math::MathError;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LedgerError {
    InsufficientLiquidityMinted,
    InsufficientLiquidityBurned,
    Math(MathError),
}

impl From<MathError> for LedgerError {
    fn from(err: MathError) -> Self {
        LedgerError::Math(err)
    }
}
