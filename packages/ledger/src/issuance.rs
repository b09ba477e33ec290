// Claim issuance and withdrawal

use boostswap_math::{mul_div, sqrt_product, MINIMUM_LIQUIDITY};
use soroban_sdk::Env;

use crate::types::LedgerError;

/// Claims for the first deposit: sqrt(amount0 * amount1) less the
/// permanently locked MINIMUM_LIQUIDITY.
pub fn initial_liquidity(env: &Env, amount0: u128, amount1: u128) -> Result<u128, LedgerError> {
    let root = sqrt_product(env, amount0, amount1)?;
    if root <= MINIMUM_LIQUIDITY {
        return Err(LedgerError::InsufficientLiquidityMinted);
    }
    Ok(root - MINIMUM_LIQUIDITY)
}

/// Claims for a later deposit, priced by the scarcer side:
/// min(amount0 * S / reserve0, amount1 * S / reserve1)
pub fn proportional_liquidity(
    env: &Env,
    amount0: u128,
    amount1: u128,
    reserve0: u128,
    reserve1: u128,
    total_supply: u128,
) -> Result<u128, LedgerError> {
    let by0 = mul_div(env, amount0, total_supply, reserve0)?;
    let by1 = mul_div(env, amount1, total_supply, reserve1)?;
    let liquidity = by0.min(by1);
    if liquidity == 0 {
        return Err(LedgerError::InsufficientLiquidityMinted);
    }
    Ok(liquidity)
}

/// Assets released by burning `liquidity` claims, floored
pub fn withdrawal_amounts(
    env: &Env,
    liquidity: u128,
    balance0: u128,
    balance1: u128,
    total_supply: u128,
) -> Result<(u128, u128), LedgerError> {
    let amount0 = mul_div(env, liquidity, balance0, total_supply)?;
    let amount1 = mul_div(env, liquidity, balance1, total_supply)?;
    if amount0 == 0 || amount1 == 0 {
        return Err(LedgerError::InsufficientLiquidityBurned);
    }
    Ok((amount0, amount1))
}
