#![no_std]

use soroban_sdk::{
    contract, contractimpl, log, token, vec, Address, Bytes, Env, IntoVal, String, Symbol, U256,
};

// External packages
use boostswap_boost::{effective_boost, phase, schedule_transition, settle_unboosted};
use boostswap_invariant::{
    check_swap, evaluate, quote_amount_out as quote_curve, Curve, SwapContext,
};
use boostswap_ledger::{
    initial_liquidity, proportional_liquidity, protocol_fee_liquidity, withdrawal_amounts,
};
use boostswap_math::{
    accumulate_price, encode_price, from_i128, to_i128, u256, zero, MAX_RESERVE,
    MAX_TRADE_FEE_BPS, MINIMUM_LIQUIDITY, MIN_TRADE_FEE_BPS,
};

// Local modules
mod claims;
mod error;
mod events;
mod storage;
pub mod types;

use claims::*;
use events::*;
use storage::*;

pub use error::PairError;
pub use storage::DataKey;
pub use types::{
    Boost, BoostPhase, BoostSchedule, PairConfig, PairParams, PairState, Role, TradeState,
};

const CLAIM_NAME: &str = "BoostSwap Pair";
const CLAIM_SYMBOL: &str = "BSP";
const CLAIM_DECIMALS: u32 = 18;

/// Entry point invoked on the recipient of a swap carrying callback data
const PAIR_CALL: &str = "pair_call";

#[contract]
pub struct BoostPair;

#[contractimpl]
impl BoostPair {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize pair
    ///
    /// # Arguments
    /// * `factory` - Registry deploying this pair; must authorize
    /// * `token_a` - First asset (any order)
    /// * `token_b` - Second asset
    /// * `governance` - Parameter setter; boost, trade state and fees
    /// * `fee_recipient` - Receives protocol fee claims when enabled
    /// * `params` - Trade fee and boost transition window
    pub fn initialize(
        env: Env,
        factory: Address,
        token_a: Address,
        token_b: Address,
        governance: Address,
        fee_recipient: Address,
        params: PairParams,
    ) -> Result<(), PairError> {
        factory.require_auth();

        if is_initialized(&env) {
            return Err(PairError::AlreadyInitialized);
        }
        if token_a == token_b {
            return Err(PairError::IdenticalTokens);
        }
        validate_trade_fee(params.trade_fee_bps)?;
        if params.transition_window == 0 {
            return Err(PairError::InvalidTransitionWindow);
        }

        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        let config = PairConfig {
            factory,
            token0,
            token1,
            trade_fee_bps: params.trade_fee_bps,
            transition_window: params.transition_window,
            protocol_fee_on: false,
        };

        write_config(&env, &config);
        write_state(&env, &PairState::new(&env));
        write_schedule(&env, &BoostSchedule::unboosted(env.ledger().timestamp()));
        write_trade_state(&env, TradeState::SellAll);
        write_role(&env, Role::Governance, &governance);
        write_role(&env, Role::FeeRecipient, &fee_recipient);
        set_initialized(&env);

        emit_initialized(
            &env,
            &config.token0,
            &config.token1,
            config.trade_fee_bps,
            config.transition_window,
        );

        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn get_config(env: Env) -> Result<PairConfig, PairError> {
        read_config(&env)
    }

    /// Get (reserve0, reserve1, block_timestamp_last)
    pub fn get_reserves(env: Env) -> Result<(u128, u128, u32), PairError> {
        let state = read_state(&env)?;
        Ok((state.reserve0, state.reserve1, state.block_timestamp_last))
    }

    /// Get full pair state, including the price accumulators and k_last
    pub fn get_state(env: Env) -> Result<PairState, PairError> {
        read_state(&env)
    }

    pub fn token0(env: Env) -> Result<Address, PairError> {
        Ok(read_config(&env)?.token0)
    }

    pub fn token1(env: Env) -> Result<Address, PairError> {
        Ok(read_config(&env)?.token1)
    }

    /// Boost in effect at the current ledger timestamp
    pub fn get_boost(env: Env) -> Result<Boost, PairError> {
        let schedule = read_schedule(&env)?;
        Ok(effective_boost(&schedule, env.ledger().timestamp()))
    }

    pub fn get_boost_schedule(env: Env) -> Result<BoostSchedule, PairError> {
        read_schedule(&env)
    }

    pub fn get_boost_phase(env: Env) -> Result<BoostPhase, PairError> {
        let schedule = read_schedule(&env)?;
        Ok(phase(&schedule, env.ledger().timestamp()))
    }

    pub fn get_trade_state(env: Env) -> TradeState {
        read_trade_state(&env)
    }

    pub fn get_governance(env: Env) -> Result<Address, PairError> {
        read_role(&env, Role::Governance)
    }

    pub fn get_fee_recipient(env: Env) -> Result<Address, PairError> {
        read_role(&env, Role::FeeRecipient)
    }

    pub fn get_pending_role(env: Env, role: Role) -> Option<Address> {
        read_pending_role(&env, role)
    }

    /// Largest output the pair accepts for `amount_in` of `token_in`
    pub fn quote_amount_out(
        env: Env,
        token_in: Address,
        amount_in: u128,
    ) -> Result<u128, PairError> {
        let config = read_config(&env)?;
        let zero_for_one = if token_in == config.token0 {
            true
        } else if token_in == config.token1 {
            false
        } else {
            return Err(PairError::InvalidToken);
        };

        let state = read_state(&env)?;
        let ctx = Self::swap_context(&env, &config, &state)?;
        Ok(quote_curve(&env, &ctx, amount_in, zero_for_one)?)
    }

    // ========================================================
    // LIQUIDITY FUNCTIONS
    // ========================================================

    /// Issue claims for the assets sent to the pair since the last sync
    ///
    /// # Arguments
    /// * `sender` - Caller recorded in the Mint event
    /// * `to` - Receives the claims
    ///
    /// # Returns
    /// Claims minted
    pub fn mint(env: Env, sender: Address, to: Address) -> Result<i128, PairError> {
        sender.require_auth();
        acquire_lock(&env)?;
        let liquidity = Self::mint_liquidity(&env, &sender, &to)?;
        release_lock(&env);
        Ok(liquidity)
    }

    /// Burn the claims held by the pair itself and release the underlying
    /// assets to `to`
    ///
    /// # Returns
    /// `(amount0, amount1)` withdrawn
    pub fn burn(env: Env, sender: Address, to: Address) -> Result<(u128, u128), PairError> {
        sender.require_auth();
        acquire_lock(&env)?;
        let amounts = Self::burn_liquidity(&env, &sender, &to)?;
        release_lock(&env);
        Ok(amounts)
    }

    // ========================================================
    // SWAP FUNCTION
    // ========================================================

    /// Send outputs optimistically, then require the invariant to hold on the
    /// re-measured balances
    ///
    /// # Arguments
    /// * `sender` - Caller recorded in the Swap event
    /// * `amount0_out` - token0 to send to `to`
    /// * `amount1_out` - token1 to send to `to`
    /// * `to` - Recipient of the outputs
    /// * `data` - When non-empty, `to.pair_call(sender, amount0_out,
    ///   amount1_out, data)` runs before balances are measured
    pub fn swap(
        env: Env,
        sender: Address,
        amount0_out: u128,
        amount1_out: u128,
        to: Address,
        data: Bytes,
    ) -> Result<(), PairError> {
        sender.require_auth();
        acquire_lock(&env)?;
        Self::execute_swap(&env, &sender, amount0_out, amount1_out, &to, &data)?;
        release_lock(&env);
        Ok(())
    }

    // ========================================================
    // RESERVE MAINTENANCE
    // ========================================================

    /// Force reserves to match balances
    pub fn sync(env: Env) -> Result<(), PairError> {
        acquire_lock(&env)?;
        let config = read_config(&env)?;
        let mut state = read_state(&env)?;
        let (balance0, balance1) = Self::measure_balances(&env, &config)?;
        Self::update_reserves(&env, &mut state, balance0, balance1)?;
        write_state(&env, &state);
        release_lock(&env);
        Ok(())
    }

    /// Force balances to match reserves, sending the excess to `to`
    pub fn skim(env: Env, to: Address) -> Result<(u128, u128), PairError> {
        acquire_lock(&env)?;
        let config = read_config(&env)?;
        let state = read_state(&env)?;
        let (balance0, balance1) = Self::measure_balances(&env, &config)?;

        let excess0 = balance0.saturating_sub(state.reserve0);
        let excess1 = balance1.saturating_sub(state.reserve1);
        Self::transfer_out(&env, &config.token0, &to, excess0)?;
        Self::transfer_out(&env, &config.token1, &to, excess1)?;

        release_lock(&env);
        Ok((excess0, excess1))
    }

    // ========================================================
    // BOOST
    // ========================================================

    /// Start moving the curve from (1, 1) towards `(boost0, boost1)`
    pub fn make_boosted(env: Env, boost0: u32, boost1: u32) -> Result<(), PairError> {
        Self::require_governance(&env)?;
        let config = read_config(&env)?;
        let schedule = read_schedule(&env)?;
        let now = env.ledger().timestamp();

        if phase(&schedule, now) != BoostPhase::Unboosted {
            return Err(PairError::AlreadyBoosted);
        }
        let target = Boost::new(boost0, boost1);
        if target.is_unity() {
            return Err(PairError::InvalidBoost);
        }

        let next = schedule_transition(&schedule, target, now, config.transition_window)?;
        write_schedule(&env, &next);

        log!(&env, "make_boosted", boost0, boost1, next.end_time);
        emit_change_invariant(&env, true, boost0, boost1);
        emit_updated_boost(&env, &next);
        Ok(())
    }

    /// Re-target a boosted pair; (1, 1) only once no transition is running
    pub fn update_boost(env: Env, boost0: u32, boost1: u32) -> Result<(), PairError> {
        Self::require_governance(&env)?;
        let config = read_config(&env)?;
        let schedule = read_schedule(&env)?;
        let now = env.ledger().timestamp();

        if phase(&schedule, now) == BoostPhase::Unboosted {
            return Err(PairError::NotBoosted);
        }

        let target = Boost::new(boost0, boost1);
        let next = schedule_transition(&schedule, target, now, config.transition_window)?;
        write_schedule(&env, &next);

        log!(&env, "update_boost", boost0, boost1, next.end_time);
        emit_updated_boost(&env, &next);
        Ok(())
    }

    /// Settle a finished return to (1, 1) back onto the constant-product curve
    pub fn make_uni(env: Env) -> Result<(), PairError> {
        Self::require_governance(&env)?;
        let schedule = read_schedule(&env)?;
        let next = settle_unboosted(&schedule, env.ledger().timestamp())?;
        write_schedule(&env, &next);

        let unity = Boost::unity();
        emit_change_invariant(&env, false, unity.boost0, unity.boost1);
        Ok(())
    }

    // ========================================================
    // GOVERNANCE
    // ========================================================

    pub fn set_trade_state(env: Env, state: TradeState) -> Result<(), PairError> {
        Self::require_governance(&env)?;
        write_trade_state(&env, state);
        emit_trade_state(&env, state);
        Ok(())
    }

    pub fn set_trade_fee(env: Env, fee_bps: u32) -> Result<(), PairError> {
        Self::require_governance(&env)?;
        validate_trade_fee(fee_bps)?;

        let mut config = read_config(&env)?;
        let old_bps = config.trade_fee_bps;
        config.trade_fee_bps = fee_bps;
        write_config(&env, &config);

        emit_fee_updated(&env, old_bps, fee_bps);
        Ok(())
    }

    /// Toggle protocol fee accrual. The k_last snapshot follows lazily on the
    /// next mint or burn.
    pub fn set_protocol_fee(env: Env, enabled: bool) -> Result<(), PairError> {
        Self::require_governance(&env)?;
        let mut config = read_config(&env)?;
        config.protocol_fee_on = enabled;
        write_config(&env, &config);

        emit_protocol_fee(&env, enabled);
        Ok(())
    }

    pub fn propose_governance(env: Env, new_governance: Address) -> Result<(), PairError> {
        Self::propose_role(&env, Role::Governance, &new_governance)
    }

    pub fn accept_governance(env: Env, new_governance: Address) -> Result<(), PairError> {
        Self::accept_role(&env, Role::Governance, &new_governance)
    }

    pub fn propose_fee_recipient(env: Env, new_recipient: Address) -> Result<(), PairError> {
        Self::propose_role(&env, Role::FeeRecipient, &new_recipient)
    }

    pub fn accept_fee_recipient(env: Env, new_recipient: Address) -> Result<(), PairError> {
        Self::accept_role(&env, Role::FeeRecipient, &new_recipient)
    }

    // ========================================================
    // CLAIM TOKEN
    // ========================================================

    pub fn name(env: Env) -> String {
        String::from_str(&env, CLAIM_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, CLAIM_SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        CLAIM_DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    /// Claims locked forever by the first deposit
    pub fn locked_supply(env: Env) -> i128 {
        read_locked_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        read_allowance(&env, &owner, &spender)
    }

    pub fn nonce(env: Env, owner: Address) -> u64 {
        read_nonce(&env, &owner)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PairError> {
        from.require_auth();
        let amount = require_non_negative(amount)?;
        move_claims(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), PairError> {
        spender.require_auth();
        let amount = require_non_negative(amount)?;
        spend_allowance(&env, &from, &spender, amount)?;
        move_claims(&env, &from, &to, amount)
    }

    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), PairError> {
        owner.require_auth();
        let amount = require_non_negative(amount)?;
        set_allowance(&env, &owner, &spender, amount);
        Ok(())
    }

    /// Approve by the owner's authorization over
    /// `(spender, value, nonce, deadline)` for this pair.
    ///
    /// The nonce is the owner's current one and is consumed, so each
    /// authorization is good for exactly one permit.
    pub fn permit(
        env: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
    ) -> Result<(), PairError> {
        if deadline < env.ledger().timestamp() {
            return Err(PairError::PermitExpired);
        }
        let value = require_non_negative(value)?;
        let nonce = read_nonce(&env, &owner);

        owner.require_auth_for_args(vec![
            &env,
            spender.into_val(&env),
            value.into_val(&env),
            nonce.into_val(&env),
            deadline.into_val(&env),
        ]);

        write_nonce(&env, &owner, nonce + 1);
        set_allowance(&env, &owner, &spender, value);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn mint_liquidity(env: &Env, sender: &Address, to: &Address) -> Result<i128, PairError> {
        let config = read_config(env)?;
        let mut state = read_state(env)?;
        let (balance0, balance1) = Self::measure_balances(env, &config)?;

        let amount0 = balance0
            .checked_sub(state.reserve0)
            .ok_or(PairError::Underflow)?;
        let amount1 = balance1
            .checked_sub(state.reserve1)
            .ok_or(PairError::Underflow)?;

        let curve = Self::current_curve(env)?;
        let fee_on = Self::accrue_protocol_fee(env, &config, &mut state, &curve)?;
        let total_supply = from_i128(read_total_supply(env))?;

        let liquidity = if total_supply == 0 {
            let liquidity = initial_liquidity(env, amount0, amount1)?;
            lock_claims(env, to_i128(MINIMUM_LIQUIDITY)?)?;
            liquidity
        } else {
            proportional_liquidity(
                env,
                amount0,
                amount1,
                state.reserve0,
                state.reserve1,
                total_supply,
            )?
        };
        let liquidity = to_i128(liquidity)?;
        mint_claims(env, to, liquidity)?;

        Self::update_reserves(env, &mut state, balance0, balance1)?;
        if fee_on {
            Self::snapshot_invariant(env, &mut state, &curve)?;
        }
        write_state(env, &state);

        log!(env, "mint", liquidity, amount0, amount1);
        emit_mint(env, sender, amount0, amount1);
        Ok(liquidity)
    }

    fn burn_liquidity(env: &Env, sender: &Address, to: &Address) -> Result<(u128, u128), PairError> {
        let config = read_config(env)?;
        let mut state = read_state(env)?;
        let pair = env.current_contract_address();
        let (balance0, balance1) = Self::measure_balances(env, &config)?;
        let liquidity = read_balance(env, &pair);

        let curve = Self::current_curve(env)?;
        let fee_on = Self::accrue_protocol_fee(env, &config, &mut state, &curve)?;
        let total_supply = from_i128(read_total_supply(env))?;

        let (amount0, amount1) =
            withdrawal_amounts(env, from_i128(liquidity)?, balance0, balance1, total_supply)?;
        burn_claims(env, &pair, liquidity)?;

        Self::update_reserves(env, &mut state, balance0 - amount0, balance1 - amount1)?;
        if fee_on {
            Self::snapshot_invariant(env, &mut state, &curve)?;
        }
        write_state(env, &state);

        Self::transfer_out(env, &config.token0, to, amount0)?;
        Self::transfer_out(env, &config.token1, to, amount1)?;

        log!(env, "burn", liquidity, amount0, amount1);
        emit_burn(env, sender, amount0, amount1, to);
        Ok((amount0, amount1))
    }

    fn execute_swap(
        env: &Env,
        sender: &Address,
        amount0_out: u128,
        amount1_out: u128,
        to: &Address,
        data: &Bytes,
    ) -> Result<(), PairError> {
        if amount0_out == 0 && amount1_out == 0 {
            return Err(PairError::InsufficientOutputAmount);
        }

        let config = read_config(env)?;
        let mut state = read_state(env)?;
        if amount0_out >= state.reserve0 || amount1_out >= state.reserve1 {
            return Err(PairError::InsufficientLiquidity);
        }
        if *to == config.token0 || *to == config.token1 {
            return Err(PairError::InvalidRecipient);
        }

        let trade_state = read_trade_state(env);
        if trade_state == TradeState::SellNone {
            return Err(PairError::TradeForbidden);
        }

        Self::transfer_out(env, &config.token0, to, amount0_out)?;
        Self::transfer_out(env, &config.token1, to, amount1_out)?;

        if !data.is_empty() {
            env.invoke_contract::<()>(
                to,
                &Symbol::new(env, PAIR_CALL),
                vec![
                    env,
                    sender.clone().into_val(env),
                    amount0_out.into_val(env),
                    amount1_out.into_val(env),
                    data.clone().into_val(env),
                ],
            );
        }

        let (balance0, balance1) = Self::measure_balances(env, &config)?;
        let amount0_in = balance0.saturating_sub(state.reserve0 - amount0_out);
        let amount1_in = balance1.saturating_sub(state.reserve1 - amount1_out);
        if amount0_in == 0 && amount1_in == 0 {
            return Err(PairError::InsufficientInputAmount);
        }
        if !trade_state.allows(amount0_in, amount1_in) {
            return Err(PairError::TradeForbidden);
        }

        let ctx = Self::swap_context(env, &config, &state)?;
        check_swap(env, &ctx, balance0, balance1, amount0_in, amount1_in)?;

        Self::update_reserves(env, &mut state, balance0, balance1)?;
        write_state(env, &state);

        log!(env, "swap", amount0_in, amount1_in, amount0_out, amount1_out);
        emit_swap(env, sender, amount0_in, amount1_in, amount0_out, amount1_out, to);
        Ok(())
    }

    /// Mint the fee recipient's share of invariant growth since the last
    /// snapshot. Current and snapshot reserves are both measured on `curve`,
    /// so boost drift between events is not mistaken for fee income.
    /// Clears a stale snapshot once the fee is switched off.
    fn accrue_protocol_fee(
        env: &Env,
        config: &PairConfig,
        state: &mut PairState,
        curve: &Curve,
    ) -> Result<bool, PairError> {
        if !config.protocol_fee_on {
            if state.k_last != zero(env) {
                state.k_last = zero(env);
                state.reserve0_last = 0;
                state.reserve1_last = 0;
            }
            return Ok(false);
        }
        if state.k_last == zero(env) {
            return Ok(true);
        }

        let k = invariant_value(env, curve, state.reserve0, state.reserve1)?;
        let k_last = invariant_value(env, curve, state.reserve0_last, state.reserve1_last)?;
        let total_supply = from_i128(read_total_supply(env))?;
        let liquidity = protocol_fee_liquidity(env, &k, &k_last, total_supply)?;
        if liquidity > 0 {
            let recipient = read_role(env, Role::FeeRecipient)?;
            mint_claims(env, &recipient, to_i128(liquidity)?)?;
        }
        Ok(true)
    }

    /// Write balances into the reserves, advancing the price accumulators
    /// by the time the old reserves were in effect
    fn update_reserves(
        env: &Env,
        state: &mut PairState,
        balance0: u128,
        balance1: u128,
    ) -> Result<(), PairError> {
        if balance0 > MAX_RESERVE || balance1 > MAX_RESERVE {
            return Err(PairError::Overflow);
        }

        let timestamp = (env.ledger().timestamp() % (1u64 << 32)) as u32;
        let elapsed = timestamp.wrapping_sub(state.block_timestamp_last);
        if elapsed > 0 && state.reserve0 != 0 && state.reserve1 != 0 {
            let price0 = encode_price(env, state.reserve1, state.reserve0)?;
            let price1 = encode_price(env, state.reserve0, state.reserve1)?;
            state.price0_cumulative_last =
                accumulate_price(&state.price0_cumulative_last, &price0, elapsed);
            state.price1_cumulative_last =
                accumulate_price(&state.price1_cumulative_last, &price1, elapsed);
        }

        state.reserve0 = balance0;
        state.reserve1 = balance1;
        state.block_timestamp_last = timestamp;

        emit_sync(env, balance0, balance1);
        Ok(())
    }

    /// Record the reserves and their invariant as the protocol fee baseline
    fn snapshot_invariant(env: &Env, state: &mut PairState, curve: &Curve) -> Result<(), PairError> {
        state.k_last = invariant_value(env, curve, state.reserve0, state.reserve1)?;
        state.reserve0_last = state.reserve0;
        state.reserve1_last = state.reserve1;
        Ok(())
    }

    fn current_curve(env: &Env) -> Result<Curve, PairError> {
        let schedule = read_schedule(env)?;
        Ok(Curve::for_boost(effective_boost(&schedule, env.ledger().timestamp())))
    }

    fn swap_context(
        env: &Env,
        config: &PairConfig,
        state: &PairState,
    ) -> Result<SwapContext, PairError> {
        Ok(SwapContext {
            curve: Self::current_curve(env)?,
            fee_bps: config.trade_fee_bps,
            reserve0: state.reserve0,
            reserve1: state.reserve1,
        })
    }

    fn measure_balances(env: &Env, config: &PairConfig) -> Result<(u128, u128), PairError> {
        let pair = env.current_contract_address();
        let balance0 = token::Client::new(env, &config.token0).balance(&pair);
        let balance1 = token::Client::new(env, &config.token1).balance(&pair);
        Ok((from_i128(balance0)?, from_i128(balance1)?))
    }

    fn transfer_out(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), PairError> {
        if amount > 0 {
            token::Client::new(env, token).transfer(
                &env.current_contract_address(),
                to,
                &to_i128(amount)?,
            );
        }
        Ok(())
    }

    fn require_governance(env: &Env) -> Result<Address, PairError> {
        let governance = read_role(env, Role::Governance)?;
        governance.require_auth();
        Ok(governance)
    }

    fn propose_role(env: &Env, role: Role, holder: &Address) -> Result<(), PairError> {
        read_role(env, role)?.require_auth();
        write_pending_role(env, role, holder);

        log!(env, "propose_role", role, holder.clone());
        emit_role_proposed(env, role, holder);
        Ok(())
    }

    fn accept_role(env: &Env, role: Role, holder: &Address) -> Result<(), PairError> {
        let pending = read_pending_role(env, role).ok_or(PairError::NoPendingRole)?;
        if pending != *holder {
            return Err(PairError::Unauthorized);
        }
        holder.require_auth();

        write_role(env, role, holder);
        remove_pending_role(env, role);

        emit_role_accepted(env, role, holder);
        Ok(())
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

fn invariant_value(env: &Env, curve: &Curve, reserve0: u128, reserve1: u128) -> Result<U256, PairError> {
    Ok(evaluate(env, curve, &u256(env, reserve0), &u256(env, reserve1))?)
}

fn validate_trade_fee(fee_bps: u32) -> Result<(), PairError> {
    if !(MIN_TRADE_FEE_BPS..=MAX_TRADE_FEE_BPS).contains(&fee_bps) {
        return Err(PairError::InvalidTradeFee);
    }
    Ok(())
}
