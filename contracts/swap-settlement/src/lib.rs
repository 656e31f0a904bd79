#![no_std]
//! # Swap Settlement - Custodial Router Pattern
//!
//! This contract settles single-pool swaps through an external swap router.
//!
//! ## Key Characteristics:
//! - Contract takes temporary custody of the caller's input tokens
//! - The router gets an allowance for exactly the amount pulled, valid only for the current ledger
//! - Output tokens go from the router straight to the caller
//! - Exact-output swaps refund any unspent input and revoke the router allowance
//! - Token flow: User → Contract → Router (Pool) → User
//!
//! ## Authorization:
//! The caller signs the settlement call and approves this contract on `token_in`
//! beforehand (`approve(caller, settlement, amount, expiration)`). Every later token
//! movement is made by the contract on its own behalf.
//!
//! ## Price Protection:
//! `settle_exact_input` forwards no minimum output and no price limit, which is
//! not safe against front-running. Use the `*_with` entry points to supply real bounds.

use soroban_sdk::{contract, contractimpl, Address, Env};

mod error;
mod events;
mod ledger;
mod router;
mod storage;
mod types;

pub use error::SettlementError;
pub use router::{SwapRouterClient, SwapRouterError, SwapRouterInterface};
pub use types::{SwapConfig, SwapMode, SwapRequest, SwapResult};

use events::{emit_exact_input_settled, emit_exact_output_settled};
use storage::{
    extend_instance_ttl, get_default_config, get_swap_router_address, set_default_config,
    set_swap_router_address,
};

/// Validates that the amount is strictly positive
pub fn check_positive_amount(amount: i128) -> Result<(), SettlementError> {
    if amount <= 0 {
        Err(SettlementError::AmountNotPositive)
    } else {
        Ok(())
    }
}

#[contract]
pub struct SwapSettlement;

#[contractimpl]
impl SwapSettlement {
    /// Initialize the contract with the swap router and the default swap config
    ///
    /// ## Parameters:
    /// - `router_address`: Router used for every settlement
    /// - `config`: Pair, fee tier and price limit used by `settle_exact_input` / `settle_exact_output`
    pub fn __constructor(e: Env, router_address: Address, config: SwapConfig) {
        set_swap_router_address(&e, router_address);
        set_default_config(&e, config);
    }

    /// Swap exactly `amount_in` of the default `token_in` for as much `token_out` as possible
    ///
    /// No minimum output and no price limit are enforced.
    ///
    /// ## Returns:
    /// Amount of `token_out` sent to `caller`
    pub fn settle_exact_input(e: Env, caller: Address, amount_in: i128) -> Result<i128, SettlementError> {
        caller.require_auth();
        extend_instance_ttl(&e);

        let config = get_default_config(&e)?;
        let result = Self::exact_input(&e, &caller, &config, amount_in, 0)?;
        Ok(result.amount_out)
    }

    /// Buy exactly `amount_out` of the default `token_out`, spending at most `amount_in_maximum`
    ///
    /// ## Returns:
    /// Amount of `token_in` actually spent; the rest of `amount_in_maximum` is refunded
    pub fn settle_exact_output(
        e: Env,
        caller: Address,
        amount_out: i128,
        amount_in_maximum: i128,
    ) -> Result<i128, SettlementError> {
        caller.require_auth();
        extend_instance_ttl(&e);

        let config = get_default_config(&e)?;
        let result = Self::exact_output(&e, &caller, &config, amount_out, amount_in_maximum)?;
        Ok(result.amount_in)
    }

    /// Exact-input swap with a per-call config and a minimum output
    ///
    /// `amount_out_minimum` must be >= 0 (a negative value is `AmountNotPositive`);
    /// `0` disables the slippage bound.
    pub fn settle_exact_input_with(
        e: Env,
        caller: Address,
        config: SwapConfig,
        amount_in: i128,
        amount_out_minimum: i128,
    ) -> Result<SwapResult, SettlementError> {
        caller.require_auth();
        extend_instance_ttl(&e);

        Self::exact_input(&e, &caller, &config, amount_in, amount_out_minimum)
    }

    /// Exact-output swap with a per-call config
    pub fn settle_exact_output_with(
        e: Env,
        caller: Address,
        config: SwapConfig,
        amount_out: i128,
        amount_in_maximum: i128,
    ) -> Result<SwapResult, SettlementError> {
        caller.require_auth();
        extend_instance_ttl(&e);

        Self::exact_output(&e, &caller, &config, amount_out, amount_in_maximum)
    }

    pub fn router(e: Env) -> Result<Address, SettlementError> {
        get_swap_router_address(&e)
    }

    pub fn config(e: Env) -> Result<SwapConfig, SettlementError> {
        get_default_config(&e)
    }
}

impl SwapSettlement {
    /// Exact-input settlement:
    /// 1. Pull `amount_in` from `caller` into custody
    /// 2. Approve the router for exactly `amount_in`
    /// 3. Router consumes the whole allowance and pays `caller` directly
    ///
    /// A router that leaves any of `amount_in` in custody fails the call with `RouterFailed`.
    fn exact_input(
        e: &Env,
        caller: &Address,
        config: &SwapConfig,
        amount_in: i128,
        amount_out_minimum: i128,
    ) -> Result<SwapResult, SettlementError> {
        check_positive_amount(amount_in)?;
        if amount_out_minimum < 0 {
            return Err(SettlementError::AmountNotPositive);
        }

        let router_address = get_swap_router_address(e)?;

        ledger::pull(e, &config.token_in, caller, amount_in)?;
        ledger::grant(e, &config.token_in, &router_address, amount_in)?;

        let request = SwapRequest {
            mode: SwapMode::ExactInput,
            token_in: config.token_in.clone(),
            token_out: config.token_out.clone(),
            fee_tier: config.fee_tier,
            recipient: caller.clone(),
            deadline: e.ledger().timestamp(),
            amount_specified: amount_in,
            amount_limit: amount_out_minimum,
            price_limit: config.price_limit,
        };
        let held = ledger::custody(e, &config.token_in);
        let amount_out = router::exact_input(e, &router_address, &request)?;
        if held - ledger::custody(e, &config.token_in) != amount_in {
            return Err(SettlementError::RouterFailed);
        }

        emit_exact_input_settled(e, caller, config, amount_in, amount_out);

        Ok(SwapResult { amount_in, amount_out })
    }

    /// Exact-output settlement:
    /// 1. Pull `amount_in_maximum` from `caller` into custody
    /// 2. Approve the router for exactly `amount_in_maximum`
    /// 3. Router reports the input it actually spent
    /// 4. If it spent less, revoke the router allowance, then refund the difference
    ///
    /// The reported input must match what the router actually took from custody.
    fn exact_output(
        e: &Env,
        caller: &Address,
        config: &SwapConfig,
        amount_out: i128,
        amount_in_maximum: i128,
    ) -> Result<SwapResult, SettlementError> {
        check_positive_amount(amount_out)?;
        check_positive_amount(amount_in_maximum)?;

        let router_address = get_swap_router_address(e)?;

        ledger::pull(e, &config.token_in, caller, amount_in_maximum)?;
        ledger::grant(e, &config.token_in, &router_address, amount_in_maximum)?;

        let request = SwapRequest {
            mode: SwapMode::ExactOutput,
            token_in: config.token_in.clone(),
            token_out: config.token_out.clone(),
            fee_tier: config.fee_tier,
            recipient: caller.clone(),
            deadline: e.ledger().timestamp(),
            amount_specified: amount_out,
            amount_limit: amount_in_maximum,
            price_limit: config.price_limit,
        };
        let held = ledger::custody(e, &config.token_in);
        let amount_in = router::exact_output(e, &router_address, &request)?;

        if amount_in < 0 {
            return Err(SettlementError::RouterFailed);
        }
        if amount_in > amount_in_maximum {
            return Err(SettlementError::ExcessiveInputRequired);
        }
        if held - ledger::custody(e, &config.token_in) != amount_in {
            return Err(SettlementError::RouterFailed);
        }

        let refund = amount_in_maximum - amount_in;
        if refund > 0 {
            ledger::revoke(e, &config.token_in, &router_address)?;
            ledger::push(e, &config.token_in, caller, refund);
        }

        emit_exact_output_settled(e, caller, config, amount_in, amount_out, refund);

        Ok(SwapResult { amount_in, amount_out })
    }
}
