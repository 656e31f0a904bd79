use soroban_sdk::{contractclient, contracterror, Address, Env};

use crate::error::SettlementError;
use crate::types::SwapRequest;

/// Errors a swap router reports for a single-pool swap
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapRouterError {
    SlippageExceeded = 1,
    ExcessiveInputRequired = 2,
    DeadlineExpired = 3,
    PoolNotFound = 4,
}

/// Single-pool swap router.
///
/// `sender` is the address whose allowance the router spends for `token_in`.
/// Output tokens go straight to `request.recipient`.
#[allow(dead_code)]
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    /// Swaps exactly `request.amount_specified` of `token_in`, returns the output amount
    fn exact_input(env: Env, sender: Address, request: SwapRequest) -> Result<i128, SwapRouterError>;

    /// Buys exactly `request.amount_specified` of `token_out`, returns the input spent
    fn exact_output(env: Env, sender: Address, request: SwapRequest) -> Result<i128, SwapRouterError>;
}

pub fn exact_input(e: &Env, router: &Address, request: &SwapRequest) -> Result<i128, SettlementError> {
    let client = SwapRouterClient::new(e, router);
    router_outcome(client.try_exact_input(&e.current_contract_address(), request))
}

pub fn exact_output(e: &Env, router: &Address, request: &SwapRequest) -> Result<i128, SettlementError> {
    let client = SwapRouterClient::new(e, router);
    router_outcome(client.try_exact_output(&e.current_contract_address(), request))
}

// Router errors map one-to-one; anything else (bad return value, trap) is RouterFailed.
fn router_outcome<C, I>(
    result: Result<Result<i128, C>, Result<SwapRouterError, I>>,
) -> Result<i128, SettlementError> {
    match result {
        Ok(Ok(amount)) => Ok(amount),
        Err(Ok(err)) => Err(err.into()),
        Ok(Err(_)) | Err(Err(_)) => Err(SettlementError::RouterFailed),
    }
}
