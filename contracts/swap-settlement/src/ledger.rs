//! Token movements made by the settlement contract.
//!
//! Every call here acts on behalf of the contract itself, so the contract is
//! the authorizing invoker and no extra auth entries are needed.

use soroban_sdk::{token, Address, Env};

use crate::error::SettlementError;

/// Moves `amount` of `token` from `from` into this contract's custody.
///
/// `from` must have approved this contract beforehand. Allowance shortfalls
/// are `InsufficientAllowance`; a short balance or any token rejection of the
/// transfer is `TransferFailed`.
pub fn pull(e: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), SettlementError> {
    let token_client = token::Client::new(e, token);
    let this = e.current_contract_address();

    if token_client.allowance(from, &this) < amount {
        return Err(SettlementError::InsufficientAllowance);
    }
    if token_client.balance(from) < amount {
        return Err(SettlementError::TransferFailed);
    }

    match token_client.try_transfer_from(&this, from, &this, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(SettlementError::TransferFailed),
    }
}

/// Amount of `token` currently held by this contract
pub fn custody(e: &Env, token: &Address) -> i128 {
    token::Client::new(e, token).balance(&e.current_contract_address())
}

/// Lets `spender` move up to `amount` of this contract's `token`.
///
/// The allowance expires with the current ledger, so it can only be used
/// inside the invocation that granted it.
pub fn grant(e: &Env, token: &Address, spender: &Address, amount: i128) -> Result<(), SettlementError> {
    let token_client = token::Client::new(e, token);
    match token_client.try_approve(
        &e.current_contract_address(),
        spender,
        &amount,
        &e.ledger().sequence(),
    ) {
        Ok(Ok(())) => Ok(()),
        _ => Err(SettlementError::ApprovalFailed),
    }
}

pub fn revoke(e: &Env, token: &Address, spender: &Address) -> Result<(), SettlementError> {
    grant(e, token, spender, 0)
}

/// Sends `amount` of `token` held by this contract to `to`.
pub fn push(e: &Env, token: &Address, to: &Address, amount: i128) {
    let token_client = token::Client::new(e, token);
    token_client.transfer(&e.current_contract_address(), to, &amount);
}
