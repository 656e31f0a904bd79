use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

use crate::{SwapMode, SwapRequest, SwapRouterError};

/// How the mock router answers the next swap
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Behavior {
    /// Output paid for exact input, input charged for exact output
    Fill(i128),
    /// Fails with the `SwapRouterError` carrying this code
    Fail(u32),
    /// Pulls this much more `token_in` than it was allowed
    Overdraw(i128),
    /// Pulls the full allowance but reports this amount
    Misreport(i128),
    /// Pulls this much less `token_in` than the request needs
    Underspend(i128),
}

#[contracttype]
enum MockKey {
    FeeTier,
    Behavior,
    LastRequest,
}

/// Single pool router with scripted pricing
#[contract]
pub struct MockRouter;

#[contractimpl]
impl MockRouter {
    pub fn configure(e: Env, fee_tier: u32, behavior: Behavior) {
        e.storage().instance().set(&MockKey::FeeTier, &fee_tier);
        e.storage().instance().set(&MockKey::Behavior, &behavior);
    }

    pub fn last_request(e: Env) -> Option<SwapRequest> {
        e.storage().instance().get(&MockKey::LastRequest)
    }

    pub fn exact_input(e: Env, sender: Address, request: SwapRequest) -> Result<i128, SwapRouterError> {
        let behavior = Self::accept(&e, &request, SwapMode::ExactInput)?;
        match behavior {
            Behavior::Fill(amount_out) => {
                if amount_out < request.amount_limit {
                    return Err(SwapRouterError::SlippageExceeded);
                }
                pull(&e, &request.token_in, &sender, request.amount_specified);
                pay(&e, &request, amount_out);
                Ok(amount_out)
            }
            Behavior::Overdraw(extra) => {
                pull(&e, &request.token_in, &sender, request.amount_specified + extra);
                Ok(0)
            }
            Behavior::Misreport(reported) => {
                pull(&e, &request.token_in, &sender, request.amount_specified);
                Ok(reported)
            }
            Behavior::Underspend(short) => {
                pull(&e, &request.token_in, &sender, request.amount_specified - short);
                pay(&e, &request, 1);
                Ok(1)
            }
            Behavior::Fail(code) => Err(failure(code)),
        }
    }

    pub fn exact_output(e: Env, sender: Address, request: SwapRequest) -> Result<i128, SwapRouterError> {
        let behavior = Self::accept(&e, &request, SwapMode::ExactOutput)?;
        match behavior {
            Behavior::Fill(amount_in) => {
                if amount_in > request.amount_limit {
                    return Err(SwapRouterError::ExcessiveInputRequired);
                }
                pull(&e, &request.token_in, &sender, amount_in);
                pay(&e, &request, request.amount_specified);
                Ok(amount_in)
            }
            Behavior::Overdraw(extra) => {
                pull(&e, &request.token_in, &sender, request.amount_limit + extra);
                pay(&e, &request, request.amount_specified);
                Ok(request.amount_limit)
            }
            Behavior::Misreport(reported) => {
                pull(&e, &request.token_in, &sender, request.amount_limit);
                pay(&e, &request, request.amount_specified);
                Ok(reported)
            }
            Behavior::Underspend(short) => {
                pull(&e, &request.token_in, &sender, request.amount_limit - short);
                pay(&e, &request, request.amount_specified);
                Ok(request.amount_limit)
            }
            Behavior::Fail(code) => Err(failure(code)),
        }
    }
}

impl MockRouter {
    fn accept(e: &Env, request: &SwapRequest, mode: SwapMode) -> Result<Behavior, SwapRouterError> {
        assert_eq!(request.mode, mode);

        if e.ledger().timestamp() > request.deadline {
            return Err(SwapRouterError::DeadlineExpired);
        }
        let fee_tier: u32 = e.storage().instance().get(&MockKey::FeeTier).unwrap();
        if request.fee_tier != fee_tier {
            return Err(SwapRouterError::PoolNotFound);
        }

        e.storage().instance().set(&MockKey::LastRequest, request);
        Ok(e.storage().instance().get(&MockKey::Behavior).unwrap())
    }
}

fn failure(code: u32) -> SwapRouterError {
    match code {
        1 => SwapRouterError::SlippageExceeded,
        2 => SwapRouterError::ExcessiveInputRequired,
        3 => SwapRouterError::DeadlineExpired,
        4 => SwapRouterError::PoolNotFound,
        _ => panic!("unknown router failure"),
    }
}

fn pull(e: &Env, token: &Address, from: &Address, amount: i128) {
    let router = e.current_contract_address();
    token::Client::new(e, token).transfer_from(&router, from, &router, &amount);
}

fn pay(e: &Env, request: &SwapRequest, amount: i128) {
    token::Client::new(e, &request.token_out).transfer(
        &e.current_contract_address(),
        &request.recipient,
        &amount,
    );
}
