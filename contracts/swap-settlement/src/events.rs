use soroban_sdk::{contractevent, log, Address, Env};

use crate::types::SwapConfig;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExactInputSettled {
    #[topic]
    pub caller: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: i128,
    pub amount_out: i128,
}

/// `refund` is the unspent part of `amount_in_maximum` sent back to the caller
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExactOutputSettled {
    #[topic]
    pub caller: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: i128,
    pub amount_out: i128,
    pub refund: i128,
}

pub fn emit_exact_input_settled(
    e: &Env,
    caller: &Address,
    config: &SwapConfig,
    amount_in: i128,
    amount_out: i128,
) {
    log!(e, "exact input settled", amount_in, amount_out);
    ExactInputSettled {
        caller: caller.clone(),
        token_in: config.token_in.clone(),
        token_out: config.token_out.clone(),
        amount_in,
        amount_out,
    }
    .publish(e);
}

pub fn emit_exact_output_settled(
    e: &Env,
    caller: &Address,
    config: &SwapConfig,
    amount_in: i128,
    amount_out: i128,
    refund: i128,
) {
    log!(e, "exact output settled", amount_in, amount_out, refund);
    ExactOutputSettled {
        caller: caller.clone(),
        token_in: config.token_in.clone(),
        token_out: config.token_out.clone(),
        amount_in,
        amount_out,
        refund,
    }
    .publish(e);
}
