use soroban_sdk::{contracttype, Address};

/// Which side of the swap the caller fixes
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapMode {
    ExactInput,
    ExactOutput,
}

/// Pair, pool and price bound used for one settlement
///
/// The contract stores one of these at construction as its default; the
/// `*_with` entry points take their own per call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapConfig {
    /// Token the caller pays with
    pub token_in: Address,
    /// Token the caller receives
    pub token_out: Address,
    /// Pool fee tier, in hundredths of a basis point (3000 = 0.3%)
    pub fee_tier: u32,
    /// Price bound forwarded to the router, 0 = no bound
    pub price_limit: u128,
}

/// Request handed to the router, built fresh for every settlement
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapRequest {
    pub mode: SwapMode,
    pub token_in: Address,
    pub token_out: Address,
    pub fee_tier: u32,
    /// Receives the output tokens directly from the router
    pub recipient: Address,
    /// Ledger timestamp after which the router must refuse the request
    pub deadline: u64,
    /// `amount_in` for exact input, `amount_out` for exact output
    pub amount_specified: i128,
    /// Minimum output for exact input, maximum input for exact output
    pub amount_limit: i128,
    pub price_limit: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    pub amount_in: i128,
    pub amount_out: i128,
}
