use soroban_sdk::contracterror;

use crate::router::SwapRouterError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SettlementError {
    /// Swap amounts must be strictly positive
    AmountNotPositive = 1,
    /// Caller has not approved this contract for enough `token_in`
    InsufficientAllowance = 2,
    /// Caller balance does not cover the amount to pull
    TransferFailed = 3,
    /// Token contract rejected the router allowance
    ApprovalFailed = 4,
    /// Router could not deliver the minimum output
    SlippageExceeded = 5,
    /// Router needs more input than the caller allowed
    ExcessiveInputRequired = 6,
    /// Router saw the request after its deadline
    DeadlineExpired = 7,
    /// No pool for the token pair and fee tier
    PoolNotFound = 8,
    /// Router failed outside of its documented errors
    RouterFailed = 9,
    /// Router or default config missing from storage
    NotInitialized = 10,
}

impl From<SwapRouterError> for SettlementError {
    fn from(err: SwapRouterError) -> Self {
        match err {
            SwapRouterError::SlippageExceeded => SettlementError::SlippageExceeded,
            SwapRouterError::ExcessiveInputRequired => SettlementError::ExcessiveInputRequired,
            SwapRouterError::DeadlineExpired => SettlementError::DeadlineExpired,
            SwapRouterError::PoolNotFound => SettlementError::PoolNotFound,
        }
    }
}
