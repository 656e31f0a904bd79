use soroban_sdk::{contracttype, Address, Env};

use crate::error::SettlementError;
use crate::types::SwapConfig;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    SwapRouter,
    DefaultConfig,
}

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn set_swap_router_address(e: &Env, router: Address) {
    e.storage().instance().set(&DataKey::SwapRouter, &router);
}

pub fn get_swap_router_address(e: &Env) -> Result<Address, SettlementError> {
    e.storage()
        .instance()
        .get(&DataKey::SwapRouter)
        .ok_or(SettlementError::NotInitialized)
}

pub fn set_default_config(e: &Env, config: SwapConfig) {
    e.storage().instance().set(&DataKey::DefaultConfig, &config);
}

pub fn get_default_config(e: &Env) -> Result<SwapConfig, SettlementError> {
    e.storage()
        .instance()
        .get(&DataKey::DefaultConfig)
        .ok_or(SettlementError::NotInitialized)
}
