use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Uint128};
use cw_storage_plus::Item;
use optfield::optfield;

#[optfield(pub ConfigOptional, attrs)]
#[cw_serde]
pub struct Config {
    pub vault: Addr,
    pub curve_pool: Addr,
    pub booster: Addr,
    pub pool_id: u64,
    pub lp_denom: String,
    /// Tolerated loss against the pool's virtual price on deposit and withdrawal.
    pub max_slippage: Decimal,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// Denoms the strategy deploys, a subset of the pool coins.
pub const ASSETS: Item<Vec<String>> = Item::new("assets");
pub const REWARD_TOKENS: Item<Vec<String>> = Item::new("reward_tokens");
/// Index-aligned with `REWARD_TOKENS`.
pub const REWARD_LIQUIDATION_LIMITS: Item<Vec<Uint128>> =
    Item::new("reward_liquidation_limits");
