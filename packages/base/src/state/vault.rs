use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub stable_token: Addr,
    pub strategist: Option<Addr>,
    pub swap_router: Option<Addr>,
}

#[cw_serde]
pub struct SupportedAsset {
    pub denom: String,
    pub decimals: u8,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// Ordered; redeem outputs are index-aligned with it.
pub const ASSETS: Item<Vec<SupportedAsset>> = Item::new("assets");
pub const STRATEGIES: Item<Vec<Addr>> = Item::new("strategies");
pub const ASSET_DEFAULT_STRATEGY: Map<&str, Addr> = Map::new("asset_default_strategy");
/// Reward denoms liquidated by the swap step of a harvest.
pub const SWAP_TOKENS: Item<Vec<String>> = Item::new("swap_tokens");
