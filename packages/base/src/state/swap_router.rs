use cosmwasm_schema::cw_serde;
use cw_storage_plus::Map;

#[cw_serde]
pub struct SwapRoute {
    pub from_denom: String,
    pub to_denom: String,
    pub from_decimals: u8,
    pub to_decimals: u8,
}

/// Keyed by `from_denom`.
pub const ROUTES: Map<&str, SwapRoute> = Map::new("routes");
