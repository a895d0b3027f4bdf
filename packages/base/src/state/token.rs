use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub vault: Addr,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
