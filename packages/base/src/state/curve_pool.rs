use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};
use cw_storage_plus::Item;

#[cw_serde]
pub struct PoolCoin {
    pub denom: String,
    pub decimals: u8,
}

#[cw_serde]
pub struct Config {
    /// Pool coins in pool index order.
    pub coins: Vec<PoolCoin>,
    pub lp_denom: String,
    /// Value of one LP token in 18-decimal units.
    pub virtual_price: Decimal,
    /// Share of freshly minted LP withheld on deposit. Quotes ignore it.
    pub slippage: Decimal,
}

impl Config {
    pub fn coin(&self, denom: &str) -> Option<&PoolCoin> {
        self.coins.iter().find(|coin| coin.denom == denom)
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const LP_TOTAL_SUPPLY: Item<Uint128> = Item::new("lp_total_supply");
