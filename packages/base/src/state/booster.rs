use cosmwasm_std::{Addr, Coin, Uint128};
use cw_storage_plus::{Item, Map};

/// LP denom accepted by each pool id.
pub const POOLS: Map<u64, String> = Map::new("pools");
/// Paid to whoever claims, per claim.
pub const REWARDS_PER_CLAIM: Item<Vec<Coin>> = Item::new("rewards_per_claim");
pub const STAKED: Map<(u64, &Addr), Uint128> = Map::new("staked");
