use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub pools: Vec<(u64, String)>,
    pub rewards_per_claim: Vec<Coin>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Stakes the attached LP of `pool_id`.
    Deposit { pool_id: u64 },
    Withdraw { pool_id: u64, amount: Uint128 },
    ClaimRewards { pool_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Uint128)]
    Staked { pool_id: u64, address: String },
    #[returns(Vec<Coin>)]
    RewardsPerClaim {},
}
