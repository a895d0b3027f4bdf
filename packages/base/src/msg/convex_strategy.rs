use crate::asset::AssetInfo;
use crate::state::convex_strategy::ConfigOptional;
use cosmwasm_schema::{cw_serde, QueryResponses};
#[allow(unused_imports)]
use cosmwasm_std::{Decimal, Uint128};
use cw_ownable::{cw_ownable_execute, cw_ownable_query};
use ovault_macros::{strategy, strategy_query};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub vault: String,
    pub curve_pool: String,
    pub booster: String,
    pub pool_id: u64,
    pub lp_denom: String,
    pub assets: Vec<String>,
    pub reward_tokens: Vec<String>,
    pub max_slippage: Option<Decimal>,
}

#[strategy]
#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    UpdateConfig { new_config: ConfigOptional },
    /// Replaces the reward token list and zeroes every liquidation limit.
    SetRewardTokenAddresses { tokens: Vec<String> },
    SetRewardLiquidationLimits { limits: Vec<Uint128> },
    /// Sends a stray token balance to the governor.
    TransferToken { asset: AssetInfo, amount: Uint128 },
}

#[strategy_query]
#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::convex_strategy::Config)]
    Config {},
    #[returns(Vec<String>)]
    Assets {},
    #[returns(LpBalanceResponse)]
    LpBalance {},
}

#[cw_serde]
pub struct LpBalanceResponse {
    pub staked: Uint128,
    pub held: Uint128,
}

#[cw_serde]
pub struct MigrateMsg {}
