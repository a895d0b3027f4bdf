use crate::state::vault::SupportedAsset;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};
use cw_ownable::{cw_ownable_execute, cw_ownable_query};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub stable_token: String,
    pub strategist: Option<String>,
    pub swap_router: Option<String>,
    pub assets: Vec<SupportedAsset>,
}

/// Which strategies to harvest and whether the collected rewards are swapped.
#[cw_serde]
pub enum HarvestRequest {
    All {},
    One { strategy: String },
    AllAndSwap {},
    OneAndSwap { strategy: String },
}

impl HarvestRequest {
    pub fn strategy(&self) -> Option<&str> {
        match self {
            HarvestRequest::One { strategy } | HarvestRequest::OneAndSwap { strategy } => {
                Some(strategy)
            }
            HarvestRequest::All {} | HarvestRequest::AllAndSwap {} => None,
        }
    }

    pub fn swaps(&self) -> bool {
        matches!(
            self,
            HarvestRequest::AllAndSwap {} | HarvestRequest::OneAndSwap { .. }
        )
    }
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Mints stable tokens for the single attached supported coin.
    Mint { min_minted: Uint128 },
    Redeem {
        amount: Uint128,
        min_output: Option<Uint128>,
    },
    RedeemAll { min_output: Option<Uint128> },
    Harvest { request: HarvestRequest },
    /// Self-call queued after a harvest that swaps.
    SwapHarvestedRewards { strategies: Vec<String> },
    SupportAsset { denom: String, decimals: u8 },
    ApproveStrategy { strategy: String },
    RemoveStrategy { strategy: String },
    SetAssetDefaultStrategy {
        denom: String,
        strategy: Option<String>,
    },
    SetStrategist { strategist: Option<String> },
    SetSwapRouter { swap_router: Option<String> },
    AddSwapToken { denom: String },
    RemoveSwapToken { denom: String },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::vault::Config)]
    Config {},
    #[returns(Vec<SupportedAsset>)]
    AllAssets {},
    #[returns(Vec<String>)]
    AllStrategies {},
    #[returns(Option<String>)]
    AssetDefaultStrategy { denom: String },
    /// Index-aligned with `AllAssets`.
    #[returns(Vec<Coin>)]
    CalculateRedeemOutputs { amount: Uint128 },
    /// Sum of all holdings, 18 decimals.
    #[returns(Uint128)]
    TotalValue {},
    #[returns(Uint128)]
    CheckBalance { denom: String },
    #[returns(Vec<String>)]
    SwapTokens {},
}

#[cw_serde]
pub struct MigrateMsg {}
