use crate::state::curve_pool::PoolCoin;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Decimal, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub coins: Vec<PoolCoin>,
    pub lp_denom: String,
    pub virtual_price: Option<Decimal>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposits the attached pool coins; mints LP to the sender.
    AddLiquidity { min_mint_amount: Uint128 },
    /// Burns at most `max_burn_amount` of the attached LP for exactly `amounts`;
    /// unused LP is refunded.
    RemoveLiquidityImbalance {
        amounts: Vec<Coin>,
        max_burn_amount: Uint128,
        recipient: Option<String>,
    },
    /// Burns all attached LP for a proportional share of every pool coin.
    RemoveLiquidity { recipient: Option<String> },
    SetSlippage { slippage: Decimal },
    SetVirtualPrice { virtual_price: Decimal },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::curve_pool::Config)]
    Config {},
    #[returns(Decimal)]
    VirtualPrice {},
    #[returns(Uint128)]
    CalcTokenAmount { amounts: Vec<Coin>, is_deposit: bool },
    #[returns(Uint128)]
    TotalSupply {},
}
