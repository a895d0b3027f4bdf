use crate::state::swap_router::SwapRoute;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub routes: Vec<SwapRoute>,
}

#[cw_serde]
pub enum ExecuteMsg {
    SetRoutes { routes: Vec<SwapRoute> },
    /// Swaps the single attached coin along its route.
    Swap {
        minimum_receive: Option<Uint128>,
        to: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Option<SwapRoute>)]
    Route { from_denom: String },
    #[returns(Coin)]
    SimulateSwap { offer: Coin },
}
