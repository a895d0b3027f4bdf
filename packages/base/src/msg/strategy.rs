//! Interface every strategy exposes to the vault.

use cosmwasm_schema::{cw_serde, QueryResponses};
use ovault_macros::{strategy, strategy_query};

#[strategy_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {}

#[strategy]
#[cw_serde]
pub enum ExecuteMsg {}
