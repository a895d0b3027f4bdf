use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};

use crate::msg::token::{BalanceResponse, ExecuteMsg as TokenExecuteMsg, QueryMsg as TokenQueryMsg};

/// Any token a contract can hold: a bank denom or a ledger token contract.
#[cw_serde]
pub enum AssetInfo {
    Native { denom: String },
    Token { contract_addr: String },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::Native {
            denom: denom.into(),
        }
    }

    pub fn token(contract_addr: impl Into<String>) -> Self {
        AssetInfo::Token {
            contract_addr: contract_addr.into(),
        }
    }

    /// True for the empty denom / contract address.
    pub fn is_empty(&self) -> bool {
        match self {
            AssetInfo::Native { denom } => denom.trim().is_empty(),
            AssetInfo::Token { contract_addr } => contract_addr.trim().is_empty(),
        }
    }

    pub fn query_balance(
        &self,
        querier: &QuerierWrapper,
        address: impl Into<String>,
    ) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => Ok(querier.query_balance(address, denom)?.amount),
            AssetInfo::Token { contract_addr } => {
                let response: BalanceResponse = querier.query_wasm_smart(
                    contract_addr,
                    &TokenQueryMsg::Balance {
                        address: address.into(),
                    },
                )?;
                Ok(response.balance)
            }
        }
    }

    pub fn transfer_msg(&self, amount: Uint128, recipient: impl Into<String>) -> StdResult<CosmosMsg> {
        Ok(match self {
            AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.into(),
                amount: vec![Coin::new(amount.u128(), denom)],
            }),
            AssetInfo::Token { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&TokenExecuteMsg::Transfer {
                    recipient: recipient.into(),
                    amount,
                })?,
                funds: vec![],
            }),
        })
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "{}", denom),
            AssetInfo::Token { contract_addr } => write!(f, "{}", contract_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;

    #[test]
    fn empty_assets() {
        assert!(AssetInfo::native("").is_empty());
        assert!(AssetInfo::token("  ").is_empty());
        assert!(!AssetInfo::native("ucrv").is_empty());
    }

    #[test]
    fn transfer_messages() {
        assert_eq!(
            AssetInfo::native("ucrv")
                .transfer_msg(Uint128::new(5), "governor")
                .unwrap(),
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "governor".to_string(),
                amount: vec![Coin::new(5u128, "ucrv")],
            })
        );
        match AssetInfo::token("stable_token")
            .transfer_msg(Uint128::new(8), "governor")
            .unwrap()
        {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr, msg, ..
            }) => {
                assert_eq!(contract_addr, "stable_token");
                assert_eq!(
                    from_json::<TokenExecuteMsg>(&msg).unwrap(),
                    TokenExecuteMsg::Transfer {
                        recipient: "governor".to_string(),
                        amount: Uint128::new(8),
                    }
                );
            }
            other => panic!("unexpected message {:?}", other),
        }
    }
}
