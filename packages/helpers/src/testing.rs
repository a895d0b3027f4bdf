#![cfg(not(target_arch = "wasm32"))]

use std::collections::HashMap;
use std::marker::PhantomData;

use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_json, Binary, Coin, ContractResult, Empty, OwnedDeps, Querier, QuerierResult,
    QueryRequest, StdResult, SystemError, SystemResult, WasmQuery,
};
use serde::de::DeserializeOwned;

type SmartHandler = Box<dyn Fn(&Binary) -> StdResult<Binary>>;

/// `MockQuerier` that also answers smart queries of mocked contracts, e.g. a
/// strategy's `CheckBalance` when unit-testing the vault.
pub struct ContractsMockQuerier {
    base: MockQuerier<Empty>,
    contracts: HashMap<String, SmartHandler>,
}

pub fn mock_dependencies(
    contract_balance: &[Coin],
) -> OwnedDeps<MockStorage, MockApi, ContractsMockQuerier, Empty> {
    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: ContractsMockQuerier::new(MockQuerier::new(&[(
            MOCK_CONTRACT_ADDR,
            contract_balance,
        )])),
        custom_query_type: PhantomData,
    }
}

impl ContractsMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        ContractsMockQuerier {
            base,
            contracts: HashMap::new(),
        }
    }

    pub fn update_balance(&mut self, address: &str, balance: Vec<Coin>) {
        self.base.update_balance(address, balance);
    }

    /// Replaces whatever answered smart queries to `contract` before.
    pub fn mock_contract<Q, F>(&mut self, contract: &str, handler: F)
    where
        Q: DeserializeOwned,
        F: 'static + Fn(Q) -> StdResult<Binary>,
    {
        self.contracts.insert(
            contract.to_string(),
            Box::new(move |msg| handler(from_json(msg)?)),
        );
    }
}

impl Querier for ContractsMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_json(bin_request) {
            Ok(request) => request,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {e}"),
                    request: bin_request.into(),
                })
            }
        };
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                match self.contracts.get(contract_addr) {
                    Some(handler) => SystemResult::Ok(ContractResult::from(handler(msg))),
                    None => SystemResult::Err(SystemError::NoSuchContract {
                        addr: contract_addr.clone(),
                    }),
                }
            }
            _ => self.base.handle_query(&request),
        }
    }
}
