use cosmwasm_std::{
    attr, from_json,
    testing::{mock_dependencies, mock_env, mock_info},
    Event, Uint128,
};
use ovault_base::{
    error::token::ContractError,
    msg::token::{BalanceResponse, ExecuteMsg, InstantiateMsg, QueryMsg, TokenInfoResponse},
};

use crate::contract;

fn instantiate_token(deps: cosmwasm_std::DepsMut) {
    contract::instantiate(
        deps,
        mock_env(),
        mock_info("admin", &[]),
        InstantiateMsg {
            vault: "vault".to_string(),
            name: "Vault Dollar".to_string(),
            symbol: "VUSD".to_string(),
            decimals: 18,
        },
    )
    .unwrap();
}

fn balance_of(deps: cosmwasm_std::Deps, address: &str) -> Uint128 {
    let response: BalanceResponse = from_json(
        contract::query(
            deps,
            mock_env(),
            QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap(),
    )
    .unwrap();
    response.balance
}

fn total_supply(deps: cosmwasm_std::Deps) -> Uint128 {
    let response: TokenInfoResponse =
        from_json(contract::query(deps, mock_env(), QueryMsg::TokenInfo {}).unwrap()).unwrap();
    response.total_supply
}

#[test]
fn instantiate() {
    let mut deps = mock_dependencies();
    let response = contract::instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info("admin", &[]),
        InstantiateMsg {
            vault: "vault".to_string(),
            name: "Vault Dollar".to_string(),
            symbol: "VUSD".to_string(),
            decimals: 18,
        },
    )
    .unwrap();

    assert_eq!(
        response.events,
        vec![
            Event::new("crates.io:ovault__ovault-token-instantiate").add_attributes([
                attr("vault", "vault"),
                attr("name", "Vault Dollar"),
                attr("symbol", "VUSD"),
                attr("decimals", "18"),
            ])
        ]
    );
    assert_eq!(total_supply(deps.as_ref()), Uint128::zero());
}

#[test]
fn mint_by_vault() {
    let mut deps = mock_dependencies();
    instantiate_token(deps.as_mut());

    let response = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("vault", &[]),
        ExecuteMsg::Mint {
            amount: Uint128::new(220),
            receiver: "anna".to_string(),
        },
    )
    .unwrap();

    assert_eq!(
        response.events,
        vec![
            Event::new("crates.io:ovault__ovault-token-execute-mint").add_attributes([
                attr("amount", "220VUSD"),
                attr("receiver", "anna"),
            ])
        ]
    );
    assert_eq!(balance_of(deps.as_ref(), "anna"), Uint128::new(220));
    assert_eq!(total_supply(deps.as_ref()), Uint128::new(220));
}

#[test]
fn mint_stranger() {
    let mut deps = mock_dependencies();
    instantiate_token(deps.as_mut());

    let error = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("stranger", &[]),
        ExecuteMsg::Mint {
            amount: Uint128::new(220),
            receiver: "anna".to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(error, ContractError::Unauthorized);
}

#[test]
fn mint_zero() {
    let mut deps = mock_dependencies();
    instantiate_token(deps.as_mut());

    let error = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("vault", &[]),
        ExecuteMsg::Mint {
            amount: Uint128::zero(),
            receiver: "anna".to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(error, ContractError::NothingToMint);
}

#[test]
fn burn_from_owner() {
    let mut deps = mock_dependencies();
    instantiate_token(deps.as_mut());
    contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("vault", &[]),
        ExecuteMsg::Mint {
            amount: Uint128::new(300),
            receiver: "anna".to_string(),
        },
    )
    .unwrap();

    contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("vault", &[]),
        ExecuteMsg::Burn {
            owner: "anna".to_string(),
            amount: Uint128::new(200),
        },
    )
    .unwrap();
    assert_eq!(balance_of(deps.as_ref(), "anna"), Uint128::new(100));
    assert_eq!(total_supply(deps.as_ref()), Uint128::new(100));

    let error = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("vault", &[]),
        ExecuteMsg::Burn {
            owner: "anna".to_string(),
            amount: Uint128::new(101),
        },
    )
    .unwrap_err();
    assert_eq!(
        error,
        ContractError::InsufficientBalance {
            balance: Uint128::new(100),
            amount: Uint128::new(101),
        }
    );

    let error = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("anna", &[]),
        ExecuteMsg::Burn {
            owner: "anna".to_string(),
            amount: Uint128::new(1),
        },
    )
    .unwrap_err();
    assert_eq!(error, ContractError::Unauthorized);
}

#[test]
fn transfer_between_holders() {
    let mut deps = mock_dependencies();
    instantiate_token(deps.as_mut());
    contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("vault", &[]),
        ExecuteMsg::Mint {
            amount: Uint128::new(8),
            receiver: "anna".to_string(),
        },
    )
    .unwrap();

    contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("anna", &[]),
        ExecuteMsg::Transfer {
            recipient: "strategy".to_string(),
            amount: Uint128::new(8),
        },
    )
    .unwrap();
    assert_eq!(balance_of(deps.as_ref(), "anna"), Uint128::zero());
    assert_eq!(balance_of(deps.as_ref(), "strategy"), Uint128::new(8));
    assert_eq!(total_supply(deps.as_ref()), Uint128::new(8));

    let error = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("anna", &[]),
        ExecuteMsg::Transfer {
            recipient: "strategy".to_string(),
            amount: Uint128::new(1),
        },
    )
    .unwrap_err();
    assert_eq!(
        error,
        ContractError::InsufficientBalance {
            balance: Uint128::zero(),
            amount: Uint128::new(1),
        }
    );
}

#[test]
fn test_migrate_wrong_contract() {
    let mut deps = mock_dependencies();

    cw2::set_contract_version(deps.as_mut().storage, "wrong_contract_name", "0.0.1").unwrap();

    let res = contract::migrate(
        deps.as_mut(),
        mock_env(),
        ovault_base::msg::token::MigrateMsg {},
    )
    .unwrap_err();
    assert_eq!(
        res,
        ContractError::MigrationError {
            storage_contract_name: "wrong_contract_name".to_string(),
            contract_name: contract::CONTRACT_NAME.to_string()
        }
    )
}
