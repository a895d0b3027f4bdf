use cosmwasm_std::{
    coin, from_json,
    testing::{mock_dependencies, mock_env, mock_info},
    BankMsg, CosmosMsg, Decimal, Uint128,
};
use ovault_base::{
    error::curve_pool::ContractError,
    msg::curve_pool::{ExecuteMsg, InstantiateMsg, QueryMsg},
    state::curve_pool::PoolCoin,
};

use crate::contract;

const E18: u128 = 1_000_000_000_000_000_000;

fn instantiate_pool(deps: cosmwasm_std::DepsMut) {
    contract::instantiate(
        deps,
        mock_env(),
        mock_info("deployer", &[]),
        InstantiateMsg {
            coins: vec![
                PoolCoin {
                    denom: "udai".to_string(),
                    decimals: 18,
                },
                PoolCoin {
                    denom: "uusdc".to_string(),
                    decimals: 6,
                },
                PoolCoin {
                    denom: "uusdt".to_string(),
                    decimals: 6,
                },
            ],
            lp_denom: "u3crv".to_string(),
            virtual_price: None,
        },
    )
    .unwrap();
}

#[test]
fn add_liquidity_mints_normalized_lp() {
    let mut deps = mock_dependencies();
    instantiate_pool(deps.as_mut());

    let response = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("strategy", &[coin(30_000_000_000, "uusdt")]),
        ExecuteMsg::AddLiquidity {
            min_mint_amount: Uint128::new(29_700 * E18),
        },
    )
    .unwrap();

    assert_eq!(
        response.messages[0].msg,
        CosmosMsg::Bank(BankMsg::Send {
            to_address: "strategy".to_string(),
            amount: vec![coin(30_000 * E18, "u3crv")],
        })
    );
    let supply: Uint128 = from_json(
        contract::query(deps.as_ref(), mock_env(), QueryMsg::TotalSupply {}).unwrap(),
    )
    .unwrap();
    assert_eq!(supply, Uint128::new(30_000 * E18));
}

#[test]
fn add_liquidity_below_minimum() {
    let mut deps = mock_dependencies();
    instantiate_pool(deps.as_mut());
    contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("anyone", &[]),
        ExecuteMsg::SetSlippage {
            slippage: Decimal::percent(50),
        },
    )
    .unwrap();

    let error = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("strategy", &[coin(29_000_000_000, "uusdt")]),
        ExecuteMsg::AddLiquidity {
            min_mint_amount: Uint128::new(28_710 * E18),
        },
    )
    .unwrap_err();
    assert_eq!(error, ContractError::SlippageExceeded {});
    assert_eq!(error.to_string(), "Slippage ruined your day");
}

#[test]
fn add_liquidity_unknown_coin() {
    let mut deps = mock_dependencies();
    instantiate_pool(deps.as_mut());

    let error = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("strategy", &[coin(1, "ucrv")]),
        ExecuteMsg::AddLiquidity {
            min_mint_amount: Uint128::zero(),
        },
    )
    .unwrap_err();
    assert_eq!(
        error,
        ContractError::UnknownCoin {
            denom: "ucrv".to_string()
        }
    );
}

#[test]
fn remove_liquidity_imbalance_refunds_unused_lp() {
    let mut deps = mock_dependencies();
    instantiate_pool(deps.as_mut());
    contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("strategy", &[coin(10_000_000_000, "uusdc")]),
        ExecuteMsg::AddLiquidity {
            min_mint_amount: Uint128::zero(),
        },
    )
    .unwrap();

    let response = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("strategy", &[coin(1_010 * E18, "u3crv")]),
        ExecuteMsg::RemoveLiquidityImbalance {
            amounts: vec![coin(1_000_000_000, "uusdc")],
            max_burn_amount: Uint128::new(1_010 * E18),
            recipient: Some("vault".to_string()),
        },
    )
    .unwrap();

    assert_eq!(
        response.messages[0].msg,
        CosmosMsg::Bank(BankMsg::Send {
            to_address: "vault".to_string(),
            amount: vec![coin(1_000_000_000, "uusdc")],
        })
    );
    assert_eq!(
        response.messages[1].msg,
        CosmosMsg::Bank(BankMsg::Send {
            to_address: "strategy".to_string(),
            amount: vec![coin(10 * E18, "u3crv")],
        })
    );
}

#[test]
fn remove_liquidity_imbalance_over_max_burn() {
    let mut deps = mock_dependencies();
    instantiate_pool(deps.as_mut());
    contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("anyone", &[]),
        ExecuteMsg::SetVirtualPrice {
            virtual_price: Decimal::percent(50),
        },
    )
    .unwrap();

    let error = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("strategy", &[coin(1_000 * E18, "u3crv")]),
        ExecuteMsg::RemoveLiquidityImbalance {
            amounts: vec![coin(1_000_000_000, "uusdc")],
            max_burn_amount: Uint128::new(1_000 * E18),
            recipient: None,
        },
    )
    .unwrap_err();
    assert_eq!(error, ContractError::SlippageExceeded {});
}

#[test]
fn remove_liquidity_pays_every_coin() {
    let mut deps = mock_dependencies();
    instantiate_pool(deps.as_mut());
    contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("strategy", &[coin(3_000 * E18, "udai")]),
        ExecuteMsg::AddLiquidity {
            min_mint_amount: Uint128::zero(),
        },
    )
    .unwrap();

    let response = contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("strategy", &[coin(3_000 * E18, "u3crv")]),
        ExecuteMsg::RemoveLiquidity { recipient: None },
    )
    .unwrap();
    assert_eq!(
        response.messages[0].msg,
        CosmosMsg::Bank(BankMsg::Send {
            to_address: "strategy".to_string(),
            amount: vec![
                coin(1_000 * E18, "udai"),
                coin(1_000_000_000, "uusdc"),
                coin(1_000_000_000, "uusdt"),
            ],
        })
    );
}

#[test]
fn calc_token_amount_rounds_withdrawals_up() {
    let mut deps = mock_dependencies();
    instantiate_pool(deps.as_mut());
    contract::execute(
        deps.as_mut(),
        mock_env(),
        mock_info("anyone", &[]),
        ExecuteMsg::SetVirtualPrice {
            virtual_price: Decimal::from_ratio(3u128, 1u128),
        },
    )
    .unwrap();

    let deposit: Uint128 = from_json(
        contract::query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::CalcTokenAmount {
                amounts: vec![coin(1, "udai")],
                is_deposit: true,
            },
        )
        .unwrap(),
    )
    .unwrap();
    let withdraw: Uint128 = from_json(
        contract::query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::CalcTokenAmount {
                amounts: vec![coin(1, "udai")],
                is_deposit: false,
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(deposit, Uint128::zero());
    assert_eq!(withdraw, Uint128::one());
}
