use cosmwasm_std::{
    attr, ensure, entry_point, to_json_binary, Attribute, BankMsg, Binary, Coin, CosmosMsg,
    Decimal, Deps, DepsMut, Env, MessageInfo, Response, Uint128,
};
use cw_utils::{must_pay, PaymentError};
use ovault_base::{
    error::curve_pool::{ContractError, ContractResult},
    msg::curve_pool::{ExecuteMsg, InstantiateMsg, QueryMsg},
    state::curve_pool::{Config, CONFIG, LP_TOTAL_SUPPLY},
};
use ovault_helpers::{
    answer::{attr_coin, response},
    decimals::{denormalize, normalize},
};

pub const CONTRACT_NAME: &str = concat!("crates.io:ovault__", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// LP is paid out of a balance the pool is funded with at genesis and
// returns there on burn.

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let virtual_price = msg.virtual_price.unwrap_or(Decimal::one());
    ensure!(!virtual_price.is_zero(), ContractError::ZeroVirtualPrice {});

    CONFIG.save(
        deps.storage,
        &Config {
            coins: msg.coins.clone(),
            lp_denom: msg.lp_denom.clone(),
            virtual_price,
            slippage: Decimal::zero(),
        },
    )?;
    LP_TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;

    let coins = msg
        .coins
        .iter()
        .map(|coin| coin.denom.clone())
        .collect::<Vec<_>>()
        .join(",");
    Ok(response(
        "instantiate",
        CONTRACT_NAME,
        [
            attr("coins", coins),
            attr("lp_denom", msg.lp_denom),
            attr("virtual_price", virtual_price.to_string()),
        ],
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::AddLiquidity { min_mint_amount } => {
            execute_add_liquidity(deps, info, min_mint_amount)
        }
        ExecuteMsg::RemoveLiquidityImbalance {
            amounts,
            max_burn_amount,
            recipient,
        } => execute_remove_liquidity_imbalance(deps, info, amounts, max_burn_amount, recipient),
        ExecuteMsg::RemoveLiquidity { recipient } => {
            execute_remove_liquidity(deps, info, recipient)
        }
        // test knobs, unguarded
        ExecuteMsg::SetSlippage { slippage } => {
            ensure!(
                slippage <= Decimal::one(),
                ContractError::Std(cosmwasm_std::StdError::generic_err(
                    "Slippage must not exceed 100%"
                ))
            );
            CONFIG.update(deps.storage, |mut config| -> ContractResult<_> {
                config.slippage = slippage;
                Ok(config)
            })?;
            Ok(response(
                "set_slippage",
                CONTRACT_NAME,
                [attr("slippage", slippage.to_string())],
            ))
        }
        ExecuteMsg::SetVirtualPrice { virtual_price } => {
            ensure!(!virtual_price.is_zero(), ContractError::ZeroVirtualPrice {});
            CONFIG.update(deps.storage, |mut config| -> ContractResult<_> {
                config.virtual_price = virtual_price;
                Ok(config)
            })?;
            Ok(response(
                "set_virtual_price",
                CONTRACT_NAME,
                [attr("virtual_price", virtual_price.to_string())],
            ))
        }
    }
}

fn execute_add_liquidity(
    deps: DepsMut,
    info: MessageInfo,
    min_mint_amount: Uint128,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure!(
        !info.funds.is_empty(),
        ContractError::PaymentError(PaymentError::NoFunds {})
    );

    let value = coins_value(&config, &info.funds)?;
    let quoted = lp_for_value(value, config.virtual_price);
    let minted = quoted * (Decimal::one() - config.slippage);
    ensure!(minted >= min_mint_amount, ContractError::SlippageExceeded {});

    LP_TOTAL_SUPPLY.update(deps.storage, |supply| -> ContractResult<_> {
        Ok(supply.checked_add(minted)?)
    })?;

    let mut attrs: Vec<Attribute> = info
        .funds
        .iter()
        .map(|coin| attr_coin("deposit", coin.amount, &coin.denom))
        .collect();
    attrs.push(attr_coin("minted", minted, &config.lp_denom));

    Ok(
        response("add_liquidity", CONTRACT_NAME, attrs).add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin::new(minted.u128(), config.lp_denom)],
        }),
    )
}

fn execute_remove_liquidity_imbalance(
    deps: DepsMut,
    info: MessageInfo,
    amounts: Vec<Coin>,
    max_burn_amount: Uint128,
    recipient: Option<String>,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let sent = must_pay(&info, &config.lp_denom)?;
    let recipient = match recipient {
        Some(recipient) => deps.api.addr_validate(&recipient)?,
        None => info.sender.clone(),
    };

    let value = coins_value(&config, &amounts)?;
    ensure!(!value.is_zero(), ContractError::NothingToWithdraw {});
    let burned = lp_for_value_ceil(value, config.virtual_price);
    ensure!(
        burned <= max_burn_amount && burned <= sent,
        ContractError::SlippageExceeded {}
    );

    LP_TOTAL_SUPPLY.update(deps.storage, |supply| -> ContractResult<_> {
        Ok(supply.checked_sub(burned)?)
    })?;

    let mut messages: Vec<CosmosMsg> = vec![];
    let payout = amounts
        .into_iter()
        .filter(|coin| !coin.amount.is_zero())
        .collect::<Vec<_>>();
    let mut attrs: Vec<Attribute> = payout
        .iter()
        .map(|coin| attr_coin("withdraw", coin.amount, &coin.denom))
        .collect();
    attrs.push(attr_coin("burned", burned, &config.lp_denom));
    messages.push(CosmosMsg::Bank(BankMsg::Send {
        to_address: recipient.to_string(),
        amount: payout,
    }));

    let refund = sent - burned;
    if !refund.is_zero() {
        attrs.push(attr_coin("refund", refund, &config.lp_denom));
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin::new(refund.u128(), config.lp_denom)],
        }));
    }

    Ok(response("remove_liquidity_imbalance", CONTRACT_NAME, attrs).add_messages(messages))
}

fn execute_remove_liquidity(
    deps: DepsMut,
    info: MessageInfo,
    recipient: Option<String>,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let burned = must_pay(&info, &config.lp_denom)?;
    let recipient = match recipient {
        Some(recipient) => deps.api.addr_validate(&recipient)?,
        None => info.sender.clone(),
    };

    let payout = balanced_payout(&config, burned)?;
    ensure!(!payout.is_empty(), ContractError::NothingToWithdraw {});

    LP_TOTAL_SUPPLY.update(deps.storage, |supply| -> ContractResult<_> {
        Ok(supply.checked_sub(burned)?)
    })?;

    let mut attrs: Vec<Attribute> = payout
        .iter()
        .map(|coin| attr_coin("withdraw", coin.amount, &coin.denom))
        .collect();
    attrs.push(attr_coin("burned", burned, &config.lp_denom));

    Ok(
        response("remove_liquidity", CONTRACT_NAME, attrs).add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: payout,
        }),
    )
}

/// Sum of `coins` in 18-decimal units.
fn coins_value(config: &Config, coins: &[Coin]) -> ContractResult<Uint128> {
    coins.iter().try_fold(Uint128::zero(), |acc, coin| {
        let pool_coin = config
            .coin(&coin.denom)
            .ok_or_else(|| ContractError::UnknownCoin {
                denom: coin.denom.clone(),
            })?;
        Ok(acc.checked_add(normalize(coin.amount, pool_coin.decimals)?)?)
    })
}

fn lp_for_value(value: Uint128, virtual_price: Decimal) -> Uint128 {
    value.multiply_ratio(Decimal::one().atomics(), virtual_price.atomics())
}

fn lp_for_value_ceil(value: Uint128, virtual_price: Decimal) -> Uint128 {
    let lp = lp_for_value(value, virtual_price);
    if lp * virtual_price < value {
        lp + Uint128::one()
    } else {
        lp
    }
}

/// Equal value of every pool coin for `lp` tokens.
fn balanced_payout(config: &Config, lp: Uint128) -> ContractResult<Vec<Coin>> {
    let share = (lp * config.virtual_price)
        .checked_div(Uint128::from(config.coins.len() as u128))
        .map_err(cosmwasm_std::StdError::from)?;
    let mut payout = vec![];
    for coin in &config.coins {
        let amount = denormalize(share, coin.decimals)?;
        if !amount.is_zero() {
            payout.push(Coin::new(amount.u128(), coin.denom.clone()));
        }
    }
    Ok(payout)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    Ok(match msg {
        QueryMsg::Config {} => to_json_binary(&config)?,
        QueryMsg::VirtualPrice {} => to_json_binary(&config.virtual_price)?,
        QueryMsg::CalcTokenAmount {
            amounts,
            is_deposit,
        } => {
            let value = coins_value(&config, &amounts)?;
            let lp = if is_deposit {
                lp_for_value(value, config.virtual_price)
            } else {
                lp_for_value_ceil(value, config.virtual_price)
            };
            to_json_binary(&lp)?
        }
        QueryMsg::TotalSupply {} => to_json_binary(&LP_TOTAL_SUPPLY.load(deps.storage)?)?,
    })
}
