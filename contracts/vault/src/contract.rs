use std::collections::HashMap;

use cosmwasm_std::{
    attr, ensure, ensure_eq, entry_point, to_json_binary, Addr, Attribute, BankMsg, Binary, Coin,
    CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw_utils::one_coin;
use ovault_base::{
    error::vault::{ContractError, ContractResult},
    msg::{
        strategy::{ExecuteMsg as StrategyExecuteMsg, QueryMsg as StrategyQueryMsg},
        swap_router::ExecuteMsg as SwapRouterExecuteMsg,
        token::{
            BalanceResponse, ExecuteMsg as TokenExecuteMsg, QueryMsg as TokenQueryMsg,
        },
        vault::{ExecuteMsg, HarvestRequest, InstantiateMsg, MigrateMsg, QueryMsg},
    },
    state::vault::{
        Config, SupportedAsset, ASSETS, ASSET_DEFAULT_STRATEGY, CONFIG, STRATEGIES, SWAP_TOKENS,
    },
};
use ovault_helpers::{
    answer::{attr_coin, response},
    decimals::normalize,
    governance::{assert_governor, assert_strategist_or_governor},
};

pub const CONTRACT_NAME: &str = concat!("crates.io:ovault__", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(msg.owner.as_str()))?;

    let config = Config {
        stable_token: deps.api.addr_validate(&msg.stable_token)?,
        strategist: msg
            .strategist
            .map(|strategist| deps.api.addr_validate(&strategist))
            .transpose()?,
        swap_router: msg
            .swap_router
            .map(|swap_router| deps.api.addr_validate(&swap_router))
            .transpose()?,
    };
    CONFIG.save(deps.storage, &config)?;

    let mut assets: Vec<SupportedAsset> = vec![];
    for asset in msg.assets {
        ensure!(
            !assets.iter().any(|known| known.denom == asset.denom),
            ContractError::AssetAlreadySupported { denom: asset.denom }
        );
        assets.push(asset);
    }
    ASSETS.save(deps.storage, &assets)?;
    STRATEGIES.save(deps.storage, &vec![])?;
    SWAP_TOKENS.save(deps.storage, &vec![])?;

    let mut attrs = vec![
        attr("owner", msg.owner),
        attr("stable_token", config.stable_token),
    ];
    if let Some(strategist) = config.strategist {
        attrs.push(attr("strategist", strategist));
    }
    if let Some(swap_router) = config.swap_router {
        attrs.push(attr("swap_router", swap_router));
    }
    attrs.extend(assets.iter().map(|asset| attr("asset", &asset.denom)));
    Ok(response("instantiate", CONTRACT_NAME, attrs))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    Ok(match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?)?,
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?)?,
        QueryMsg::AllAssets {} => to_json_binary(&ASSETS.load(deps.storage)?)?,
        QueryMsg::AllStrategies {} => {
            let strategies = STRATEGIES
                .load(deps.storage)?
                .into_iter()
                .map(|strategy| strategy.to_string())
                .collect::<Vec<_>>();
            to_json_binary(&strategies)?
        }
        QueryMsg::AssetDefaultStrategy { denom } => {
            let strategy = ASSET_DEFAULT_STRATEGY
                .may_load(deps.storage, &denom)?
                .map(|strategy| strategy.to_string());
            to_json_binary(&strategy)?
        }
        QueryMsg::CalculateRedeemOutputs { amount } => {
            to_json_binary(&calculate_redeem_outputs(deps, &env, amount)?)?
        }
        QueryMsg::TotalValue {} => to_json_binary(&total_value(deps, &env)?)?,
        QueryMsg::CheckBalance { denom } => {
            let asset = find_asset(deps, &denom)?;
            to_json_binary(&check_balance(deps, &env, &asset.denom)?)?
        }
        QueryMsg::SwapTokens {} => to_json_binary(&SWAP_TOKENS.load(deps.storage)?)?,
    })
}

fn find_asset(deps: Deps, denom: &str) -> ContractResult<SupportedAsset> {
    ASSETS
        .load(deps.storage)?
        .into_iter()
        .find(|asset| asset.denom == denom)
        .ok_or_else(|| ContractError::AssetNotSupported {
            denom: denom.to_string(),
        })
}

fn strategy_balance(deps: Deps, strategy: &Addr, denom: &str) -> ContractResult<Uint128> {
    Ok(deps.querier.query_wasm_smart(
        strategy,
        &StrategyQueryMsg::CheckBalance {
            denom: denom.to_string(),
        },
    )?)
}

/// Idle balance plus everything the strategies report, in `denom` units.
fn check_balance(deps: Deps, env: &Env, denom: &str) -> ContractResult<Uint128> {
    let mut balance = deps
        .querier
        .query_balance(&env.contract.address, denom)?
        .amount;
    for strategy in STRATEGIES.load(deps.storage)? {
        balance = balance.checked_add(strategy_balance(deps, &strategy, denom)?)?;
    }
    Ok(balance)
}

/// Asset balances, index-aligned with `ASSETS`, and their 18-decimal sum.
fn asset_balances(deps: Deps, env: &Env) -> ContractResult<(Vec<Uint128>, Uint128)> {
    let mut balances = vec![];
    let mut total = Uint128::zero();
    for asset in ASSETS.load(deps.storage)? {
        let balance = check_balance(deps, env, &asset.denom)?;
        total = total.checked_add(normalize(balance, asset.decimals)?)?;
        balances.push(balance);
    }
    Ok((balances, total))
}

fn total_value(deps: Deps, env: &Env) -> ContractResult<Uint128> {
    Ok(asset_balances(deps, env)?.1)
}

fn calculate_redeem_outputs(deps: Deps, env: &Env, amount: Uint128) -> ContractResult<Vec<Coin>> {
    let assets = ASSETS.load(deps.storage)?;
    let (balances, total) = asset_balances(deps, env)?;
    Ok(assets
        .into_iter()
        .zip(balances)
        .map(|(asset, balance)| {
            let output = if total.is_zero() {
                Uint128::zero()
            } else {
                balance.multiply_ratio(amount, total)
            };
            Coin::new(output.u128(), asset.denom)
        })
        .collect())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::UpdateOwnership(action) => {
            cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(response(
                "execute-update_ownership",
                CONTRACT_NAME,
                [attr("action", "update_ownership")],
            ))
        }
        ExecuteMsg::Mint { min_minted } => execute_mint(deps, info, min_minted),
        ExecuteMsg::Redeem { amount, min_output } => {
            execute_redeem(deps, env, info, amount, min_output)
        }
        ExecuteMsg::RedeemAll { min_output } => {
            let config = CONFIG.load(deps.storage)?;
            let balance: BalanceResponse = deps.querier.query_wasm_smart(
                &config.stable_token,
                &TokenQueryMsg::Balance {
                    address: info.sender.to_string(),
                },
            )?;
            execute_redeem(deps, env, info, balance.balance, min_output)
        }
        ExecuteMsg::Harvest { request } => execute_harvest(deps, env, info, request),
        ExecuteMsg::SwapHarvestedRewards { strategies } => {
            execute_swap_harvested_rewards(deps, env, info, strategies)
        }
        ExecuteMsg::SupportAsset { denom, decimals } => {
            execute_support_asset(deps, info, denom, decimals)
        }
        ExecuteMsg::ApproveStrategy { strategy } => execute_approve_strategy(deps, info, strategy),
        ExecuteMsg::RemoveStrategy { strategy } => execute_remove_strategy(deps, info, strategy),
        ExecuteMsg::SetAssetDefaultStrategy { denom, strategy } => {
            execute_set_asset_default_strategy(deps, info, denom, strategy)
        }
        ExecuteMsg::SetStrategist { strategist } => {
            execute_set_strategist(deps, info, strategist)
        }
        ExecuteMsg::SetSwapRouter { swap_router } => {
            execute_set_swap_router(deps, info, swap_router)
        }
        ExecuteMsg::AddSwapToken { denom } => execute_add_swap_token(deps, info, denom),
        ExecuteMsg::RemoveSwapToken { denom } => execute_remove_swap_token(deps, info, denom),
    }
}

fn execute_mint(deps: DepsMut, info: MessageInfo, min_minted: Uint128) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let deposit = one_coin(&info)?;
    let asset = find_asset(deps.as_ref(), &deposit.denom)?;

    let minted = normalize(deposit.amount, asset.decimals)?;
    ensure!(
        minted >= min_minted,
        ContractError::MintBelowMinimum {
            minted,
            minimum: min_minted,
        }
    );

    let mut messages: Vec<CosmosMsg> = vec![WasmMsg::Execute {
        contract_addr: config.stable_token.to_string(),
        msg: to_json_binary(&TokenExecuteMsg::Mint {
            amount: minted,
            receiver: info.sender.to_string(),
        })?,
        funds: vec![],
    }
    .into()];
    let mut attrs = vec![
        attr_coin("deposit", deposit.amount, &deposit.denom),
        attr("minted", minted),
        attr("receiver", &info.sender),
    ];
    if let Some(strategy) = ASSET_DEFAULT_STRATEGY.may_load(deps.storage, &deposit.denom)? {
        attrs.push(attr("allocated_to", &strategy));
        messages.push(
            WasmMsg::Execute {
                contract_addr: strategy.to_string(),
                msg: to_json_binary(&StrategyExecuteMsg::Deposit {})?,
                funds: vec![deposit],
            }
            .into(),
        );
    }

    Ok(response("execute-mint", CONTRACT_NAME, attrs).add_messages(messages))
}

fn execute_redeem(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    min_output: Option<Uint128>,
) -> ContractResult<Response> {
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let config = CONFIG.load(deps.storage)?;
    let assets = ASSETS.load(deps.storage)?;
    let outputs = calculate_redeem_outputs(deps.as_ref(), &env, amount)?;
    ensure!(
        outputs.iter().any(|output| !output.amount.is_zero()),
        ContractError::NothingToRedeem {}
    );

    if let Some(minimum) = min_output {
        let mut output = Uint128::zero();
        for (asset, coin) in assets.iter().zip(&outputs) {
            output = output.checked_add(normalize(coin.amount, asset.decimals)?)?;
        }
        ensure!(
            output >= minimum,
            ContractError::RedeemBelowMinimum { output, minimum }
        );
    }

    let mut messages: Vec<CosmosMsg> = vec![WasmMsg::Execute {
        contract_addr: config.stable_token.to_string(),
        msg: to_json_binary(&TokenExecuteMsg::Burn {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into()];
    let mut attrs = vec![attr("burned", amount), attr("recipient", &info.sender)];

    let strategies = STRATEGIES.load(deps.storage)?;
    for output in outputs {
        if output.amount.is_zero() {
            continue;
        }
        attrs.push(attr_coin("output", output.amount, &output.denom));

        let idle = deps
            .querier
            .query_balance(&env.contract.address, &output.denom)?
            .amount;
        let from_idle = idle.min(output.amount);
        if !from_idle.is_zero() {
            messages.push(
                BankMsg::Send {
                    to_address: info.sender.to_string(),
                    amount: vec![Coin::new(from_idle.u128(), &output.denom)],
                }
                .into(),
            );
        }

        let shortfall = output.amount - from_idle;
        if !shortfall.is_zero() {
            let strategy = liquidity_strategy(deps.as_ref(), &strategies, &output.denom)?;
            messages.push(
                WasmMsg::Execute {
                    contract_addr: strategy.to_string(),
                    msg: to_json_binary(&StrategyExecuteMsg::Withdraw {
                        recipient: info.sender.to_string(),
                        denom: output.denom.clone(),
                        amount: shortfall,
                    })?,
                    funds: vec![],
                }
                .into(),
            );
        }
    }

    Ok(response("execute-redeem", CONTRACT_NAME, attrs).add_messages(messages))
}

/// Strategy to pull `denom` from: the asset's default one, otherwise the
/// first approved strategy supporting it.
fn liquidity_strategy(deps: Deps, strategies: &[Addr], denom: &str) -> ContractResult<Addr> {
    if let Some(strategy) = ASSET_DEFAULT_STRATEGY.may_load(deps.storage, denom)? {
        return Ok(strategy);
    }
    for strategy in strategies {
        let supported: bool = deps.querier.query_wasm_smart(
            strategy,
            &StrategyQueryMsg::SupportsAsset {
                denom: denom.to_string(),
            },
        )?;
        if supported {
            return Ok(strategy.clone());
        }
    }
    Err(ContractError::NoStrategyForAsset {
        denom: denom.to_string(),
    })
}

fn execute_harvest(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request: HarvestRequest,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    assert_strategist_or_governor(deps.storage, &info.sender, config.strategist.as_ref())?;

    let approved = STRATEGIES.load(deps.storage)?;
    let strategies = match request.strategy() {
        Some(strategy) => {
            let strategy = deps.api.addr_validate(strategy)?;
            ensure!(
                approved.contains(&strategy),
                ContractError::StrategyNotApproved {}
            );
            vec![strategy]
        }
        None => approved,
    };

    let mut messages: Vec<CosmosMsg> = vec![];
    let mut attrs: Vec<Attribute> = vec![attr("swap", request.swaps().to_string())];
    for strategy in &strategies {
        attrs.push(attr("strategy", strategy));
        messages.push(
            WasmMsg::Execute {
                contract_addr: strategy.to_string(),
                msg: to_json_binary(&StrategyExecuteMsg::CollectRewardTokens {})?,
                funds: vec![],
            }
            .into(),
        );
    }
    if request.swaps() {
        ensure!(
            config.swap_router.is_some(),
            ContractError::SwapRouterNotSet {}
        );
        messages.push(
            WasmMsg::Execute {
                contract_addr: env.contract.address.to_string(),
                msg: to_json_binary(&ExecuteMsg::SwapHarvestedRewards {
                    strategies: strategies.iter().map(|s| s.to_string()).collect(),
                })?,
                funds: vec![],
            }
            .into(),
        );
    }

    Ok(response("execute-harvest", CONTRACT_NAME, attrs).add_messages(messages))
}

/// Sells harvested rewards through the router. A non-zero liquidation
/// limit caps how much of each reward token is sold per harvest; the rest
/// stays in the vault.
fn execute_swap_harvested_rewards(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    strategies: Vec<String>,
) -> ContractResult<Response> {
    ensure_eq!(
        info.sender,
        env.contract.address,
        ContractError::Unauthorized
    );
    let config = CONFIG.load(deps.storage)?;
    let swap_router = config.swap_router.ok_or(ContractError::SwapRouterNotSet {})?;
    let swap_tokens = SWAP_TOKENS.load(deps.storage)?;

    let mut remaining: HashMap<String, Uint128> = HashMap::new();
    let mut messages: Vec<CosmosMsg> = vec![];
    let mut attrs: Vec<Attribute> = vec![];
    for strategy in strategies {
        let tokens: Vec<String> = deps
            .querier
            .query_wasm_smart(&strategy, &StrategyQueryMsg::RewardTokenAddresses {})?;
        let limits: Vec<Uint128> = deps
            .querier
            .query_wasm_smart(&strategy, &StrategyQueryMsg::RewardLiquidationLimits {})?;

        for (token, limit) in tokens.into_iter().zip(limits) {
            if !swap_tokens.contains(&token) {
                continue;
            }
            let available = match remaining.get(&token) {
                Some(available) => *available,
                None => {
                    deps.querier
                        .query_balance(&env.contract.address, &token)?
                        .amount
                }
            };
            let amount = if !limit.is_zero() && limit < available {
                limit
            } else {
                available
            };
            remaining.insert(token.clone(), available - amount);
            if amount.is_zero() {
                continue;
            }

            attrs.push(attr_coin("swapped", amount, &token));
            messages.push(
                WasmMsg::Execute {
                    contract_addr: swap_router.to_string(),
                    msg: to_json_binary(&SwapRouterExecuteMsg::Swap {
                        minimum_receive: None,
                        to: None,
                    })?,
                    funds: vec![Coin::new(amount.u128(), token)],
                }
                .into(),
            );
        }
    }

    Ok(response("execute-swap_harvested_rewards", CONTRACT_NAME, attrs).add_messages(messages))
}

fn execute_support_asset(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
    decimals: u8,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    let mut assets = ASSETS.load(deps.storage)?;
    ensure!(
        !assets.iter().any(|asset| asset.denom == denom),
        ContractError::AssetAlreadySupported { denom }
    );
    assets.push(SupportedAsset {
        denom: denom.clone(),
        decimals,
    });
    ASSETS.save(deps.storage, &assets)?;

    Ok(response(
        "execute-support_asset",
        CONTRACT_NAME,
        [attr("denom", denom), attr("decimals", decimals.to_string())],
    ))
}

fn execute_approve_strategy(
    deps: DepsMut,
    info: MessageInfo,
    strategy: String,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    let strategy = deps.api.addr_validate(&strategy)?;
    let mut strategies = STRATEGIES.load(deps.storage)?;
    ensure!(
        !strategies.contains(&strategy),
        ContractError::StrategyAlreadyApproved {}
    );
    strategies.push(strategy.clone());
    STRATEGIES.save(deps.storage, &strategies)?;

    Ok(response(
        "execute-approve_strategy",
        CONTRACT_NAME,
        [attr("strategy", strategy)],
    ))
}

fn execute_remove_strategy(
    deps: DepsMut,
    info: MessageInfo,
    strategy: String,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    let strategy = deps.api.addr_validate(&strategy)?;
    let mut strategies = STRATEGIES.load(deps.storage)?;
    ensure!(
        strategies.contains(&strategy),
        ContractError::StrategyNotApproved {}
    );
    strategies.retain(|approved| approved != &strategy);
    STRATEGIES.save(deps.storage, &strategies)?;

    let mut attrs = vec![attr("strategy", &strategy)];
    for asset in ASSETS.load(deps.storage)? {
        if ASSET_DEFAULT_STRATEGY.may_load(deps.storage, &asset.denom)? == Some(strategy.clone()) {
            ASSET_DEFAULT_STRATEGY.remove(deps.storage, &asset.denom);
            attrs.push(attr("cleared_default", asset.denom));
        }
    }

    Ok(
        response("execute-remove_strategy", CONTRACT_NAME, attrs).add_message(WasmMsg::Execute {
            contract_addr: strategy.to_string(),
            msg: to_json_binary(&StrategyExecuteMsg::WithdrawAll {})?,
            funds: vec![],
        }),
    )
}

fn execute_set_asset_default_strategy(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
    strategy: Option<String>,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    let asset = find_asset(deps.as_ref(), &denom)?;

    match strategy {
        Some(strategy) => {
            let strategy = deps.api.addr_validate(&strategy)?;
            ensure!(
                STRATEGIES.load(deps.storage)?.contains(&strategy),
                ContractError::StrategyNotApproved {}
            );
            let supported: bool = deps.querier.query_wasm_smart(
                &strategy,
                &StrategyQueryMsg::SupportsAsset {
                    denom: asset.denom.clone(),
                },
            )?;
            ensure!(supported, ContractError::AssetNotSupportedByStrategy {});
            ASSET_DEFAULT_STRATEGY.save(deps.storage, &asset.denom, &strategy)?;
            Ok(response(
                "execute-set_asset_default_strategy",
                CONTRACT_NAME,
                [attr("denom", asset.denom), attr("strategy", strategy)],
            ))
        }
        None => {
            ASSET_DEFAULT_STRATEGY.remove(deps.storage, &asset.denom);
            Ok(response(
                "execute-set_asset_default_strategy",
                CONTRACT_NAME,
                [attr("denom", asset.denom), attr("strategy", "none")],
            ))
        }
    }
}

fn execute_set_strategist(
    deps: DepsMut,
    info: MessageInfo,
    strategist: Option<String>,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    let strategist = strategist
        .map(|strategist| deps.api.addr_validate(&strategist))
        .transpose()?;
    CONFIG.update(deps.storage, |mut config| -> ContractResult<_> {
        config.strategist = strategist.clone();
        Ok(config)
    })?;

    Ok(response(
        "execute-set_strategist",
        CONTRACT_NAME,
        [attr(
            "strategist",
            strategist.map_or_else(|| "none".to_string(), |s| s.to_string()),
        )],
    ))
}

fn execute_set_swap_router(
    deps: DepsMut,
    info: MessageInfo,
    swap_router: Option<String>,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    let swap_router = swap_router
        .map(|swap_router| deps.api.addr_validate(&swap_router))
        .transpose()?;
    CONFIG.update(deps.storage, |mut config| -> ContractResult<_> {
        config.swap_router = swap_router.clone();
        Ok(config)
    })?;

    Ok(response(
        "execute-set_swap_router",
        CONTRACT_NAME,
        [attr(
            "swap_router",
            swap_router.map_or_else(|| "none".to_string(), |s| s.to_string()),
        )],
    ))
}

fn execute_add_swap_token(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    let mut swap_tokens = SWAP_TOKENS.load(deps.storage)?;
    ensure!(
        !swap_tokens.contains(&denom),
        ContractError::SwapTokenAlreadyAdded { denom }
    );
    swap_tokens.push(denom.clone());
    SWAP_TOKENS.save(deps.storage, &swap_tokens)?;

    Ok(response(
        "execute-add_swap_token",
        CONTRACT_NAME,
        [attr("denom", denom)],
    ))
}

fn execute_remove_swap_token(
    deps: DepsMut,
    info: MessageInfo,
    denom: String,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    let mut swap_tokens = SWAP_TOKENS.load(deps.storage)?;
    ensure!(
        swap_tokens.contains(&denom),
        ContractError::SwapTokenNotFound { denom }
    );
    swap_tokens.retain(|token| token != &denom);
    SWAP_TOKENS.save(deps.storage, &swap_tokens)?;

    Ok(response(
        "execute-remove_swap_token",
        CONTRACT_NAME,
        [attr("denom", denom)],
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> ContractResult<Response> {
    let contract_version_metadata = cw2::get_contract_version(deps.storage)?;
    let storage_contract_name = contract_version_metadata.contract.as_str();
    if storage_contract_name != CONTRACT_NAME {
        return Err(ContractError::MigrationError {
            storage_contract_name: storage_contract_name.to_string(),
            contract_name: CONTRACT_NAME.to_string(),
        });
    }

    let storage_version: semver::Version = contract_version_metadata.version.parse()?;
    let version: semver::Version = CONTRACT_VERSION.parse()?;

    if storage_version < version {
        cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::new())
}
