use cosmwasm_std::{
    attr, ensure, ensure_eq, entry_point, to_json_binary, Attribute, BankMsg, Binary, Coin,
    CosmosMsg, Decimal, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdError, SubMsg,
    Uint128, WasmMsg,
};
use cw_utils::PaymentError;
use ovault_base::{
    asset::AssetInfo,
    error::convex_strategy::{ContractError, ContractResult},
    msg::{
        booster::{ExecuteMsg as BoosterExecuteMsg, QueryMsg as BoosterQueryMsg},
        convex_strategy::{ExecuteMsg, InstantiateMsg, LpBalanceResponse, MigrateMsg, QueryMsg},
        curve_pool::{ExecuteMsg as PoolExecuteMsg, QueryMsg as PoolQueryMsg},
    },
    state::{
        convex_strategy::{
            Config, ConfigOptional, ASSETS, CONFIG, REWARD_LIQUIDATION_LIMITS, REWARD_TOKENS,
        },
        curve_pool::Config as PoolConfig,
    },
};
use ovault_helpers::{
    answer::{attr_coin, attr_list, response},
    decimals::{denormalize, normalize},
    governance::assert_governor,
};

pub const CONTRACT_NAME: &str = concat!("crates.io:ovault__", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEPOSIT_REPLY_ID: u64 = 1;
pub const COLLECT_REWARDS_REPLY_ID: u64 = 2;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(msg.owner.as_str()))?;

    let max_slippage = msg.max_slippage.unwrap_or(Decimal::percent(1));
    ensure!(
        max_slippage < Decimal::one(),
        ContractError::InvalidMaxSlippage {}
    );
    ensure!(
        msg.reward_tokens.iter().all(|token| !token.trim().is_empty()),
        ContractError::EmptyRewardTokenAddress {}
    );

    let config = Config {
        vault: deps.api.addr_validate(&msg.vault)?,
        curve_pool: deps.api.addr_validate(&msg.curve_pool)?,
        booster: deps.api.addr_validate(&msg.booster)?,
        pool_id: msg.pool_id,
        lp_denom: msg.lp_denom,
        max_slippage,
    };
    CONFIG.save(deps.storage, &config)?;
    ASSETS.save(deps.storage, &msg.assets)?;
    REWARD_LIQUIDATION_LIMITS.save(
        deps.storage,
        &vec![Uint128::zero(); msg.reward_tokens.len()],
    )?;
    REWARD_TOKENS.save(deps.storage, &msg.reward_tokens)?;

    Ok(response(
        "instantiate",
        CONTRACT_NAME,
        [
            attr("owner", msg.owner),
            attr("vault", config.vault),
            attr("curve_pool", config.curve_pool),
            attr("booster", config.booster),
            attr("pool_id", config.pool_id.to_string()),
            attr("lp_denom", config.lp_denom),
            attr("max_slippage", config.max_slippage.to_string()),
            attr_list("assets", &msg.assets),
            attr_list("reward_tokens", &msg.reward_tokens),
        ],
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    Ok(match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?)?,
        QueryMsg::Assets {} => to_json_binary(&ASSETS.load(deps.storage)?)?,
        QueryMsg::LpBalance {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&lp_balance(deps, &env, &config)?)?
        }
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?)?,
        QueryMsg::CheckBalance { denom } => to_json_binary(&check_balance(deps, &env, &denom)?)?,
        QueryMsg::SupportsAsset { denom } => {
            to_json_binary(&ASSETS.load(deps.storage)?.contains(&denom))?
        }
        QueryMsg::RewardTokenAddresses {} => to_json_binary(&REWARD_TOKENS.load(deps.storage)?)?,
        QueryMsg::RewardLiquidationLimits {} => {
            to_json_binary(&REWARD_LIQUIDATION_LIMITS.load(deps.storage)?)?
        }
        QueryMsg::RewardLiquidationLimit { index } => {
            let limit = REWARD_LIQUIDATION_LIMITS
                .load(deps.storage)?
                .get(index as usize)
                .copied()
                .ok_or(ContractError::RewardTokenIndexOutOfRange { index })?;
            to_json_binary(&limit)?
        }
    })
}

fn lp_balance(deps: Deps, env: &Env, config: &Config) -> ContractResult<LpBalanceResponse> {
    let staked: Uint128 = deps.querier.query_wasm_smart(
        &config.booster,
        &BoosterQueryMsg::Staked {
            pool_id: config.pool_id,
            address: env.contract.address.to_string(),
        },
    )?;
    let held = deps
        .querier
        .query_balance(&env.contract.address, &config.lp_denom)?
        .amount;
    Ok(LpBalanceResponse { staked, held })
}

fn query_pool_config(deps: Deps, config: &Config) -> ContractResult<PoolConfig> {
    Ok(deps
        .querier
        .query_wasm_smart(&config.curve_pool, &PoolQueryMsg::Config {})?)
}

/// Value of all LP the strategy owns, split evenly over the pool coins
/// and expressed in `denom` units.
fn check_balance(deps: Deps, env: &Env, denom: &str) -> ContractResult<Uint128> {
    if !ASSETS.load(deps.storage)?.iter().any(|asset| asset == denom) {
        return Ok(Uint128::zero());
    }
    let config = CONFIG.load(deps.storage)?;
    let pool = query_pool_config(deps, &config)?;
    let coin = pool
        .coin(denom)
        .ok_or_else(|| ContractError::UnsupportedAsset {
            denom: denom.to_string(),
        })?;

    let balance = lp_balance(deps, env, &config)?;
    let total_lp = balance.staked.checked_add(balance.held)?;
    let value = total_lp * pool.virtual_price;
    let share = value
        .checked_div(Uint128::from(pool.coins.len() as u128))
        .map_err(StdError::from)?;
    Ok(denormalize(share, coin.decimals)?)
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
        ExecuteMsg::UpdateConfig { new_config } => execute_update_config(deps, info, new_config),
        ExecuteMsg::SetRewardTokenAddresses { tokens } => {
            execute_set_reward_token_addresses(deps, info, tokens)
        }
        ExecuteMsg::SetRewardLiquidationLimits { limits } => {
            execute_set_reward_liquidation_limits(deps, info, limits)
        }
        ExecuteMsg::TransferToken { asset, amount } => {
            execute_transfer_token(deps, info, asset, amount)
        }
        ExecuteMsg::Deposit {} => execute_deposit(deps, info),
        ExecuteMsg::Withdraw {
            recipient,
            denom,
            amount,
        } => execute_withdraw(deps, env, info, recipient, denom, amount),
        ExecuteMsg::WithdrawAll {} => execute_withdraw_all(deps, env, info),
        ExecuteMsg::CollectRewardTokens {} => execute_collect_reward_tokens(deps, info),
    }
}

fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    new_config: ConfigOptional,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    let mut attrs: Vec<Attribute> = vec![];
    if let Some(vault) = new_config.vault {
        config.vault = deps.api.addr_validate(vault.as_str())?;
        attrs.push(attr("vault", &config.vault));
    }
    if let Some(curve_pool) = new_config.curve_pool {
        config.curve_pool = deps.api.addr_validate(curve_pool.as_str())?;
        attrs.push(attr("curve_pool", &config.curve_pool));
    }
    if let Some(booster) = new_config.booster {
        config.booster = deps.api.addr_validate(booster.as_str())?;
        attrs.push(attr("booster", &config.booster));
    }
    if let Some(pool_id) = new_config.pool_id {
        attrs.push(attr("pool_id", pool_id.to_string()));
        config.pool_id = pool_id;
    }
    if let Some(lp_denom) = new_config.lp_denom {
        attrs.push(attr("lp_denom", &lp_denom));
        config.lp_denom = lp_denom;
    }
    if let Some(max_slippage) = new_config.max_slippage {
        ensure!(
            max_slippage < Decimal::one(),
            ContractError::InvalidMaxSlippage {}
        );
        attrs.push(attr("max_slippage", max_slippage.to_string()));
        config.max_slippage = max_slippage;
    }
    CONFIG.save(deps.storage, &config)?;
    Ok(response("execute-update_config", CONTRACT_NAME, attrs))
}

fn execute_set_reward_token_addresses(
    deps: DepsMut,
    info: MessageInfo,
    tokens: Vec<String>,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    ensure!(
        tokens.iter().all(|token| !token.trim().is_empty()),
        ContractError::EmptyRewardTokenAddress {}
    );

    let old_tokens = REWARD_TOKENS.load(deps.storage)?;
    REWARD_TOKENS.save(deps.storage, &tokens)?;
    REWARD_LIQUIDATION_LIMITS.save(deps.storage, &vec![Uint128::zero(); tokens.len()])?;

    Ok(response(
        "reward_token_addresses_updated",
        CONTRACT_NAME,
        [
            attr_list("old_reward_tokens", old_tokens),
            attr_list("new_reward_tokens", tokens),
        ],
    ))
}

fn execute_set_reward_liquidation_limits(
    deps: DepsMut,
    info: MessageInfo,
    limits: Vec<Uint128>,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    let tokens = REWARD_TOKENS.load(deps.storage)?;
    ensure!(
        limits.len() == tokens.len(),
        ContractError::LiquidationLimitsLengthMismatch {
            expected: tokens.len(),
            actual: limits.len(),
        }
    );

    let old_limits = REWARD_LIQUIDATION_LIMITS.load(deps.storage)?;
    REWARD_LIQUIDATION_LIMITS.save(deps.storage, &limits)?;

    Ok(response(
        "reward_liquidation_limits_updated",
        CONTRACT_NAME,
        [
            attr_list("old_limits", old_limits),
            attr_list("new_limits", limits),
        ],
    ))
}

fn execute_transfer_token(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
) -> ContractResult<Response> {
    assert_governor(deps.storage, &info.sender)?;
    if let AssetInfo::Native { denom } = &asset {
        ensure!(
            !ASSETS.load(deps.storage)?.contains(denom),
            ContractError::CannotTransferSupportedAsset {}
        );
    }

    Ok(response(
        "execute-transfer_token",
        CONTRACT_NAME,
        [
            attr_coin("amount", amount, &asset),
            attr("recipient", &info.sender),
        ],
    )
    .add_message(asset.transfer_msg(amount, &info.sender)?))
}

fn execute_deposit(deps: DepsMut, info: MessageInfo) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.vault, ContractError::NotVault {});
    ensure!(
        !info.funds.is_empty(),
        ContractError::PaymentError(PaymentError::NoFunds {})
    );

    let assets = ASSETS.load(deps.storage)?;
    let pool = query_pool_config(deps.as_ref(), &config)?;
    let mut value = Uint128::zero();
    let mut attrs: Vec<Attribute> = vec![];
    for coin in &info.funds {
        let pool_coin = pool
            .coin(&coin.denom)
            .filter(|_| assets.contains(&coin.denom))
            .ok_or_else(|| ContractError::UnsupportedAsset {
                denom: coin.denom.clone(),
            })?;
        value = value.checked_add(normalize(coin.amount, pool_coin.decimals)?)?;
        attrs.push(attr_coin("deposit", coin.amount, &coin.denom));
    }

    let expected_lp = value.multiply_ratio(
        Decimal::one().atomics(),
        pool.virtual_price.atomics(),
    );
    let min_mint_amount = expected_lp * (Decimal::one() - config.max_slippage);
    attrs.push(attr_coin("min_mint_amount", min_mint_amount, &config.lp_denom));

    let add_liquidity = WasmMsg::Execute {
        contract_addr: config.curve_pool.to_string(),
        msg: to_json_binary(&PoolExecuteMsg::AddLiquidity { min_mint_amount })?,
        funds: info.funds,
    };
    Ok(response("execute-deposit", CONTRACT_NAME, attrs)
        .add_submessage(SubMsg::reply_on_success(add_liquidity, DEPOSIT_REPLY_ID)))
}

fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    denom: String,
    amount: Uint128,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.vault, ContractError::NotVault {});
    ensure!(!amount.is_zero(), ContractError::InvalidZeroAmount {});
    ensure!(
        ASSETS.load(deps.storage)?.contains(&denom),
        ContractError::UnsupportedAsset { denom }
    );
    let recipient = deps.api.addr_validate(&recipient)?;

    let amounts = vec![Coin::new(amount.u128(), &denom)];
    let required: Uint128 = deps.querier.query_wasm_smart(
        &config.curve_pool,
        &PoolQueryMsg::CalcTokenAmount {
            amounts: amounts.clone(),
            is_deposit: false,
        },
    )?;
    let balance = lp_balance(deps.as_ref(), &env, &config)?;
    let available = balance.staked.checked_add(balance.held)?;
    ensure!(
        required <= available,
        ContractError::InsufficientLpBalance {
            required,
            available,
        }
    );

    let max_burn_amount = (required * (Decimal::one() + config.max_slippage)).min(available);
    let to_unstake = max_burn_amount.saturating_sub(balance.held);

    let mut messages: Vec<CosmosMsg> = vec![];
    if !to_unstake.is_zero() {
        messages.push(
            WasmMsg::Execute {
                contract_addr: config.booster.to_string(),
                msg: to_json_binary(&BoosterExecuteMsg::Withdraw {
                    pool_id: config.pool_id,
                    amount: to_unstake,
                })?,
                funds: vec![],
            }
            .into(),
        );
    }
    messages.push(
        WasmMsg::Execute {
            contract_addr: config.curve_pool.to_string(),
            msg: to_json_binary(&PoolExecuteMsg::RemoveLiquidityImbalance {
                amounts,
                max_burn_amount,
                recipient: Some(recipient.to_string()),
            })?,
            funds: vec![Coin::new(max_burn_amount.u128(), &config.lp_denom)],
        }
        .into(),
    );

    Ok(response(
        "execute-withdraw",
        CONTRACT_NAME,
        [
            attr_coin("amount", amount, denom),
            attr("recipient", recipient),
            attr_coin("max_burn_amount", max_burn_amount, &config.lp_denom),
            attr_coin("unstaked", to_unstake, &config.lp_denom),
        ],
    )
    .add_messages(messages))
}

fn execute_withdraw_all(deps: DepsMut, env: Env, info: MessageInfo) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.vault {
        assert_governor(deps.storage, &info.sender)
            .map_err(|_| ContractError::NotVaultOrGovernor {})?;
    }

    let balance = lp_balance(deps.as_ref(), &env, &config)?;
    let total = balance.staked.checked_add(balance.held)?;
    let mut messages: Vec<CosmosMsg> = vec![];
    if !balance.staked.is_zero() {
        messages.push(
            WasmMsg::Execute {
                contract_addr: config.booster.to_string(),
                msg: to_json_binary(&BoosterExecuteMsg::Withdraw {
                    pool_id: config.pool_id,
                    amount: balance.staked,
                })?,
                funds: vec![],
            }
            .into(),
        );
    }
    if !total.is_zero() {
        messages.push(
            WasmMsg::Execute {
                contract_addr: config.curve_pool.to_string(),
                msg: to_json_binary(&PoolExecuteMsg::RemoveLiquidity {
                    recipient: Some(config.vault.to_string()),
                })?,
                funds: vec![Coin::new(total.u128(), &config.lp_denom)],
            }
            .into(),
        );
    }

    Ok(response(
        "execute-withdraw_all",
        CONTRACT_NAME,
        [attr_coin("burned", total, &config.lp_denom)],
    )
    .add_messages(messages))
}

fn execute_collect_reward_tokens(deps: DepsMut, info: MessageInfo) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.vault, ContractError::NotVault {});

    let claim = WasmMsg::Execute {
        contract_addr: config.booster.to_string(),
        msg: to_json_binary(&BoosterExecuteMsg::ClaimRewards {
            pool_id: config.pool_id,
        })?,
        funds: vec![],
    };
    Ok(response(
        "execute-collect_reward_tokens",
        CONTRACT_NAME,
        [attr("pool_id", config.pool_id.to_string())],
    )
    .add_submessage(SubMsg::reply_on_success(claim, COLLECT_REWARDS_REPLY_ID)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> ContractResult<Response> {
    match msg.id {
        DEPOSIT_REPLY_ID => stake_held_lp(deps, env),
        COLLECT_REWARDS_REPLY_ID => forward_rewards(deps, env),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

fn stake_held_lp(deps: DepsMut, env: Env) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let held = deps
        .querier
        .query_balance(&env.contract.address, &config.lp_denom)?;
    deps.api.debug(&format!(
        "WASMDEBUG: staking {} into pool {}",
        held, config.pool_id
    ));

    let mut response = response(
        "reply-stake",
        CONTRACT_NAME,
        [attr_coin("staked", held.amount, &held.denom)],
    );
    if !held.amount.is_zero() {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: config.booster.to_string(),
            msg: to_json_binary(&BoosterExecuteMsg::Deposit {
                pool_id: config.pool_id,
            })?,
            funds: vec![held],
        });
    }
    Ok(response)
}

fn forward_rewards(deps: DepsMut, env: Env) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let mut payout: Vec<Coin> = vec![];
    for token in REWARD_TOKENS.load(deps.storage)? {
        let balance = deps.querier.query_balance(&env.contract.address, token)?;
        if !balance.amount.is_zero() {
            payout.push(balance);
        }
    }

    let attrs = payout
        .iter()
        .map(|coin| attr_coin("reward", coin.amount, &coin.denom))
        .collect::<Vec<_>>();
    let mut response = response("reply-forward_rewards", CONTRACT_NAME, attrs);
    if !payout.is_empty() {
        response = response.add_message(BankMsg::Send {
            to_address: config.vault.to_string(),
            amount: payout,
        });
    }
    Ok(response)
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
