use cosmwasm_std::{
    attr, ensure, entry_point, to_json_binary, Attribute, BankMsg, Binary, Coin, Deps, DepsMut,
    Env, MessageInfo, Response, Uint128,
};
use cw_utils::must_pay;
use ovault_base::{
    error::booster::{ContractError, ContractResult},
    msg::booster::{ExecuteMsg, InstantiateMsg, QueryMsg},
    state::booster::{POOLS, REWARDS_PER_CLAIM, STAKED},
};
use ovault_helpers::answer::{attr_coin, response};

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

    let mut attrs: Vec<Attribute> = vec![];
    for (pool_id, lp_denom) in msg.pools {
        attrs.push(attr(format!("pool_{}", pool_id), &lp_denom));
        POOLS.save(deps.storage, pool_id, &lp_denom)?;
    }
    for reward in &msg.rewards_per_claim {
        attrs.push(attr_coin("reward_per_claim", reward.amount, &reward.denom));
    }
    REWARDS_PER_CLAIM.save(deps.storage, &msg.rewards_per_claim)?;

    Ok(response("instantiate", CONTRACT_NAME, attrs))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::Deposit { pool_id } => execute_deposit(deps, info, pool_id),
        ExecuteMsg::Withdraw { pool_id, amount } => execute_withdraw(deps, info, pool_id, amount),
        ExecuteMsg::ClaimRewards { pool_id } => execute_claim_rewards(deps, env, info, pool_id),
    }
}

fn load_pool(deps: Deps, pool_id: u64) -> ContractResult<String> {
    POOLS
        .may_load(deps.storage, pool_id)?
        .ok_or(ContractError::UnknownPool { pool_id })
}

fn execute_deposit(deps: DepsMut, info: MessageInfo, pool_id: u64) -> ContractResult<Response> {
    let lp_denom = load_pool(deps.as_ref(), pool_id)?;
    let amount = must_pay(&info, &lp_denom)?;

    let staked = STAKED
        .may_load(deps.storage, (pool_id, &info.sender))?
        .unwrap_or_default();
    STAKED.save(
        deps.storage,
        (pool_id, &info.sender),
        &staked.checked_add(amount)?,
    )?;

    Ok(response(
        "deposit",
        CONTRACT_NAME,
        [
            attr("pool_id", pool_id.to_string()),
            attr("staker", info.sender),
            attr_coin("amount", amount, lp_denom),
        ],
    ))
}

fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    pool_id: u64,
    amount: Uint128,
) -> ContractResult<Response> {
    let lp_denom = load_pool(deps.as_ref(), pool_id)?;
    let staked = STAKED
        .may_load(deps.storage, (pool_id, &info.sender))?
        .unwrap_or_default();
    ensure!(
        staked >= amount,
        ContractError::InsufficientStake { staked, amount }
    );
    STAKED.save(deps.storage, (pool_id, &info.sender), &(staked - amount))?;

    Ok(response(
        "withdraw",
        CONTRACT_NAME,
        [
            attr("pool_id", pool_id.to_string()),
            attr("staker", info.sender.to_string()),
            attr_coin("amount", amount, &lp_denom),
        ],
    )
    .add_message(BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: vec![Coin::new(amount.u128(), lp_denom)],
    }))
}

/// Pays the configured rewards, capped by what the booster still holds.
fn execute_claim_rewards(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    pool_id: u64,
) -> ContractResult<Response> {
    load_pool(deps.as_ref(), pool_id)?;

    let mut payout: Vec<Coin> = vec![];
    for reward in REWARDS_PER_CLAIM.load(deps.storage)? {
        let available = deps
            .querier
            .query_balance(&env.contract.address, &reward.denom)?
            .amount;
        let amount = reward.amount.min(available);
        if !amount.is_zero() {
            payout.push(Coin::new(amount.u128(), reward.denom));
        }
    }

    let mut attrs: Vec<Attribute> = vec![
        attr("pool_id", pool_id.to_string()),
        attr("claimer", info.sender.to_string()),
    ];
    attrs.extend(
        payout
            .iter()
            .map(|coin| attr_coin("reward", coin.amount, &coin.denom)),
    );
    let mut response = response("claim_rewards", CONTRACT_NAME, attrs);
    if !payout.is_empty() {
        response = response.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: payout,
        });
    }
    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    Ok(match msg {
        QueryMsg::Staked { pool_id, address } => {
            let address = deps.api.addr_validate(&address)?;
            let staked = STAKED
                .may_load(deps.storage, (pool_id, &address))?
                .unwrap_or_default();
            to_json_binary(&staked)?
        }
        QueryMsg::RewardsPerClaim {} => to_json_binary(&REWARDS_PER_CLAIM.load(deps.storage)?)?,
    })
}
