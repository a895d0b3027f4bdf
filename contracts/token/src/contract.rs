use cosmwasm_std::{
    attr, ensure, ensure_eq, entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env,
    MessageInfo, Response, Storage, Uint128,
};
use ovault_base::{
    error::token::{ContractError, ContractResult},
    msg::token::{
        BalanceResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, TokenInfoResponse,
    },
    state::token::{Config, BALANCES, CONFIG, TOTAL_SUPPLY},
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

    let vault = deps.api.addr_validate(&msg.vault)?;
    CONFIG.save(
        deps.storage,
        &Config {
            vault: vault.clone(),
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
        },
    )?;
    TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;

    Ok(response(
        "instantiate",
        CONTRACT_NAME,
        [
            attr("vault", vault),
            attr("name", msg.name),
            attr("symbol", msg.symbol),
            attr("decimals", msg.decimals.to_string()),
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
        ExecuteMsg::Mint { amount, receiver } => mint(deps, info, amount, receiver),
        ExecuteMsg::Burn { owner, amount } => burn(deps, info, owner, amount),
        ExecuteMsg::Transfer { recipient, amount } => transfer(deps, info, recipient, amount),
    }
}

fn mint(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
    receiver: String,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.vault, ContractError::Unauthorized);
    ensure!(!amount.is_zero(), ContractError::NothingToMint);

    let receiver = deps.api.addr_validate(&receiver)?;
    credit(deps.storage, &receiver, amount)?;
    TOTAL_SUPPLY.update(deps.storage, |supply| -> ContractResult<_> {
        Ok(supply.checked_add(amount)?)
    })?;

    Ok(response(
        "execute-mint",
        CONTRACT_NAME,
        [
            attr_coin("amount", amount, config.symbol),
            attr("receiver", receiver),
        ],
    ))
}

fn burn(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.vault, ContractError::Unauthorized);
    ensure!(!amount.is_zero(), ContractError::InvalidZeroAmount);

    let owner = deps.api.addr_validate(&owner)?;
    debit(deps.storage, &owner, amount)?;
    TOTAL_SUPPLY.update(deps.storage, |supply| -> ContractResult<_> {
        Ok(supply.checked_sub(amount)?)
    })?;

    Ok(response(
        "execute-burn",
        CONTRACT_NAME,
        [
            attr_coin("amount", amount, config.symbol),
            attr("owner", owner),
        ],
    ))
}

fn transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> ContractResult<Response> {
    ensure!(!amount.is_zero(), ContractError::InvalidZeroAmount);
    let config = CONFIG.load(deps.storage)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    debit(deps.storage, &info.sender, amount)?;
    credit(deps.storage, &recipient, amount)?;

    Ok(response(
        "execute-transfer",
        CONTRACT_NAME,
        [
            attr_coin("amount", amount, config.symbol),
            attr("from", info.sender),
            attr("to", recipient),
        ],
    ))
}

fn credit(storage: &mut dyn Storage, address: &Addr, amount: Uint128) -> ContractResult<()> {
    let balance = BALANCES.may_load(storage, address)?.unwrap_or_default();
    BALANCES.save(storage, address, &balance.checked_add(amount)?)?;
    Ok(())
}

fn debit(storage: &mut dyn Storage, address: &Addr, amount: Uint128) -> ContractResult<()> {
    let balance = BALANCES.may_load(storage, address)?.unwrap_or_default();
    ensure!(
        balance >= amount,
        ContractError::InsufficientBalance { balance, amount }
    );
    BALANCES.save(storage, address, &(balance - amount))?;
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    Ok(match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?)?,
        QueryMsg::Balance { address } => {
            let address = deps.api.addr_validate(&address)?;
            let balance = BALANCES
                .may_load(deps.storage, &address)?
                .unwrap_or_default();
            to_json_binary(&BalanceResponse { balance })?
        }
        QueryMsg::TokenInfo {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&TokenInfoResponse {
                name: config.name,
                symbol: config.symbol,
                decimals: config.decimals,
                total_supply: TOTAL_SUPPLY.load(deps.storage)?,
            })?
        }
    })
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
