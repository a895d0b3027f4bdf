use cosmwasm_std::{
    attr, ensure, entry_point, to_json_binary, Attribute, BankMsg, Binary, Coin, Deps, DepsMut,
    Env, MessageInfo, Response, Storage, Uint128,
};
use cw_utils::one_coin;
use ovault_base::{
    error::swap_router::{ContractError, ContractResult},
    msg::swap_router::{ExecuteMsg, InstantiateMsg, QueryMsg},
    state::swap_router::{SwapRoute, ROUTES},
};
use ovault_helpers::{
    answer::{attr_coin, response},
    decimals::scale_by,
};

pub const CONTRACT_NAME: &str = concat!("crates.io:ovault__", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Every route is priced 1:1 after decimal rescaling. Output is paid from
// the router's own balance.

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let attrs = save_routes(deps.storage, msg.routes)?;
    Ok(response("instantiate", CONTRACT_NAME, attrs))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::SetRoutes { routes } => {
            let attrs = save_routes(deps.storage, routes)?;
            Ok(response("set_routes", CONTRACT_NAME, attrs))
        }
        ExecuteMsg::Swap {
            minimum_receive,
            to,
        } => execute_swap(deps, info, minimum_receive, to),
    }
}

fn save_routes(
    storage: &mut dyn Storage,
    routes: Vec<SwapRoute>,
) -> ContractResult<Vec<Attribute>> {
    let mut attrs = vec![];
    for route in routes {
        attrs.push(attr(
            "route",
            format!("{}->{}", route.from_denom, route.to_denom),
        ));
        ROUTES.save(storage, &route.from_denom, &route)?;
    }
    Ok(attrs)
}

fn simulate(deps: Deps, offer: &Coin) -> ContractResult<Coin> {
    let route = ROUTES
        .may_load(deps.storage, &offer.denom)?
        .ok_or_else(|| ContractError::NoRoute {
            denom: offer.denom.clone(),
        })?;
    let amount = scale_by(offer.amount, route.to_decimals, route.from_decimals)?;
    Ok(Coin::new(amount.u128(), route.to_denom))
}

fn execute_swap(
    deps: DepsMut,
    info: MessageInfo,
    minimum_receive: Option<Uint128>,
    to: Option<String>,
) -> ContractResult<Response> {
    let offer = one_coin(&info)?;
    let receive = simulate(deps.as_ref(), &offer)?;
    if let Some(minimum) = minimum_receive {
        ensure!(
            receive.amount >= minimum,
            ContractError::BelowMinimum {
                amount: receive.amount,
                minimum,
            }
        );
    }
    let to = match to {
        Some(to) => deps.api.addr_validate(&to)?,
        None => info.sender,
    };

    Ok(response(
        "swap",
        CONTRACT_NAME,
        [
            attr_coin("offer", offer.amount, &offer.denom),
            attr_coin("receive", receive.amount, &receive.denom),
            attr("to", to.to_string()),
        ],
    )
    .add_message(BankMsg::Send {
        to_address: to.to_string(),
        amount: vec![receive],
    }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    Ok(match msg {
        QueryMsg::Route { from_denom } => {
            to_json_binary(&ROUTES.may_load(deps.storage, &from_denom)?)?
        }
        QueryMsg::SimulateSwap { offer } => to_json_binary(&simulate(deps, &offer)?)?,
    })
}
