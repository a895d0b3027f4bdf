use cosmwasm_std::{OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("Slippage ruined your day")]
    SlippageExceeded {},

    #[error("Coin {denom} is not in the pool")]
    UnknownCoin { denom: String },

    #[error("Virtual price must not be zero")]
    ZeroVirtualPrice {},

    #[error("Nothing to withdraw")]
    NothingToWithdraw {},
}

pub type ContractResult<T> = Result<T, ContractError>;
