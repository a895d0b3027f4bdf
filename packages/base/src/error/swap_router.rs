use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("No route for {denom}")]
    NoRoute { denom: String },

    #[error("Swap output {amount} is below minimum {minimum}")]
    BelowMinimum { amount: Uint128, minimum: Uint128 },
}

pub type ContractResult<T> = Result<T, ContractError>;
