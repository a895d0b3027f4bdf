use cosmwasm_std::{OverflowError, StdError, Uint128};
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

    #[error("Unknown pool {pool_id}")]
    UnknownPool { pool_id: u64 },

    #[error("Not enough staked: {staked} < {amount}")]
    InsufficientStake { staked: Uint128, amount: Uint128 },
}

pub type ContractResult<T> = Result<T, ContractError>;
