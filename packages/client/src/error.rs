use cosmwasm_std::{Decimal256RangeExceeded, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ClientError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    DecimalRange(#[from] Decimal256RangeExceeded),

    #[error("Invalid number: {value:?}")]
    InvalidNumber { value: String },

    #[error("{value} has more than {decimals} decimals")]
    TooManyDecimals { value: String, decimals: u8 },

    #[error("not_have_enough")]
    NotHaveEnough {},

    #[error("Nothing to sell")]
    NothingToSell {},

    #[error("Submission failed: {error}")]
    Submission { error: String },
}

pub type ClientResult<T> = Result<T, ClientError>;
