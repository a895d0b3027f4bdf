use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use ovault_helpers::governance::GovernorError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    OwnershipError(#[from] OwnershipError),

    #[error(transparent)]
    GovernorError(#[from] GovernorError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("unauthorized")]
    Unauthorized,

    #[error("Amount must be greater than 0")]
    ZeroAmount {},

    #[error("Asset {denom} is not supported")]
    AssetNotSupported { denom: String },

    #[error("Asset {denom} already supported")]
    AssetAlreadySupported { denom: String },

    #[error("Strategy not approved")]
    StrategyNotApproved {},

    #[error("Strategy already approved")]
    StrategyAlreadyApproved {},

    #[error("Asset not supported by Strategy")]
    AssetNotSupportedByStrategy {},

    #[error("Mint amount lower than minimum")]
    MintBelowMinimum { minted: Uint128, minimum: Uint128 },

    #[error("Redeem amount lower than minimum")]
    RedeemBelowMinimum { output: Uint128, minimum: Uint128 },

    #[error("Liquidity error: no strategy holds {denom}")]
    NoStrategyForAsset { denom: String },

    #[error("Swap router not set")]
    SwapRouterNotSet {},

    #[error("Swap token {denom} already added")]
    SwapTokenAlreadyAdded { denom: String },

    #[error("Swap token {denom} not found")]
    SwapTokenNotFound { denom: String },

    #[error("Nothing to redeem")]
    NothingToRedeem {},

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("Can't migrate from {storage_contract_name} to {contract_name}")]
    MigrationError {
        storage_contract_name: String,
        contract_name: String,
    },
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}

pub type ContractResult<T> = Result<T, ContractError>;
