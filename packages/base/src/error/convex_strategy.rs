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

    #[error("Caller is not the Vault")]
    NotVault {},

    #[error("Caller is not the Vault or Governor")]
    NotVaultOrGovernor {},

    #[error("Must withdraw something")]
    InvalidZeroAmount {},

    #[error("Can not set an empty address as a reward token")]
    EmptyRewardTokenAddress {},

    #[error("Expected {expected} liquidation limits, got {actual}")]
    LiquidationLimitsLengthMismatch { expected: usize, actual: usize },

    #[error("No reward token at index {index}")]
    RewardTokenIndexOutOfRange { index: u32 },

    #[error("Asset {denom} is not supported")]
    UnsupportedAsset { denom: String },

    #[error("Cannot transfer supported asset")]
    CannotTransferSupportedAsset {},

    #[error("Insufficient LP balance: required {required}, available {available}")]
    InsufficientLpBalance {
        required: Uint128,
        available: Uint128,
    },

    #[error("Max slippage must be below 100%")]
    InvalidMaxSlippage {},

    #[error("unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

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
