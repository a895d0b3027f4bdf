use cosmwasm_std::{Addr, StdError, Storage};
use cw_ownable::OwnershipError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GovernorError {
    #[error("Caller is not the Governor")]
    NotGovernor {},

    #[error("Caller is not the Strategist or Governor")]
    NotStrategistOrGovernor {},

    #[error("{0}")]
    OwnershipError(OwnershipError),

    #[error("{0}")]
    Std(#[from] StdError),
}

impl From<OwnershipError> for GovernorError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::NotOwner | OwnershipError::NoOwner => Self::NotGovernor {},
            OwnershipError::Std(err) => Self::Std(err),
            other => Self::OwnershipError(other),
        }
    }
}

/// The governor is the `cw_ownable` owner of the contract.
pub fn assert_governor(storage: &dyn Storage, sender: &Addr) -> Result<(), GovernorError> {
    cw_ownable::assert_owner(storage, sender)?;
    Ok(())
}

pub fn assert_strategist_or_governor(
    storage: &dyn Storage,
    sender: &Addr,
    strategist: Option<&Addr>,
) -> Result<(), GovernorError> {
    if strategist == Some(sender) {
        return Ok(());
    }
    match assert_governor(storage, sender) {
        Err(GovernorError::NotGovernor {}) => Err(GovernorError::NotStrategistOrGovernor {}),
        other => other,
    }
}
