use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError, Uint128};
use cw2::VersionError;
use mars_owner::OwnerError;
use thiserror::Error;

pub type ContractResult<T> = Result<T, ContractError>;

/// Reasons a route is rejected at registration
#[derive(Error, Debug, PartialEq)]
pub enum RouteError {
    #[error("route must contain at least one hop")]
    EmptyRoute,

    #[error("step {step}: pool {pool_id} does not contain input denom {denom}")]
    HopInputNotInPool {
        step: usize,
        pool_id: u64,
        denom: String,
    },

    #[error("step {step}: pool {pool_id} does not contain output denom {denom}")]
    HopOutputNotInPool {
        step: usize,
        pool_id: u64,
        denom: String,
    },

    #[error("step {step}: hop through pool {pool_id} does not change denom {denom}")]
    HopDoesNotChangeDenom {
        step: usize,
        pool_id: u64,
        denom: String,
    },

    #[error("route ends in {actual}, expected {expected}")]
    OutputMismatch {
        expected: String,
        actual: String,
    },
}

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Owner(#[from] OwnerError),

    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    CheckedMultiply(#[from] CheckedMultiplyRatioError),

    #[error("{user:?} is not authorized to {action:?}")]
    Unauthorized {
        user: String,
        action: String,
    },

    #[error("Invalid route: {0}")]
    InvalidRoute(#[from] RouteError),

    #[error("Pool {pool_id} not found")]
    PoolNotFound {
        pool_id: u64,
    },

    #[error("No route found from {input_denom} to {output_denom}")]
    RouteNotFound {
        input_denom: String,
        output_denom: String,
    },

    #[error("Insufficient funds. Expected: {expected}, received: {received}")]
    InsufficientFunds {
        expected: String,
        received: String,
    },

    #[error("Wrong denomination. Expected: {expected}, received: {received}")]
    WrongDenomination {
        expected: String,
        received: String,
    },

    #[error("Excess funds. Expected: {expected}, received: {received}")]
    ExcessFunds {
        expected: String,
        received: String,
    },

    #[error("Slippage exceeded for {denom}: minimum output {minimum}, actual output {actual}")]
    SlippageExceeded {
        denom: String,
        minimum: Uint128,
        actual: Uint128,
    },

    #[error("Swap backend failure: {reason}")]
    BackendFailure {
        reason: String,
    },

    #[error("Submessage Reply Error: {0}")]
    ReplyError(String),
}
