//! Error types for the custody gateway contract

use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Contract is already initialized")]
    AlreadyInitialized,

    #[error("Invalid migration: {reason}")]
    InvalidMigration { reason: String },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller is not the owner")]
    NotAuthorized,

    #[error("Unauthorized: caller is not the pending owner")]
    NotPendingOwner,

    #[error("No pending ownership transfer")]
    NoPendingOwner,

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Length mismatch: {tokens} tokens, {flags} flags")]
    LengthMismatch { tokens: usize, flags: usize },

    #[error("Token not supported: {token}")]
    UnsupportedAsset { token: String },

    // ========================================================================
    // Deposit Errors
    // ========================================================================

    #[error("Deposit amount must be greater than zero")]
    ZeroAmount,

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Caller is not a token contract: {address}")]
    NotTokenContract { address: String },

    #[error("Transfer authorization failed: {reason}")]
    TransferAuthorizationFailed { reason: String },

    #[error("Balance overflow")]
    Overflow(#[from] OverflowError),
}
