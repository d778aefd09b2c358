//! Custody Gateway Contract - Owner-Managed Asset Custody
//!
//! This contract holds deposited assets on behalf of depositors and keeps
//! per-depositor accounting for them.
//!
//! # Administration
//! - A single owner, set to the instantiating sender, manages the contract
//! - The owner maintains the allowlist of assets accepted for deposit
//! - Ownership moves by propose/accept
//!
//! # Deposit Flow
//! 1. Owner marks the asset as supported
//! 2. Depositor grants this contract a cw20 allowance
//! 3. Depositor calls `Deposit`; the contract pulls the tokens and credits
//!    the depositor's balance in the same transaction
//!
//! cw20 `Send` and native coin deposits credit the same ledger.
//!
//! # Upgrades
//! Code is replaced through `migrate`, which only bumps the cw2 version and
//! keeps all storage intact.

pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
