//! Message types for the custody gateway contract
//!
//! This module defines all messages for instantiation, execution, queries
//! and migration.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Instantiate message
///
/// Takes no arguments: the instantiating sender becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {}

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Asset Registry
    // ========================================================================
    /// Set the accepted flag for a batch of assets.
    ///
    /// Authorization: Owner only
    ///
    /// `tokens[i]` is set to `flags[i]`; a repeated token takes the flag of
    /// its last occurrence.
    SetSupportedTokens {
        /// Asset identifiers (cw20 contract address or native denom)
        tokens: Vec<String>,
        /// Accepted flag for each identifier, same length as `tokens`
        flags: Vec<bool>,
    },

    // ========================================================================
    // Deposits
    // ========================================================================
    /// Pull `amount` of a supported cw20 token from the sender into custody.
    ///
    /// Authorization: Anyone holding an allowance of at least `amount`
    /// granted to this contract.
    Deposit {
        /// cw20 contract address
        token: String,
        /// Amount to pull and credit
        amount: Uint128,
    },

    /// Deposit the single native coin attached to this message.
    DepositNative {},

    /// Deposit cw20 tokens pushed via cw20 `Send`.
    /// Implements the cw20 Receiver interface.
    Receive(cw20::Cw20ReceiveMsg),

    // ========================================================================
    // Ownership
    // ========================================================================
    /// Propose a new owner. Takes effect once the proposed address accepts.
    ProposeOwner { new_owner: String },

    /// Accept a pending ownership proposal (pending owner only).
    AcceptOwnership {},

    /// Withdraw the pending ownership proposal (owner only).
    CancelOwnershipProposal {},
}

/// Hook messages carried inside a cw20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    /// Credit the sent tokens to the cw20 sender
    Deposit {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current owner
    #[returns(OwnerResponse)]
    Owner {},

    /// Proposed owner awaiting acceptance
    #[returns(PendingOwnerResponse)]
    PendingOwner {},

    /// Whether an asset is accepted for deposit
    #[returns(IsSupportedResponse)]
    IsSupported { token: String },

    /// All registry entries, ascending by identifier
    #[returns(SupportedTokensResponse)]
    SupportedTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Custodied balance of one depositor for one asset
    #[returns(BalanceResponse)]
    BalanceOf { depositor: String, token: String },

    /// All custodied balances of one depositor, ascending by asset
    #[returns(DepositorBalancesResponse)]
    DepositorBalances {
        depositor: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Total custodied amount of one asset across all depositors
    #[returns(TotalCustodyResponse)]
    TotalCustody { token: String },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct IsSupportedResponse {
    pub token: String,
    pub supported: bool,
}

#[cw_serde]
pub struct SupportedTokenEntry {
    pub token: String,
    pub supported: bool,
}

#[cw_serde]
pub struct SupportedTokensResponse {
    pub tokens: Vec<SupportedTokenEntry>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub depositor: Addr,
    pub token: String,
    pub balance: Uint128,
}

#[cw_serde]
pub struct DepositorBalanceEntry {
    pub token: String,
    pub balance: Uint128,
}

#[cw_serde]
pub struct DepositorBalancesResponse {
    pub depositor: Addr,
    pub balances: Vec<DepositorBalanceEntry>,
}

#[cw_serde]
pub struct TotalCustodyResponse {
    pub token: String,
    pub total: Uint128,
}
