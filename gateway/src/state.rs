//! State definitions for the custody gateway contract
//!
//! All persistent state lives here, separate from the handler logic, so a
//! migrated code version reads exactly the same storage layout.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration.
///
/// Its presence in storage is the initialization marker: it is written once
/// by `instantiate` and never removed.
#[cw_serde]
pub struct Config {
    /// The single identity allowed to perform administrative operations
    pub owner: Addr,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:custody-gateway";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default page size for enumeration queries
pub const DEFAULT_LIMIT: u32 = 10;

/// Maximum page size for enumeration queries
pub const MAX_LIMIT: u32 = 30;

// ============================================================================
// Access Control
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Proposed next owner (if any)
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

// ============================================================================
// Asset Registry
// ============================================================================

/// Accepted-for-deposit flags
/// Key: asset identifier (cw20 address or native denom), Value: accepted
pub const SUPPORTED_TOKENS: Map<&str, bool> = Map::new("supported_tokens");

// ============================================================================
// Custody Ledger
// ============================================================================

/// Custodied balances
/// Key: (depositor, asset identifier), Value: accumulated amount
pub const BALANCES: Map<(&Addr, &str), Uint128> = Map::new("balances");

/// Sum of all depositor balances per asset
/// Key: asset identifier, Value: total custodied amount
pub const TOTAL_CUSTODY: Map<&str, Uint128> = Map::new("total_custody");
