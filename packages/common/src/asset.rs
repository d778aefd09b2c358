//! Asset identifiers accepted by the gateway.
//!
//! Both native bank coins and cw20 tokens are addressed by a single string
//! key in contract storage: the denom for native coins, the contract address
//! for cw20 tokens.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

/// Kind and identity of an asset.
#[cw_serde]
pub enum AssetInfo {
    /// Native bank coin, e.g. `uluna`
    Native { denom: String },
    /// cw20 token contract
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    /// Storage key used by the allowlist and the ledger.
    pub fn key(&self) -> &str {
        match self {
            AssetInfo::Native { denom } => denom,
            AssetInfo::Cw20 { contract_addr } => contract_addr.as_str(),
        }
    }
}

/// An amount of a specific asset.
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn new(info: AssetInfo, amount: impl Into<Uint128>) -> Self {
        Self {
            info,
            amount: amount.into(),
        }
    }
}
