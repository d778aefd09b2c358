//! Common - Shared Types for the Custody Gateway Contracts
//!
//! This package provides the asset vocabulary shared between the gateway
//! contract and anything that builds messages for it.

pub mod asset;

pub use asset::{Asset, AssetInfo};
