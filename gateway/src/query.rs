//! Query handlers for the custody gateway contract.
//!
//! All queries are read-only and callable by anyone.

use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::execute::is_supported;
use crate::msg::{
    BalanceResponse, DepositorBalanceEntry, DepositorBalancesResponse, IsSupportedResponse,
    OwnerResponse, PendingOwnerResponse, SupportedTokenEntry, SupportedTokensResponse,
    TotalCustodyResponse,
};
use crate::state::{
    BALANCES, CONFIG, DEFAULT_LIMIT, MAX_LIMIT, PENDING_OWNER, SUPPORTED_TOKENS, TOTAL_CUSTODY,
};

// ============================================================================
// Access Control Queries
// ============================================================================

/// Query the current owner.
pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: config.owner,
    })
}

/// Query the proposed owner, if any.
pub fn query_pending_owner(deps: Deps) -> StdResult<PendingOwnerResponse> {
    Ok(PendingOwnerResponse {
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
    })
}

// ============================================================================
// Registry Queries
// ============================================================================

pub fn query_is_supported(deps: Deps, token: String) -> StdResult<IsSupportedResponse> {
    let supported = is_supported(deps.storage, &token)?;
    Ok(IsSupportedResponse { token, supported })
}

/// Query registry entries with pagination, including disabled ones.
pub fn query_supported_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<SupportedTokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = SUPPORTED_TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (token, supported) = item?;
            Ok(SupportedTokenEntry { token, supported })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(SupportedTokensResponse { tokens })
}

// ============================================================================
// Ledger Queries
// ============================================================================

/// Query one custodied balance. Unknown pairs report zero.
pub fn query_balance_of(deps: Deps, depositor: String, token: String) -> StdResult<BalanceResponse> {
    let depositor = deps.api.addr_validate(&depositor)?;
    let balance = BALANCES
        .may_load(deps.storage, (&depositor, token.as_str()))?
        .unwrap_or_default();

    Ok(BalanceResponse {
        depositor,
        token,
        balance,
    })
}

/// Query every custodied balance of a depositor with pagination.
pub fn query_depositor_balances(
    deps: Deps,
    depositor: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<DepositorBalancesResponse> {
    let depositor = deps.api.addr_validate(&depositor)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let balances = BALANCES
        .prefix(&depositor)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (token, balance) = item?;
            Ok(DepositorBalanceEntry { token, balance })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DepositorBalancesResponse {
        depositor,
        balances,
    })
}

/// Query the total custodied amount of an asset.
pub fn query_total_custody(deps: Deps, token: String) -> StdResult<TotalCustodyResponse> {
    let total = TOTAL_CUSTODY
        .may_load(deps.storage, &token)?
        .unwrap_or_default();
    Ok(TotalCustodyResponse { token, total })
}
