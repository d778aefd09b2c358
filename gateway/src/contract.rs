//! Custody Gateway Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_ownership, execute_cancel_ownership_proposal, execute_deposit,
    execute_deposit_native, execute_propose_owner, execute_receive, execute_set_supported_tokens,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_balance_of, query_depositor_balances, query_is_supported, query_owner,
    query_pending_owner, query_supported_tokens, query_total_custody,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

/// One-time initialization: the sender becomes the owner.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if CONFIG.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config { owner: info.sender };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Asset registry
        ExecuteMsg::SetSupportedTokens { tokens, flags } => {
            execute_set_supported_tokens(deps, info, tokens, flags)
        }

        // Deposits
        ExecuteMsg::Deposit { token, amount } => execute_deposit(deps, env, info, token, amount),
        ExecuteMsg::DepositNative {} => execute_deposit_native(deps, info),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),

        // Ownership
        ExecuteMsg::ProposeOwner { new_owner } => execute_propose_owner(deps, info, new_owner),
        ExecuteMsg::AcceptOwnership {} => execute_accept_ownership(deps, info),
        ExecuteMsg::CancelOwnershipProposal {} => execute_cancel_ownership_proposal(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::PendingOwner {} => to_json_binary(&query_pending_owner(deps)?),
        QueryMsg::IsSupported { token } => to_json_binary(&query_is_supported(deps, token)?),
        QueryMsg::SupportedTokens { start_after, limit } => {
            to_json_binary(&query_supported_tokens(deps, start_after, limit)?)
        }
        QueryMsg::BalanceOf { depositor, token } => {
            to_json_binary(&query_balance_of(deps, depositor, token)?)
        }
        QueryMsg::DepositorBalances {
            depositor,
            start_after,
            limit,
        } => to_json_binary(&query_depositor_balances(
            deps,
            depositor,
            start_after,
            limit,
        )?),
        QueryMsg::TotalCustody { token } => to_json_binary(&query_total_custody(deps, token)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

/// Swap in new code over the existing storage.
///
/// Never re-initializes: owner, allowlist and balances are left as they are.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            reason: format!("cannot migrate from contract {}", stored.contract),
        });
    }

    let stored_version = parse_version(&stored.version)?;
    let new_version = parse_version(CONTRACT_VERSION)?;
    if stored_version > new_version {
        return Err(ContractError::InvalidMigration {
            reason: format!("cannot downgrade from {stored_version} to {new_version}"),
        });
    }

    // Storage must already hold an initialized gateway.
    CONFIG.load(deps.storage)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored_version.to_string())
        .add_attribute("version", CONTRACT_VERSION))
}

fn parse_version(version: &str) -> Result<Version, ContractError> {
    version
        .parse::<Version>()
        .map_err(|e: semver::Error| ContractError::InvalidMigration {
            reason: format!("invalid version {version}: {e}"),
        })
}
