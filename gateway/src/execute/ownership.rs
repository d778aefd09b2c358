//! Owner guard and ownership transfer handlers.
//!
//! Exactly one owner exists after instantiation. Handover is two-step: the
//! owner proposes, the proposed address accepts.

use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::events;
use crate::state::{Config, CONFIG, PENDING_OWNER};

/// Load the config and fail unless `sender` is the current owner.
pub fn ensure_owner(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if *sender != config.owner {
        return Err(ContractError::NotAuthorized);
    }
    Ok(config)
}

/// Propose a new owner.
pub fn execute_propose_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let config = ensure_owner(deps.storage, &info.sender)?;

    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    PENDING_OWNER.save(deps.storage, &new_owner_addr)?;

    Ok(Response::new()
        .add_event(events::ownership_transfer_started(
            &config.owner,
            &new_owner_addr,
        ))
        .add_attribute("method", "propose_owner")
        .add_attribute("new_owner", new_owner_addr.to_string()))
}

/// Accept a pending ownership proposal.
pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending {
        return Err(ContractError::NotPendingOwner);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous_owner = std::mem::replace(&mut config.owner, pending);
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_event(events::ownership_transferred(&previous_owner, &config.owner))
        .add_attribute("method", "accept_ownership")
        .add_attribute("new_owner", config.owner.to_string()))
}

/// Cancel a pending ownership proposal.
pub fn execute_cancel_ownership_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new().add_attribute("method", "cancel_ownership_proposal"))
}
