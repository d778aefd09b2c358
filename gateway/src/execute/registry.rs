//! Supported token allowlist handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response, StdResult, Storage};

use crate::error::ContractError;
use crate::events;
use crate::execute::ensure_owner;
use crate::state::SUPPORTED_TOKENS;

/// Set the accepted flag for each token in the batch (last write wins).
pub fn execute_set_supported_tokens(
    deps: DepsMut,
    info: MessageInfo,
    tokens: Vec<String>,
    flags: Vec<bool>,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    if tokens.len() != flags.len() {
        return Err(ContractError::LengthMismatch {
            tokens: tokens.len(),
            flags: flags.len(),
        });
    }

    for (token, supported) in tokens.iter().zip(flags.iter()) {
        SUPPORTED_TOKENS.save(deps.storage, token, supported)?;
    }

    Ok(Response::new()
        .add_event(events::supported_token_updated(&tokens, &flags)?)
        .add_attribute("method", "set_supported_tokens")
        .add_attribute("count", tokens.len().to_string()))
}

/// Whether `token` is currently accepted. Unknown tokens are not.
pub fn is_supported(storage: &dyn Storage, token: &str) -> StdResult<bool> {
    Ok(SUPPORTED_TOKENS.may_load(storage, token)?.unwrap_or(false))
}

pub fn ensure_supported(storage: &dyn Storage, token: &str) -> Result<(), ContractError> {
    if !is_supported(storage, token)? {
        return Err(ContractError::UnsupportedAsset {
            token: token.to_string(),
        });
    }
    Ok(())
}
