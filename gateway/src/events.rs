//! Notifications emitted on successful state changes.
//!
//! Each notification is a typed wasm event whose attribute order is fixed;
//! off-chain observers index them as `wasm-<type>`. List-valued attributes
//! are JSON arrays so an empty batch still yields a non-empty value.

use cosmwasm_std::{to_json_string, Addr, Event, StdResult, Uint128};

pub const SUPPORTED_TOKEN_UPDATED: &str = "SupportedTokenUpdated";
pub const DEPOSITED: &str = "Deposited";
pub const OWNERSHIP_TRANSFER_STARTED: &str = "OwnershipTransferStarted";
pub const OWNERSHIP_TRANSFERRED: &str = "OwnershipTransferred";

/// `SupportedTokenUpdated(tokens, flags)` carrying the batch exactly as submitted.
pub fn supported_token_updated(tokens: &[String], flags: &[bool]) -> StdResult<Event> {
    Ok(Event::new(SUPPORTED_TOKEN_UPDATED)
        .add_attribute("tokens", to_json_string(&tokens)?)
        .add_attribute("flags", to_json_string(&flags)?))
}

/// `Deposited(depositor, token, amount)`
pub fn deposited(depositor: &Addr, token: &str, amount: Uint128) -> Event {
    Event::new(DEPOSITED)
        .add_attribute("depositor", depositor)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
}

/// `OwnershipTransferStarted(previous_owner, new_owner)`
pub fn ownership_transfer_started(previous_owner: &Addr, new_owner: &Addr) -> Event {
    Event::new(OWNERSHIP_TRANSFER_STARTED)
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("new_owner", new_owner)
}

/// `OwnershipTransferred(previous_owner, new_owner)`
pub fn ownership_transferred(previous_owner: &Addr, new_owner: &Addr) -> Event {
    Event::new(OWNERSHIP_TRANSFERRED)
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("new_owner", new_owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_token_updated_keeps_batch_order() {
        let event = supported_token_updated(
            &["weth".to_string(), "dai".to_string(), "weth".to_string()],
            &[true, false, false],
        )
        .unwrap();

        assert_eq!(event.ty, SUPPORTED_TOKEN_UPDATED);
        assert_eq!(event.attributes[0].key, "tokens");
        assert_eq!(event.attributes[0].value, r#"["weth","dai","weth"]"#);
        assert_eq!(event.attributes[1].key, "flags");
        assert_eq!(event.attributes[1].value, "[true,false,false]");
    }

    #[test]
    fn test_supported_token_updated_empty_batch() {
        let event = supported_token_updated(&[], &[]).unwrap();
        assert_eq!(event.attributes[0].value, "[]");
        assert_eq!(event.attributes[1].value, "[]");
    }

    #[test]
    fn test_deposited_field_order() {
        let event = deposited(
            &Addr::unchecked("depositor"),
            "usdc",
            Uint128::new(1_000_000_000_000_000_000),
        );

        let keys: Vec<&str> = event.attributes.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["depositor", "token", "amount"]);
        assert_eq!(event.attributes[2].value, "1000000000000000000");
    }
}
