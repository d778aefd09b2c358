//! Custodial deposit handlers.
//!
//! Three ways in, one ledger:
//! - `Deposit` pulls a cw20 token the depositor has pre-approved
//! - `Receive` accepts a cw20 `Send` pushed into the contract
//! - `DepositNative` accepts the native coin attached to the message
//!
//! All validations run before the ledger is touched. For `Deposit` the
//! `TransferFrom` pull is dispatched after the credit within the same
//! transaction, so a failed pull reverts the credit with it.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, DepsMut, Env, MessageInfo, QuerierWrapper, Response, Storage,
    Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, Cw20ReceiveMsg};

use common::{Asset, AssetInfo};

use crate::error::ContractError;
use crate::events;
use crate::execute::ensure_supported;
use crate::msg::ReceiveMsg;
use crate::state::{BALANCES, TOTAL_CUSTODY};

// ============================================================================
// Deposit (cw20 allowance pull)
// ============================================================================

/// Pull `amount` of `token` from the sender and credit it.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    ensure_supported(deps.storage, &token)?;

    let token_addr = deps.api.addr_validate(&token)?;
    ensure_transfer_authorized(&deps.querier, &env, &token_addr, &info.sender, amount)?;

    let asset = Asset::new(
        AssetInfo::Cw20 {
            contract_addr: token_addr.clone(),
        },
        amount,
    );
    let balance = credit(deps.storage, &info.sender, &asset)?;

    let pull = WasmMsg::Execute {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(pull)
        .add_event(events::deposited(&info.sender, asset.info.key(), amount))
        .add_attribute("method", "deposit")
        .add_attribute("balance", balance))
}

/// Check the depositor's allowance to this contract and their balance
/// before anything is written.
fn ensure_transfer_authorized(
    querier: &QuerierWrapper,
    env: &Env,
    token: &Addr,
    owner: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let allowance: AllowanceResponse = querier
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Allowance {
                owner: owner.to_string(),
                spender: env.contract.address.to_string(),
            },
        )
        .map_err(|e| ContractError::TransferAuthorizationFailed {
            reason: e.to_string(),
        })?;

    if allowance.expires.is_expired(&env.block) {
        return Err(ContractError::TransferAuthorizationFailed {
            reason: "allowance expired".to_string(),
        });
    }
    if allowance.allowance < amount {
        return Err(ContractError::TransferAuthorizationFailed {
            reason: format!(
                "allowance {} is below deposit amount {}",
                allowance.allowance, amount
            ),
        });
    }

    let balance: BalanceResponse = querier
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: owner.to_string(),
            },
        )
        .map_err(|e| ContractError::TransferAuthorizationFailed {
            reason: e.to_string(),
        })?;

    if balance.balance < amount {
        return Err(ContractError::TransferAuthorizationFailed {
            reason: format!(
                "balance {} is below deposit amount {}",
                balance.balance, amount
            ),
        });
    }

    Ok(())
}

// ============================================================================
// Receive (cw20 send)
// ============================================================================

/// Credit cw20 tokens sent to this contract via cw20 `Send`.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    // The calling contract is the token; the cw20 sender is the depositor.
    let depositor = deps.api.addr_validate(&cw20_msg.sender)?;
    let amount = cw20_msg.amount;

    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::Deposit {} => {
            if amount.is_zero() {
                return Err(ContractError::ZeroAmount);
            }
            ensure_supported(deps.storage, info.sender.as_str())?;
            // Only a deployed contract can have moved tokens in before this hook.
            deps.querier
                .query_wasm_contract_info(&info.sender)
                .map_err(|_| ContractError::NotTokenContract {
                    address: info.sender.to_string(),
                })?;

            let asset = Asset::new(
                AssetInfo::Cw20 {
                    contract_addr: info.sender,
                },
                amount,
            );
            let balance = credit(deps.storage, &depositor, &asset)?;

            Ok(Response::new()
                .add_event(events::deposited(&depositor, asset.info.key(), amount))
                .add_attribute("method", "deposit_cw20")
                .add_attribute("balance", balance))
        }
    }
}

// ============================================================================
// DepositNative
// ============================================================================

/// Credit the single native coin attached to the message.
pub fn execute_deposit_native(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() > 1 {
        return Err(ContractError::InvalidFunds {
            reason: "Only one denom allowed per deposit".to_string(),
        });
    }

    let coin = &info.funds[0];
    if coin.amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    ensure_supported(deps.storage, &coin.denom)?;

    let asset = Asset::new(
        AssetInfo::Native {
            denom: coin.denom.clone(),
        },
        coin.amount,
    );
    let balance = credit(deps.storage, &info.sender, &asset)?;

    Ok(Response::new()
        .add_event(events::deposited(&info.sender, asset.info.key(), asset.amount))
        .add_attribute("method", "deposit_native")
        .add_attribute("balance", balance))
}

// ============================================================================
// Ledger
// ============================================================================

/// Add `asset.amount` to the depositor's balance and to the asset total.
///
/// Both sums are checked before either is written. Returns the new balance.
pub fn credit(
    storage: &mut dyn Storage,
    depositor: &Addr,
    asset: &Asset,
) -> Result<Uint128, ContractError> {
    let key = asset.info.key();

    let balance = BALANCES
        .may_load(storage, (depositor, key))?
        .unwrap_or_default()
        .checked_add(asset.amount)?;
    let total = TOTAL_CUSTODY
        .may_load(storage, key)?
        .unwrap_or_default()
        .checked_add(asset.amount)?;

    BALANCES.save(storage, (depositor, key), &balance)?;
    TOTAL_CUSTODY.save(storage, key, &total)?;

    Ok(balance)
}
