//! Execute handlers for the custody gateway contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `ownership` - Owner guard and two-step ownership transfer
//! - `registry` - Supported token allowlist management
//! - `deposit` - Custodial deposits (cw20 pull, cw20 send, native)

mod deposit;
mod ownership;
mod registry;

pub use deposit::*;
pub use ownership::*;
pub use registry::*;
