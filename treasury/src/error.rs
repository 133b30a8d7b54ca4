//! Treasury-specific errors.
//!
//! Every failure aborts the whole call and is reported to the caller
//! unchanged. None are transient: retrying requires a different account
//! or a different lifecycle phase.

use ember_types::{AccountAddress, CurrencyCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreasuryError {
    #[error("treasury setup is only allowed during bootstrap")]
    NotInitializing,

    #[error("{found} is not the fee authority account")]
    WrongSingletonAddress { found: AccountAddress },

    #[error("{account} does not hold the treasury compliance role")]
    MissingRole { account: AccountAddress },

    #[error("a fee vault for {currency} already exists")]
    DuplicateVault { currency: CurrencyCode },

    #[error("{account} does not hold the burn token for {currency}")]
    TokenNotHeld {
        currency: CurrencyCode,
        account: AccountAddress,
    },

    #[error("no fee vault exists for {currency}")]
    VaultNotFound { currency: CurrencyCode },

    #[error("storage error: {0}")]
    Store(String),
}
