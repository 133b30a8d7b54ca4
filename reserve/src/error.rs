//! Reserve-specific errors.

use ember_types::{AccountAddress, CurrencyCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReserveError {
    #[error("burn capability for {currency} has already been granted")]
    CapabilityAlreadyGranted { currency: CurrencyCode },

    #[error("{account} does not hold the burn capability for {currency}")]
    CapabilityNotHeld {
        currency: CurrencyCode,
        account: AccountAddress,
    },
}
