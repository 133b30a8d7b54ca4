//! The ember reserve primitive — fungible value and the authority to destroy it.
//!
//! This crate handles:
//! - `Coin<C>`: owned fungible value that must be explicitly consumed
//! - `Preburn<C>`: the staging area value passes through before destruction
//! - `BurnCapability<C>` and its ledger of per-currency slots
//! - Decomposition of the Ember basket into its two reserve constituents

pub mod basket;
pub mod capability;
pub mod coin;
pub mod currency;
pub mod error;
pub mod preburn;

pub use capability::{BurnCapability, CapabilityLedger};
pub use coin::Coin;
pub use currency::{Cinder, Currency, Ember, ReserveCurrency, Spark};
pub use error::ReserveError;
pub use preburn::Preburn;
