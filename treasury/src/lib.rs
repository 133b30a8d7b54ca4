//! The ember fee treasury — the accounting and authorization core of the
//! fee lifecycle.
//!
//! Fees denominated in any supported currency accumulate in per-currency
//! vaults held at the fee-authority account. Under the treasury-compliance
//! role they are later destroyed: reserve currencies are staged and burned
//! directly, the Ember basket is first decomposed into its Spark and
//! Cinder constituents. Fee amounts and minting are the concern of
//! external collaborators; this crate only collects and burns.

pub mod auth;
pub mod engine;
pub mod error;
pub mod vault;

pub use auth::{fee_authority, LifecyclePhase, RoleRegistry};
pub use engine::{BurnReceipt, TreasuryEngine, VaultedCurrency};
pub use error::TreasuryError;
pub use vault::FeeVault;
