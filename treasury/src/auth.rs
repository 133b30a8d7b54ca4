//! Authorization guard.
//!
//! Pure predicates with no side effects; every treasury entry point calls
//! the relevant subset before touching state. Role issuance and the
//! decision of when bootstrap ends belong to the host; this module only
//! checks.

use crate::error::TreasuryError;
use ember_types::AccountAddress;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where the treasury is in its lifecycle.
///
/// One-time setup entry points are only valid during `Bootstrap`; the
/// host flips the phase to `Operating` once wiring is complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecyclePhase {
    Bootstrap,
    Operating,
}

impl LifecyclePhase {
    pub fn is_bootstrap(&self) -> bool {
        matches!(self, Self::Bootstrap)
    }
}

/// Accounts holding the treasury-compliance role.
///
/// Burning is gated on this role. Who receives it is external policy;
/// the registry is only the predicate surface the guard consumes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoleRegistry {
    compliance: HashSet<AccountAddress>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant_compliance(&mut self, account: AccountAddress) {
        self.compliance.insert(account);
    }

    pub fn is_compliance(&self, account: &AccountAddress) -> bool {
        self.compliance.contains(account)
    }
}

/// The canonical fee-authority address — the one account all fee vaults
/// live at. Fixed for the lifetime of the ledger.
pub fn fee_authority() -> AccountAddress {
    AccountAddress::new("emb_1feeauthority11111111111111111111111111111111111111111111111111")
}

/// Fail unless the treasury is still in its one-time setup phase.
pub fn require_bootstrap(phase: LifecyclePhase) -> Result<(), TreasuryError> {
    if !phase.is_bootstrap() {
        return Err(TreasuryError::NotInitializing);
    }
    Ok(())
}

/// Fail unless `account` is the fixed fee-authority address.
pub fn require_fee_authority(account: &AccountAddress) -> Result<(), TreasuryError> {
    if *account != fee_authority() {
        return Err(TreasuryError::WrongSingletonAddress {
            found: account.clone(),
        });
    }
    Ok(())
}

/// Fail unless `account` holds the treasury-compliance role.
pub fn require_compliance(
    roles: &RoleRegistry,
    account: &AccountAddress,
) -> Result<(), TreasuryError> {
    if !roles.is_compliance(account) {
        return Err(TreasuryError::MissingRole {
            account: account.clone(),
        });
    }
    Ok(())
}
