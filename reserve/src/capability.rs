//! Burn authority.
//!
//! Destroying value of a reserve currency requires a `BurnCapability` for
//! that currency. Exactly one exists per currency, issued once and kept in
//! a ledger slot owned by a privileged account. Operations that burn must
//! withdraw the capability from its slot, use it, and restore it before
//! returning. A slot left empty would permanently block every later burn.

use crate::currency::ReserveCurrency;
use crate::error::ReserveError;
use ember_types::{AccountAddress, CurrencyCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::marker::PhantomData;

/// Proof of the right to destroy value of currency `C`.
///
/// Not `Clone`, not serializable, and constructible only by
/// `CapabilityLedger::withdraw`: holding one means the ledger slot for
/// `C` is currently empty.
#[derive(Debug)]
pub struct BurnCapability<C: ReserveCurrency> {
    _currency: PhantomData<C>,
}

/// One authoritative slot per reserve currency.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CapabilitySlot {
    owner: AccountAddress,
    /// Whether the capability is currently sitting in the slot
    /// (false while borrowed by an in-flight burn).
    held: bool,
}

/// The registry of burn-capability slots.
///
/// Enforces "exactly one live capability per currency" at runtime: `grant`
/// refuses a second issuance, `withdraw` refuses while the token is out or
/// presented by the wrong account, and `restore` is the only way to put a
/// withdrawn token back.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CapabilityLedger {
    slots: HashMap<CurrencyCode, CapabilitySlot>,
}

impl CapabilityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the capability for `C`, placing it in a slot owned by `owner`.
    ///
    /// One-time: fails if the capability for `C` has ever been granted.
    pub fn grant<C: ReserveCurrency>(&mut self, owner: AccountAddress) -> Result<(), ReserveError> {
        if self.slots.contains_key(&C::CODE) {
            return Err(ReserveError::CapabilityAlreadyGranted { currency: C::CODE });
        }
        self.slots.insert(C::CODE, CapabilitySlot { owner, held: true });
        Ok(())
    }

    /// Take the capability for `C` out of its slot.
    ///
    /// Fails unless the slot exists, belongs to `account`, and the token
    /// is currently in it.
    pub fn withdraw<C: ReserveCurrency>(
        &mut self,
        account: &AccountAddress,
    ) -> Result<BurnCapability<C>, ReserveError> {
        match self.slots.get_mut(&C::CODE) {
            Some(slot) if slot.held && slot.owner == *account => {
                slot.held = false;
                Ok(BurnCapability {
                    _currency: PhantomData,
                })
            }
            _ => Err(ReserveError::CapabilityNotHeld {
                currency: C::CODE,
                account: account.clone(),
            }),
        }
    }

    /// Put a withdrawn capability back in its slot.
    ///
    /// The slot's owner is untouched, so the token always returns to the
    /// account that held it before the withdraw.
    pub fn restore<C: ReserveCurrency>(&mut self, cap: BurnCapability<C>) {
        let _ = cap;
        if let Some(slot) = self.slots.get_mut(&C::CODE) {
            slot.held = true;
        }
    }

    /// The account owning the slot for `C`, if the capability was granted.
    pub fn holder<C: ReserveCurrency>(&self) -> Option<&AccountAddress> {
        self.slots.get(&C::CODE).map(|slot| &slot.owner)
    }

    /// Whether the capability for `C` is currently sitting in its slot.
    pub fn is_held<C: ReserveCurrency>(&self) -> bool {
        self.slots.get(&C::CODE).is_some_and(|slot| slot.held)
    }
}
