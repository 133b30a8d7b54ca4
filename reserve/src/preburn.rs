//! Pre-burn staging.
//!
//! Destruction is two-phase: value is first staged in a `Preburn` cell,
//! then burned with the matching `BurnCapability` present. The split
//! guarantees the authority to destroy is in hand at the moment of
//! destruction, not merely at the moment of request.

use crate::capability::BurnCapability;
use crate::coin::Coin;
use crate::currency::{Currency, ReserveCurrency};
use serde::{Deserialize, Serialize};

/// Staging area for value awaiting destruction.
///
/// Every currency has one (each fee vault carries its own), but only
/// reserve currencies expose `burn`; composite value must be decomposed
/// and staged in its constituents' cells instead.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Preburn<C: Currency> {
    pending: Coin<C>,
}

impl<C: Currency> Preburn<C> {
    pub fn new() -> Self {
        Self {
            pending: Coin::zero(),
        }
    }

    /// Stage a coin for destruction, merging with anything already pending.
    pub fn stage(&mut self, coin: Coin<C>) {
        self.pending.deposit(coin);
    }

    /// The raw value currently staged.
    pub fn pending_value(&self) -> u128 {
        self.pending.value()
    }
}

impl<C: ReserveCurrency> Preburn<C> {
    /// Destroy everything staged. Returns the amount destroyed.
    ///
    /// The capability reference is the proof of authority; without one
    /// there is no way to call this.
    pub fn burn(&mut self, _cap: &BurnCapability<C>) -> u128 {
        self.pending.withdraw_all().into_value()
    }
}

impl<C: Currency> Default for Preburn<C> {
    fn default() -> Self {
        Self::new()
    }
}
