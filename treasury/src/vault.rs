//! Per-currency fee vault.

use ember_reserve::{Coin, Currency, Preburn};
use serde::{Deserialize, Serialize};

/// The singleton vault for currency `C`.
///
/// Holds every fee collected in `C` between collection and burning;
/// value never lives anywhere else in the meantime. The vault is created
/// once at bootstrap and persists indefinitely; each burn cycle drains
/// `balance` to zero and the next collection cycle refills it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FeeVault<C: Currency> {
    /// Accumulated, yet-unburned fee value.
    pub balance: Coin<C>,

    /// Staging area for the two-phase burn.
    pub preburn: Preburn<C>,

    /// Total value ever destroyed out of this vault (cumulative).
    pub total_burned: u128,
}

impl<C: Currency> FeeVault<C> {
    /// A fresh vault with zero balance and an empty staging area.
    pub fn new() -> Self {
        Self {
            balance: Coin::zero(),
            preburn: Preburn::new(),
            total_burned: 0,
        }
    }
}

impl<C: Currency> Default for FeeVault<C> {
    fn default() -> Self {
        Self::new()
    }
}
