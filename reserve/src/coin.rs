//! Owned fungible value.
//!
//! Amounts are raw integer units (u128) to avoid floating-point errors.
//! A `Coin` is not `Clone` and refuses to be dropped while it still holds
//! value: every unit must leave through a sink, either a deposit into
//! another coin or destruction via a staged burn.

use crate::currency::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::mem;

/// An owned amount of currency `C`, in raw units.
#[must_use = "coin value must be deposited or burned, never discarded"]
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Coin<C: Currency> {
    amount: u128,
    #[serde(skip)]
    _currency: PhantomData<C>,
}

impl<C: Currency> Coin<C> {
    /// A coin holding no value. Zero coins may be dropped freely.
    pub fn zero() -> Self {
        Self {
            amount: 0,
            _currency: PhantomData,
        }
    }

    /// Create a coin holding `amount` raw units.
    ///
    /// This is the issuance boundary: externally minted value enters the
    /// fee subsystem here. Minting policy itself lives with the issuer.
    pub fn new(amount: u128) -> Self {
        Self {
            amount,
            _currency: PhantomData,
        }
    }

    /// The raw value held by this coin.
    pub fn value(&self) -> u128 {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Merge all of `other`'s value into this coin, consuming `other`.
    pub fn deposit(&mut self, other: Coin<C>) {
        self.amount += other.into_value();
    }

    /// Drain this coin to zero, returning the extracted value as a new coin.
    pub fn withdraw_all(&mut self) -> Coin<C> {
        Coin {
            amount: mem::replace(&mut self.amount, 0),
            _currency: PhantomData,
        }
    }

    /// Consume this coin, surrendering its value as a raw amount.
    ///
    /// Crate-internal: the only callers are the sinks themselves
    /// (deposit merging and staged burning) and basket decomposition.
    pub(crate) fn into_value(mut self) -> u128 {
        mem::replace(&mut self.amount, 0)
    }
}

impl<C: Currency> Drop for Coin<C> {
    fn drop(&mut self) {
        if self.amount != 0 && !std::thread::panicking() {
            panic!(
                "dropped {} raw units of {} without a sink",
                self.amount,
                C::CODE
            );
        }
    }
}

impl<C: Currency> fmt::Display for Coin<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, C::CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Spark;

    #[test]
    fn zero_coin_holds_nothing() {
        let coin: Coin<Spark> = Coin::zero();
        assert!(coin.is_zero());
        assert_eq!(coin.value(), 0);
    }

    #[test]
    fn deposit_merges_value() {
        let mut vault: Coin<Spark> = Coin::zero();
        vault.deposit(Coin::new(100));
        vault.deposit(Coin::new(50));
        assert_eq!(vault.value(), 150);
        assert_eq!(vault.into_value(), 150);
    }

    #[test]
    fn withdraw_all_drains_to_zero() {
        let mut vault: Coin<Spark> = Coin::new(700);
        let extracted = vault.withdraw_all();
        assert_eq!(extracted.value(), 700);
        assert!(vault.is_zero());
        assert_eq!(extracted.into_value(), 700);
    }

    #[test]
    fn withdraw_all_of_zero_is_zero() {
        let mut vault: Coin<Spark> = Coin::zero();
        let extracted = vault.withdraw_all();
        assert!(extracted.is_zero());
    }

    #[test]
    #[should_panic(expected = "without a sink")]
    fn dropping_nonzero_coin_panics() {
        let coin: Coin<Spark> = Coin::new(1);
        drop(coin);
    }

    #[test]
    fn dropping_zero_coin_is_silent() {
        let coin: Coin<Spark> = Coin::zero();
        drop(coin);
    }

    #[test]
    fn display_includes_currency_code() {
        let coin: Coin<Spark> = Coin::new(42);
        assert_eq!(coin.to_string(), "42 SPARK");
        assert_eq!(coin.into_value(), 42);
    }
}
