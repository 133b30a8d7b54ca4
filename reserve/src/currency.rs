//! Currency marker types.
//!
//! Each supported currency is a zero-sized marker implementing `Currency`,
//! so coins, staging areas, and burn capabilities of different currencies
//! are distinct types and cannot be mixed up at a call site.

use ember_types::CurrencyCode;

/// A currency the treasury can hold value in.
pub trait Currency: Sized + 'static {
    /// The runtime code identifying this currency.
    const CODE: CurrencyCode;
}

/// A currency that is directly backed and can be staged and burned.
///
/// The composite currency deliberately does not implement this: the only
/// way to destroy Ember value is to decompose it first.
pub trait ReserveCurrency: Currency {}

/// Reserve currency A.
#[derive(Clone, Copy, Debug)]
pub struct Spark;

/// Reserve currency B.
#[derive(Clone, Copy, Debug)]
pub struct Cinder;

/// The composite currency — a fixed-ratio basket of Spark and Cinder.
#[derive(Clone, Copy, Debug)]
pub struct Ember;

impl Currency for Spark {
    const CODE: CurrencyCode = CurrencyCode::Spark;
}

impl Currency for Cinder {
    const CODE: CurrencyCode = CurrencyCode::Cinder;
}

impl Currency for Ember {
    const CODE: CurrencyCode = CurrencyCode::Ember;
}

impl ReserveCurrency for Spark {}
impl ReserveCurrency for Cinder {}
