//! Currency codes for the currencies the treasury accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the supported currencies.
///
/// Spark and Cinder are reserve currencies: directly backed and burnable.
/// Ember is the composite currency, a fixed-ratio basket of Spark and
/// Cinder, decomposable into its constituents but never burned directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    Spark,
    Cinder,
    Ember,
}

impl CurrencyCode {
    /// Whether this currency can be staged and burned directly.
    pub fn is_reserve(&self) -> bool {
        matches!(self, Self::Spark | Self::Cinder)
    }

    /// The two reserve constituents of a composite currency, in basket order.
    /// `None` for reserve currencies.
    pub fn constituents(&self) -> Option<(CurrencyCode, CurrencyCode)> {
        match self {
            Self::Ember => Some((Self::Spark, Self::Cinder)),
            Self::Spark | Self::Cinder => None,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spark => "SPARK",
            Self::Cinder => "CINDER",
            Self::Ember => "EMBER",
        };
        write!(f, "{}", name)
    }
}
