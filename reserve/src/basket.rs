//! Decomposition of the Ember basket.
//!
//! Every unit of Ember is backed 1:1 by a fixed-ratio basket of the two
//! reserve currencies. Decomposition is the only extraction path: it
//! consumes Ember value and yields the constituent Spark and Cinder
//! amounts, conserving value exactly.

use crate::coin::Coin;
use crate::currency::{Cinder, Ember, Spark};

/// Share of each Ember unit's value backed by Spark, in basis points.
/// The remainder of the basket is Cinder.
pub const SPARK_SHARE_BPS: u128 = 5_000;

const BPS_DENOM: u128 = 10_000;

/// Decompose Ember value into its two reserve constituents, in basket
/// order (Spark, then Cinder).
///
/// `spark + cinder == value` holds for every input: the Spark share is
/// rounded down and the remainder is assigned to Cinder, so no unit is
/// created or lost.
pub fn decompose(coin: Coin<Ember>) -> (Coin<Spark>, Coin<Cinder>) {
    let value = coin.into_value();
    // Split the multiply to stay within u128 for any value.
    let spark =
        (value / BPS_DENOM) * SPARK_SHARE_BPS + (value % BPS_DENOM) * SPARK_SHARE_BPS / BPS_DENOM;
    let cinder = value - spark;
    (Coin::new(spark), Coin::new(cinder))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decompose_values(value: u128) -> (u128, u128) {
        let (spark, cinder) = decompose(Coin::new(value));
        (spark.into_value(), cinder.into_value())
    }

    #[test]
    fn even_value_splits_at_the_ratio() {
        let (spark, cinder) = decompose_values(10_000);
        assert_eq!(spark, 5_000);
        assert_eq!(cinder, 5_000);
    }

    #[test]
    fn odd_remainder_goes_to_cinder() {
        let (spark, cinder) = decompose_values(3);
        assert_eq!(spark, 1);
        assert_eq!(cinder, 2);
        assert_eq!(spark + cinder, 3);
    }

    #[test]
    fn zero_decomposes_to_zero() {
        let (spark, cinder) = decompose_values(0);
        assert_eq!(spark, 0);
        assert_eq!(cinder, 0);
    }

    #[test]
    fn conservation_holds_near_u128_max() {
        let value = u128::MAX;
        let (spark, cinder) = decompose_values(value);
        assert_eq!(spark + cinder, value);
    }
}
