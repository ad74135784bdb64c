//! Ordered tier tables keyed on a decimal amount.
//!
//! A [`TierTable`] is an ascending list of `(upper bound, value)` pairs
//! followed by a catch-all value. Lookup walks the list in order and returns
//! the value of the first tier whose bound admits the key, so every key
//! resolves to exactly one value.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//! use payout_core::calculations::{TierTable, UpperBound};
//!
//! const FEES: TierTable<Decimal> = TierTable::new(
//!     &[
//!         (UpperBound::AtMost(dec!(500)), dec!(54.00)),
//!         (UpperBound::AtMost(dec!(1000)), dec!(94.00)),
//!     ],
//!     dec!(171.00),
//! );
//!
//! assert_eq!(FEES.lookup(dec!(500)), dec!(54.00));
//! assert_eq!(FEES.lookup(dec!(500.01)), dec!(94.00));
//! assert_eq!(FEES.lookup(dec!(25000)), dec!(171.00));
//! ```

use rust_decimal::Decimal;

/// The upper limit of a single tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// Keys less than or equal to the limit fall in the tier.
    AtMost(Decimal),
    /// Keys strictly less than the limit fall in the tier.
    Below(Decimal),
}

impl UpperBound {
    /// Returns `true` if `key` falls at or under this bound.
    pub fn admits(
        &self,
        key: Decimal,
    ) -> bool {
        match *self {
            Self::AtMost(limit) => key <= limit,
            Self::Below(limit) => key < limit,
        }
    }

    /// The numeric limit, regardless of inclusivity.
    pub fn limit(&self) -> Decimal {
        match *self {
            Self::AtMost(limit) | Self::Below(limit) => limit,
        }
    }
}

/// An ordered tier table with a catch-all value above the last bound.
///
/// Tables are meant to be declared as `const` items; the tier slice is
/// `'static` and never changes after compilation.
#[derive(Debug, Clone, Copy)]
pub struct TierTable<T: 'static> {
    tiers: &'static [(UpperBound, T)],
    otherwise: T,
}

impl<T: 'static> TierTable<T> {
    /// Creates a table from tiers sorted by ascending bound and the value used
    /// when no tier admits the key.
    pub const fn new(
        tiers: &'static [(UpperBound, T)],
        otherwise: T,
    ) -> Self {
        Self { tiers, otherwise }
    }
}

impl<T: Copy + 'static> TierTable<T> {
    /// Returns the value of the first tier whose bound admits `key`, or the
    /// catch-all value if none does.
    pub fn lookup(
        &self,
        key: Decimal,
    ) -> T {
        self.tiers
            .iter()
            .find(|(bound, _)| bound.admits(key))
            .map(|&(_, value)| value)
            .unwrap_or(self.otherwise)
    }

    /// Every value the table can produce, in tier order, catch-all last.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.tiers
            .iter()
            .map(|&(_, value)| value)
            .chain(std::iter::once(self.otherwise))
    }

    /// Returns `true` if the bounds are strictly ascending.
    ///
    /// A table that is not ascending has tiers that can never match.
    pub fn is_ascending(&self) -> bool {
        self.tiers
            .windows(2)
            .all(|pair| pair[0].0.limit() < pair[1].0.limit())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const INCLUSIVE: TierTable<u8> = TierTable::new(
        &[
            (UpperBound::AtMost(dec!(100)), 1),
            (UpperBound::AtMost(dec!(200)), 2),
        ],
        3,
    );

    const EXCLUSIVE: TierTable<u8> = TierTable::new(&[(UpperBound::Below(dec!(100)), 1)], 2);

    const CATCH_ALL_ONLY: TierTable<u8> = TierTable::new(&[], 9);

    // =========================================================================
    // UpperBound tests
    // =========================================================================

    #[test]
    fn at_most_admits_the_limit_itself() {
        assert!(UpperBound::AtMost(dec!(500)).admits(dec!(500.00)));
        assert!(!UpperBound::AtMost(dec!(500)).admits(dec!(500.01)));
    }

    #[test]
    fn below_rejects_the_limit_itself() {
        assert!(UpperBound::Below(dec!(2500)).admits(dec!(2499.99)));
        assert!(!UpperBound::Below(dec!(2500)).admits(dec!(2500)));
    }

    // =========================================================================
    // lookup tests
    // =========================================================================

    #[test]
    fn lookup_returns_first_tier_for_small_keys() {
        assert_eq!(INCLUSIVE.lookup(dec!(0)), 1);
        assert_eq!(INCLUSIVE.lookup(dec!(-40)), 1);
    }

    #[test]
    fn lookup_uses_inclusive_upper_bound() {
        assert_eq!(INCLUSIVE.lookup(dec!(100)), 1);
        assert_eq!(INCLUSIVE.lookup(dec!(100.0001)), 2);
        assert_eq!(INCLUSIVE.lookup(dec!(200)), 2);
    }

    #[test]
    fn lookup_falls_through_to_catch_all() {
        assert_eq!(INCLUSIVE.lookup(dec!(200.01)), 3);
        assert_eq!(INCLUSIVE.lookup(dec!(1000000)), 3);
    }

    #[test]
    fn lookup_uses_exclusive_upper_bound() {
        assert_eq!(EXCLUSIVE.lookup(dec!(99.99)), 1);
        assert_eq!(EXCLUSIVE.lookup(dec!(100)), 2);
    }

    #[test]
    fn lookup_on_catch_all_only_table() {
        assert_eq!(CATCH_ALL_ONLY.lookup(dec!(42)), 9);
        assert_eq!(CATCH_ALL_ONLY.values().collect::<Vec<_>>(), vec![9]);
    }

    // =========================================================================
    // table shape tests
    // =========================================================================

    #[test]
    fn values_lists_catch_all_last() {
        let values: Vec<u8> = INCLUSIVE.values().collect();

        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn is_ascending_detects_out_of_order_bounds() {
        const SHUFFLED: TierTable<u8> = TierTable::new(
            &[
                (UpperBound::AtMost(dec!(200)), 1),
                (UpperBound::AtMost(dec!(100)), 2),
            ],
            3,
        );

        assert!(INCLUSIVE.is_ascending());
        assert!(!SHUFFLED.is_ascending());
    }
}
