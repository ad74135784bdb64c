//! The marketplace fee schedule.
//!
//! # Tables
//!
//! | Table           | Keyed on               | Tiers                                                        |
//! |-----------------|------------------------|--------------------------------------------------------------|
//! | GT charge       | sale price             | ≤500 → 54.00, ≤1000 → 94.00, else 171.00                     |
//! | Commission rate | customer paid amount   | ≤200 → 33%, ≤300 → 22%, ≤400 → 19%, ≤500 → 22%, ≤800 → 24%, else 29% |
//! | Invoice tax     | customer paid amount   | <2500 → 5%, else 12%                                         |
//!
//! Royalty is a flat 10% of the customer paid amount, and commission carries
//! an 18% tax on top of the commission itself.
//!
//! The two 22% commission tiers are separate business rules and are kept as
//! separate rows.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::tiers::{TierTable, UpperBound};

/// The full set of fee rules applied to a sale.
#[derive(Debug, Clone, Copy)]
pub struct FeeSchedule {
    /// Flat GT charge, keyed on sale price.
    pub gt_charge: TierTable<Decimal>,
    /// Commission rate as a fraction, keyed on customer paid amount.
    pub commission_rate: TierTable<Decimal>,
    /// Invoice tax rate as a fraction, keyed on customer paid amount.
    pub invoice_tax_rate: TierTable<Decimal>,
    /// Royalty rate applied to customer paid amount.
    pub royalty_rate: Decimal,
    /// Tax rate levied on the commission itself.
    pub commission_tax_rate: Decimal,
}

impl FeeSchedule {
    /// The schedule currently in force.
    pub const CURRENT: FeeSchedule = FeeSchedule {
        gt_charge: TierTable::new(
            &[
                (UpperBound::AtMost(dec!(500)), dec!(54.00)),
                (UpperBound::AtMost(dec!(1000)), dec!(94.00)),
            ],
            dec!(171.00),
        ),
        commission_rate: TierTable::new(
            &[
                (UpperBound::AtMost(dec!(200)), dec!(0.33)),
                (UpperBound::AtMost(dec!(300)), dec!(0.22)),
                (UpperBound::AtMost(dec!(400)), dec!(0.19)),
                (UpperBound::AtMost(dec!(500)), dec!(0.22)),
                (UpperBound::AtMost(dec!(800)), dec!(0.24)),
            ],
            dec!(0.29),
        ),
        invoice_tax_rate: TierTable::new(
            &[(UpperBound::Below(dec!(2500)), dec!(0.05))],
            dec!(0.12),
        ),
        royalty_rate: dec!(0.10),
        commission_tax_rate: dec!(0.18),
    };
}
