use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Every figure derived from a single sale.
///
/// Values are exact; use [`CalculationResult::rounded`] for the two-decimal
/// amounts shown on a settlement statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// MRP minus discount.
    pub sale_price: Decimal,

    /// Flat GT charge selected by sale price tier.
    pub gt_charge: Decimal,

    /// Sale price minus GT charge.
    /// Negative when the sale price is below the GT charge.
    pub customer_paid_amount: Decimal,

    /// 10% of customer paid amount.
    pub royalty_fee: Decimal,

    /// Commission rate as a fraction (e.g. `0.29`).
    pub commission_rate: Decimal,

    /// Customer paid amount × commission rate.
    pub commission_base: Decimal,

    /// 18% tax levied on the commission base.
    pub commission_tax: Decimal,

    /// Commission base plus commission tax.
    pub final_commission: Decimal,

    /// Invoice tax rate as a fraction, `0.05` or `0.12`.
    pub invoice_tax_rate: Decimal,

    /// Customer paid amount × invoice tax rate.
    pub taxable_amount_value: Decimal,

    /// Customer paid amount minus final commission minus royalty fee.
    pub net_payout: Decimal,
}

impl CalculationResult {
    /// Returns a copy with every monetary amount rounded half-up to two
    /// decimal places. Rates are left untouched.
    pub fn rounded(&self) -> Self {
        Self {
            sale_price: round_half_up(self.sale_price),
            gt_charge: round_half_up(self.gt_charge),
            customer_paid_amount: round_half_up(self.customer_paid_amount),
            royalty_fee: round_half_up(self.royalty_fee),
            commission_rate: self.commission_rate,
            commission_base: round_half_up(self.commission_base),
            commission_tax: round_half_up(self.commission_tax),
            final_commission: round_half_up(self.final_commission),
            invoice_tax_rate: self.invoice_tax_rate,
            taxable_amount_value: round_half_up(self.taxable_amount_value),
            net_payout: round_half_up(self.net_payout),
        }
    }
}
