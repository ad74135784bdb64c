//! Seller payout calculation for a single marketplace sale.
//!
//! This module turns a listed price (MRP) and a discount into the amount
//! settled to the seller, exposing every intermediate figure along the way.
//!
//! # Calculation Steps
//!
//! | Step | Figure                 | Formula                                          |
//! |------|------------------------|--------------------------------------------------|
//! | 1    | Sale price             | MRP − discount                                   |
//! | 2    | GT charge              | Tiered on sale price                             |
//! | 3    | Customer paid amount   | Sale price − GT charge                           |
//! | 4    | Royalty fee            | Customer paid amount × 10%                       |
//! | 5    | Commission rate        | Tiered on customer paid amount                   |
//! | 6    | Commission base        | Customer paid amount × commission rate           |
//! | 7    | Commission tax         | Commission base × 18%                            |
//! | 8    | Final commission       | Commission base × 1.18                           |
//! | 9    | Invoice tax rate       | 12% if customer paid amount ≥ 2500, else 5%      |
//! | 10   | Taxable amount value   | Customer paid amount × invoice tax rate          |
//! | 11   | Net payout             | Customer paid amount − final commission − royalty |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payout_core::PayoutCalculator;
//!
//! let calculator = PayoutCalculator::new();
//! let result = calculator.compute(dec!(1500), dec!(0)).unwrap();
//!
//! assert_eq!(result.gt_charge, dec!(171.00));
//! assert_eq!(result.customer_paid_amount, dec!(1329.00));
//! assert_eq!(result.commission_rate, dec!(0.29));
//! assert_eq!(result.rounded().final_commission, dec!(454.78));
//! assert_eq!(result.rounded().net_payout, dec!(741.32));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::FeeSchedule;
use crate::{CalculationInput, CalculationResult};

/// Errors raised when sale inputs cannot produce a payout.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum InvalidInputError {
    /// The discount is larger than the listed price, so the sale price
    /// would be negative.
    #[error("discount exceeds MRP (discount {discount}, MRP {mrp})")]
    DiscountExceedsMrp { mrp: Decimal, discount: Decimal },

    /// The listed price must be greater than zero.
    #[error("MRP must be greater than zero, got {0}")]
    NonPositiveMrp(Decimal),

    /// The discount must not be negative.
    #[error("discount must not be negative, got {0}")]
    NegativeDiscount(Decimal),
}

/// Calculator for seller payouts.
///
/// Holds the fee schedule in force and applies it to validated inputs. The
/// calculator carries no mutable state, so one instance may be shared freely
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct PayoutCalculator {
    schedule: FeeSchedule,
}

impl PayoutCalculator {
    /// Creates a calculator using [`FeeSchedule::CURRENT`].
    pub fn new() -> Self {
        Self {
            schedule: FeeSchedule::CURRENT,
        }
    }

    /// Validates the inputs and calculates the payout.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if:
    /// - `discount` exceeds `mrp`
    /// - `mrp` is zero or negative
    /// - `discount` is negative
    ///
    /// No partial result is produced on error.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use payout_core::{InvalidInputError, PayoutCalculator};
    ///
    /// let calculator = PayoutCalculator::new();
    /// let result = calculator.compute(dec!(100), dec!(150));
    ///
    /// assert_eq!(
    ///     result,
    ///     Err(InvalidInputError::DiscountExceedsMrp { mrp: dec!(100), discount: dec!(150) })
    /// );
    /// ```
    pub fn compute(
        &self,
        mrp: Decimal,
        discount: Decimal,
    ) -> Result<CalculationResult, InvalidInputError> {
        let input = CalculationInput::new(mrp, discount)?;
        Ok(self.calculate(&input))
    }

    /// Calculates the payout for inputs that have already been validated.
    pub fn calculate(
        &self,
        input: &CalculationInput,
    ) -> CalculationResult {
        // Step 1-3: Price after discount and the flat GT charge
        let sale_price = input.sale_price();
        let gt_charge = self.gt_charge(sale_price);
        let customer_paid_amount = self.customer_paid_amount(sale_price, gt_charge);

        if customer_paid_amount < Decimal::ZERO {
            warn!(
                sale_price = %sale_price,
                gt_charge = %gt_charge,
                "sale price below GT charge; customer paid amount is negative"
            );
        }

        // Step 4: Royalty
        let royalty_fee = self.royalty_fee(customer_paid_amount);

        // Step 5-8: Commission and the tax levied on it
        let commission_rate = self.commission_rate(customer_paid_amount);
        let commission_base = self.commission_base(customer_paid_amount, commission_rate);
        let commission_tax = self.commission_tax(commission_base);
        let final_commission = self.final_commission(commission_base);

        // Step 9-10: Invoice tax
        let invoice_tax_rate = self.invoice_tax_rate(customer_paid_amount);
        let taxable_amount_value =
            self.taxable_amount_value(customer_paid_amount, invoice_tax_rate);

        // Step 11: Settlement
        let net_payout = self.net_payout(customer_paid_amount, final_commission, royalty_fee);

        debug!(
            mrp = %input.mrp(),
            discount = %input.discount(),
            %sale_price,
            %gt_charge,
            %customer_paid_amount,
            %commission_rate,
            %final_commission,
            %royalty_fee,
            %net_payout,
            "calculated payout"
        );

        if net_payout < Decimal::ZERO {
            warn!(%net_payout, "fees exceed customer paid amount; payout is negative");
        }

        CalculationResult {
            sale_price,
            gt_charge,
            customer_paid_amount,
            royalty_fee,
            commission_rate,
            commission_base,
            commission_tax,
            final_commission,
            invoice_tax_rate,
            taxable_amount_value,
            net_payout,
        }
    }

    /// Selects the GT charge for the sale price.
    fn gt_charge(
        &self,
        sale_price: Decimal,
    ) -> Decimal {
        self.schedule.gt_charge.lookup(sale_price)
    }

    /// Calculates the amount the customer pays after the GT charge.
    fn customer_paid_amount(
        &self,
        sale_price: Decimal,
        gt_charge: Decimal,
    ) -> Decimal {
        sale_price - gt_charge
    }

    /// Calculates the royalty fee.
    fn royalty_fee(
        &self,
        customer_paid_amount: Decimal,
    ) -> Decimal {
        customer_paid_amount * self.schedule.royalty_rate
    }

    /// Selects the commission rate for the customer paid amount.
    fn commission_rate(
        &self,
        customer_paid_amount: Decimal,
    ) -> Decimal {
        self.schedule.commission_rate.lookup(customer_paid_amount)
    }

    /// Calculates commission before tax.
    fn commission_base(
        &self,
        customer_paid_amount: Decimal,
        commission_rate: Decimal,
    ) -> Decimal {
        customer_paid_amount * commission_rate
    }

    /// Calculates the tax levied on the commission.
    fn commission_tax(
        &self,
        commission_base: Decimal,
    ) -> Decimal {
        commission_base * self.schedule.commission_tax_rate
    }

    /// Calculates commission including its tax.
    fn final_commission(
        &self,
        commission_base: Decimal,
    ) -> Decimal {
        commission_base * (Decimal::ONE + self.schedule.commission_tax_rate)
    }

    /// Selects the invoice tax rate for the customer paid amount.
    fn invoice_tax_rate(
        &self,
        customer_paid_amount: Decimal,
    ) -> Decimal {
        self.schedule.invoice_tax_rate.lookup(customer_paid_amount)
    }

    /// Calculates the invoice tax amount.
    fn taxable_amount_value(
        &self,
        customer_paid_amount: Decimal,
        invoice_tax_rate: Decimal,
    ) -> Decimal {
        customer_paid_amount * invoice_tax_rate
    }

    /// Calculates the amount settled to the seller.
    fn net_payout(
        &self,
        customer_paid_amount: Decimal,
        final_commission: Decimal,
        royalty_fee: Decimal,
    ) -> Decimal {
        customer_paid_amount - final_commission - royalty_fee
    }
}

impl Default for PayoutCalculator {
    fn default() -> Self {
        Self::new()
    }
}
