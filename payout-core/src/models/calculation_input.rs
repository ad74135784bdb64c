use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::InvalidInputError;

/// A validated pair of sale inputs.
///
/// The fields are private so that every value in circulation satisfies
/// `mrp > 0` and `0 <= discount <= mrp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculationInput {
    mrp: Decimal,
    discount: Decimal,
}

impl CalculationInput {
    /// Validates and wraps the listed price and the discount applied to it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if:
    /// - `mrp` is zero or negative
    /// - `discount` is negative
    /// - `discount` is greater than `mrp`
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use payout_core::{CalculationInput, InvalidInputError};
    ///
    /// let input = CalculationInput::new(dec!(1500), dec!(200)).unwrap();
    /// assert_eq!(input.sale_price(), dec!(1300));
    ///
    /// let err = CalculationInput::new(dec!(100), dec!(150)).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     InvalidInputError::DiscountExceedsMrp { mrp: dec!(100), discount: dec!(150) }
    /// );
    /// ```
    pub fn new(
        mrp: Decimal,
        discount: Decimal,
    ) -> Result<Self, InvalidInputError> {
        if mrp <= Decimal::ZERO {
            return Err(InvalidInputError::NonPositiveMrp(mrp));
        }
        if discount < Decimal::ZERO {
            return Err(InvalidInputError::NegativeDiscount(discount));
        }
        if discount > mrp {
            return Err(InvalidInputError::DiscountExceedsMrp { mrp, discount });
        }
        Ok(Self { mrp, discount })
    }

    /// Listed price before discount.
    pub fn mrp(&self) -> Decimal {
        self.mrp
    }

    /// Discount applied at sale.
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Price actually charged, never negative.
    pub fn sale_price(&self) -> Decimal {
        self.mrp - self.discount
    }
}
