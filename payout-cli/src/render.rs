//! Text rendering of payout results.
//!
//! All amounts are shown in rupees with two decimal places and comma
//! thousands separators, e.g. `₹1,329.00`.

use std::fmt::Write;

use payout_core::calculations::common::round_half_up;
use payout_core::{CalculationInput, CalculationResult, FeeSchedule};
use rust_decimal::Decimal;

/// The single currency the marketplace settles in.
pub const CURRENCY_SYMBOL: &str = "₹";

const LABEL_WIDTH: usize = 22;
const VALUE_WIDTH: usize = 12;

/// Formats an amount rounded half-up to two places, without symbol or
/// grouping (e.g. `1329.00`).
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_half_up(amount))
}

/// Formats an amount as rupees with thousands separators.
///
/// Negative amounts carry the sign before the symbol: `-₹54.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{fraction}")
}

/// Formats a fractional rate as a percentage, e.g. `0.29` → `29%`.
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn metric_line(
    out: &mut String,
    label: &str,
    amount: Decimal,
    note: Option<String>,
) {
    let value = format_currency(amount);
    // Writing to a String cannot fail.
    let _ = match note {
        Some(note) => writeln!(out, "{label:<LABEL_WIDTH$}{value:>VALUE_WIDTH$}  ({note})"),
        None => writeln!(out, "{label:<LABEL_WIDTH$}{value:>VALUE_WIDTH$}"),
    };
}

/// Annotation shown beside the final commission, e.g. `29% + 18% tax`.
pub fn commission_note(commission_rate: Decimal) -> String {
    format!(
        "{} + {} tax",
        format_percent(commission_rate),
        format_percent(FeeSchedule::CURRENT.commission_tax_rate)
    )
}

/// Renders the labelled payout summary for one sale: the two inputs followed
/// by the seven derived amounts, nine lines in all. The commission rate and
/// invoice tax rate appear as annotations.
pub fn render_summary(
    input: &CalculationInput,
    result: &CalculationResult,
) -> String {
    let result = result.rounded();
    let mut out = String::new();

    metric_line(&mut out, "MRP", input.mrp(), None);
    metric_line(&mut out, "Discount", input.discount(), None);
    metric_line(&mut out, "Sale Price", result.sale_price, None);
    metric_line(&mut out, "GT Charge", result.gt_charge, None);
    metric_line(
        &mut out,
        "Customer Paid Amount",
        result.customer_paid_amount,
        None,
    );
    metric_line(&mut out, "Royalty Fee", result.royalty_fee, None);
    metric_line(
        &mut out,
        "Final Commission",
        result.final_commission,
        Some(commission_note(result.commission_rate)),
    );
    metric_line(
        &mut out,
        "Taxable Amount Value",
        result.taxable_amount_value,
        Some(format_percent(result.invoice_tax_rate)),
    );
    metric_line(&mut out, "Net Payout", result.net_payout, None);

    out
}
