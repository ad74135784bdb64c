//! Batch payout calculation from CSV.
//!
//! ## Input Format
//!
//! Headers are matched by name; column order does **not** matter.
//!
//! | Column     | Required | Type    | Notes                          |
//! |------------|----------|---------|--------------------------------|
//! | `sku`      | no       | string  | Copied to the report as-is     |
//! | `mrp`      | yes      | decimal | Must be greater than zero      |
//! | `discount` | yes      | decimal | Between zero and `mrp`         |
//!
//! ```csv
//! sku,mrp,discount
//! TSHIRT-01,1500.00,0
//! MUG-07,500.00,0
//! ```
//!
//! ## Output Format
//!
//! One row per input row, in input order, with every amount rounded half-up
//! to two places and rates as fractions:
//!
//! ```csv
//! sku,mrp,discount,sale_price,gt_charge,customer_paid_amount,royalty_fee,commission_rate,final_commission,taxable_amount_value,net_payout
//! TSHIRT-01,1500.00,0.00,1500.00,171.00,1329.00,132.90,0.29,454.78,66.45,741.32
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use payout_core::{CalculationInput, CalculationResult, InvalidInputError, PayoutCalculator};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::render::format_amount;
use crate::utils::{ParseDecimalError, parse_decimal};

// ---------------------------------------------------------------------------
// Serde-compatible rows that mirror the CSV layouts exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    sku: Option<String>,
    mrp: String,
    discount: String,
}

/// Column names of the batch report, in output order.
pub const REPORT_HEADERS: [&str; 11] = [
    "sku",
    "mrp",
    "discount",
    "sale_price",
    "gt_charge",
    "customer_paid_amount",
    "royalty_fee",
    "commission_rate",
    "final_commission",
    "taxable_amount_value",
    "net_payout",
];

/// One line of the batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub sku: Option<String>,
    pub mrp: String,
    pub discount: String,
    pub sale_price: String,
    pub gt_charge: String,
    pub customer_paid_amount: String,
    pub royalty_fee: String,
    pub commission_rate: String,
    pub final_commission: String,
    pub taxable_amount_value: String,
    pub net_payout: String,
}

impl ReportRow {
    fn new(
        sale: &SaleRecord,
        result: &CalculationResult,
    ) -> Self {
        let rounded = result.rounded();
        Self {
            sku: sale.sku.clone(),
            mrp: format_amount(sale.input.mrp()),
            discount: format_amount(sale.input.discount()),
            sale_price: format_amount(rounded.sale_price),
            gt_charge: format_amount(rounded.gt_charge),
            customer_paid_amount: format_amount(rounded.customer_paid_amount),
            royalty_fee: format_amount(rounded.royalty_fee),
            commission_rate: rounded.commission_rate.normalize().to_string(),
            final_commission: format_amount(rounded.final_commission),
            taxable_amount_value: format_amount(rounded.taxable_amount_value),
            net_payout: format_amount(rounded.net_payout),
        }
    }
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Errors that can occur while reading sales or writing a report.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The CSV was structurally invalid, a required column was missing, or
    /// the report could not be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cell in an amount column is not a decimal number.
    /// `row` is 1-based, not counting the header.
    #[error("row {row}, column '{column}': {source}")]
    InvalidAmount {
        row: usize,
        column: &'static str,
        #[source]
        source: ParseDecimalError,
    },

    /// A row parsed but its values cannot produce a payout.
    /// `row` is 1-based, not counting the header.
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: InvalidInputError,
    },
}

/// A validated sale read from the input CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRecord {
    pub sku: Option<String>,
    pub input: CalculationInput,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parses an amount cell as text so no precision is lost on the way in.
fn parse_amount(
    cell: &str,
    column: &'static str,
    row_number: usize,
) -> Result<Decimal, BatchError> {
    parse_decimal(cell).map_err(|source| BatchError::InvalidAmount {
        row: row_number,
        column,
        source,
    })
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<SaleRecord, BatchError> {
    let mrp = parse_amount(&row.mrp, "mrp", row_number)?;
    let discount = parse_amount(&row.discount, "discount", row_number)?;
    let input = CalculationInput::new(mrp, discount).map_err(|source| {
        BatchError::InvalidRow {
            row: row_number,
            source,
        }
    })?;

    Ok(SaleRecord {
        sku: row.sku.filter(|s| !s.is_empty()),
        input,
    })
}

/// Parse CSV text and return the validated sales in file order.
///
/// # Errors
///
/// * [`BatchError::Csv`] if the CSV is structurally invalid or a required
///   column is missing.
/// * [`BatchError::InvalidAmount`] for the first amount that is not a number.
/// * [`BatchError::InvalidRow`] for the first row whose values are rejected.
pub fn load_from_str(input: &str) -> Result<Vec<SaleRecord>, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<SaleRecord>, BatchError> {
    let contents = std::fs::read_to_string(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Calculation and output
// ---------------------------------------------------------------------------

/// Calculates every sale and builds the report rows in input order.
pub fn calculate_all(
    calculator: &PayoutCalculator,
    sales: &[SaleRecord],
) -> Vec<ReportRow> {
    let rows: Vec<ReportRow> = sales
        .iter()
        .map(|sale| ReportRow::new(sale, &calculator.calculate(&sale.input)))
        .collect();

    info!(count = rows.len(), "calculated batch payouts");
    rows
}

/// Writes report rows as CSV with a header line.
///
/// The header is written even when there are no rows.
pub fn write_report<W: Write>(
    writer: W,
    rows: &[ReportRow],
) -> Result<(), BatchError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(REPORT_HEADERS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const MINIMAL_CSV: &str = "\
mrp,discount
1500.00,0
";

    const WITH_SKU_CSV: &str = "\
sku,mrp,discount
TSHIRT-01,1500.00,0
MUG-07,500.00,0
,3000,0
";

    const REORDERED_CSV: &str = "\
discount,mrp
200,1200
";

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    #[test]
    fn minimal_csv_has_no_sku() {
        let sales = load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(sales.len(), 1);
        assert!(sales[0].sku.is_none());
        assert_eq!(sales[0].input.mrp(), dec!(1500));
        assert_eq!(sales[0].input.discount(), dec!(0));
    }

    #[test]
    fn sku_column_is_optional_per_row() {
        let sales = load_from_str(WITH_SKU_CSV).expect("should parse");

        assert_eq!(sales.len(), 3);
        assert_eq!(sales[0].sku.as_deref(), Some("TSHIRT-01"));
        assert_eq!(sales[1].sku.as_deref(), Some("MUG-07"));
        assert!(sales[2].sku.is_none());
    }

    #[test]
    fn columns_are_matched_by_name() {
        let sales = load_from_str(REORDERED_CSV).expect("should parse");

        assert_eq!(sales[0].input.mrp(), dec!(1200));
        assert_eq!(sales[0].input.discount(), dec!(200));
    }

    #[test]
    fn discount_above_mrp_reports_row_number() {
        let csv = "mrp,discount\n1500,0\n100,150\n";

        let err = load_from_str(csv).unwrap_err();

        match err {
            BatchError::InvalidRow { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(
                    source,
                    InvalidInputError::DiscountExceedsMrp {
                        mrp: dec!(100),
                        discount: dec!(150),
                    }
                );
            }
            other => panic!("expected InvalidRow, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_csv_error() {
        let err = load_from_str("mrp\n1500\n").unwrap_err();

        assert!(matches!(err, BatchError::Csv(_)));
    }

    #[test]
    fn non_numeric_amount_reports_row_and_column() {
        let err = load_from_str("mrp,discount\n1500,0\n800,abc\n").unwrap_err();

        match err {
            BatchError::InvalidAmount { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "discount");
            }
            other => panic!("expected InvalidAmount, got {other:?}"),
        }
    }

    #[test]
    fn amounts_keep_full_precision() {
        let sales = load_from_str("mrp,discount\n12345678901234567.89,0.000000001\n").unwrap();

        assert_eq!(sales[0].input.mrp(), dec!(12345678901234567.89));
        assert_eq!(sales[0].input.discount(), dec!(0.000000001));
    }

    #[test]
    fn amounts_accept_thousands_separators() {
        let sales = load_from_str("mrp,discount\n\"1,200.00\",200\n").unwrap();

        assert_eq!(sales[0].input.mrp(), dec!(1200));
        assert_eq!(sales[0].input.sale_price(), dec!(1000));
    }

    #[test]
    fn header_only_yields_no_sales() {
        let sales = load_from_str("mrp,discount\n").unwrap();

        assert!(sales.is_empty());
    }

    // -----------------------------------------------------------------------
    // Calculation and output
    // -----------------------------------------------------------------------

    #[test]
    fn calculate_all_rounds_report_values() {
        let sales = load_from_str(WITH_SKU_CSV).unwrap();

        let rows = calculate_all(&PayoutCalculator::new(), &sales);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].gt_charge, "171.00");
        assert_eq!(rows[0].commission_rate, "0.29");
        assert_eq!(rows[0].final_commission, "454.78");
        assert_eq!(rows[0].net_payout, "741.32");
        assert_eq!(rows[1].commission_rate, "0.22");
        assert_eq!(rows[1].net_payout, "285.62");
        assert_eq!(rows[2].taxable_amount_value, "339.48");
    }

    #[test]
    fn write_report_emits_header_and_rows() {
        let sales = load_from_str(MINIMAL_CSV).unwrap();
        let rows = calculate_all(&PayoutCalculator::new(), &sales);
        let mut out = Vec::new();

        write_report(&mut out, &rows).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = "\
sku,mrp,discount,sale_price,gt_charge,customer_paid_amount,royalty_fee,commission_rate,final_commission,taxable_amount_value,net_payout
,1500.00,0.00,1500.00,171.00,1329.00,132.90,0.29,454.78,66.45,741.32
";
        assert_eq!(text, expected);
    }

    #[test]
    fn write_report_empty_batch_still_has_header() {
        let mut out = Vec::new();

        write_report(&mut out, &[]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}\n", REPORT_HEADERS.join(",")));
    }

    #[test]
    fn report_headers_match_row_fields() {
        let sales = load_from_str(MINIMAL_CSV).unwrap();
        let rows = calculate_all(&PayoutCalculator::new(), &sales);
        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

        writer.serialize(&rows[0]).unwrap();

        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(text.lines().next(), Some(REPORT_HEADERS.join(",").as_str()));
    }
}
