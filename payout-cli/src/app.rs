//! Command implementations shared by the `payout` binary and its tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use payout_core::{CalculationInput, InvalidInputError, PayoutCalculator};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::batch;
use crate::config::QuoteDefaults;
use crate::render::render_summary;

/// Calculates one sale and renders the labelled summary.
///
/// Inputs left as `None` fall back to `defaults`.
pub fn quote(
    calculator: &PayoutCalculator,
    mrp: Option<Decimal>,
    discount: Option<Decimal>,
    defaults: &QuoteDefaults,
) -> Result<String, InvalidInputError> {
    let mrp = mrp.unwrap_or(defaults.mrp);
    let discount = discount.unwrap_or(defaults.discount);
    debug!(%mrp, %discount, "quoting payout");

    let input = CalculationInput::new(mrp, discount)?;
    let result = calculator.calculate(&input);
    Ok(render_summary(&input, &result))
}

/// Reads sales from `file`, calculates them all, and writes the report to
/// `output` (or stdout).
///
/// Every row is validated before anything is written, so a bad row leaves
/// no partial report behind.
pub fn run_batch(
    calculator: &PayoutCalculator,
    file: &Path,
    output: Option<&Path>,
) -> Result<usize> {
    info!("loading sales from: {}", file.display());
    let sales = batch::load_from_file(file)
        .with_context(|| format!("Failed to load sales from: {}", file.display()))?;

    let rows = batch::calculate_all(calculator, &sales);

    match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            batch::write_report(out, &rows)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            info!("wrote {} payouts to: {}", rows.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            batch::write_report(&mut lock, &rows).context("Failed to write report")?;
            lock.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(rows.len())
}
