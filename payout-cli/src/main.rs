use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;

use payout_cli::app;
use payout_cli::config::PayoutConfig;
use payout_cli::logging;
use payout_cli::utils::parse_decimal;
use payout_core::PayoutCalculator;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Seller payout calculator for marketplace sales.
///
/// Applies the GT charge, commission, royalty and invoice tax rules to a
/// listed price and discount, and prints what the seller is paid.
#[derive(Debug, Parser)]
#[command(name = "payout", version, about, long_about = None)]
struct Cli {
    /// Path to an optional TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter (e.g. `debug`); `RUST_LOG` takes precedence.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate the payout for a single sale (the default).
    Quote {
        /// Listed price before discount, e.g. `1,500`.
        #[arg(long, value_parser = parse_decimal, allow_hyphen_values = true)]
        mrp: Option<Decimal>,

        /// Discount applied at sale.
        #[arg(long, value_parser = parse_decimal, allow_hyphen_values = true)]
        discount: Option<Decimal>,
    },

    /// Calculate payouts for every sale in a CSV file.
    Batch {
        /// CSV file with `mrp` and `discount` columns (and optional `sku`).
        #[arg(short, long)]
        file: PathBuf,

        /// Where to write the report; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PayoutConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PayoutConfig::default(),
    };

    logging::init_tracing(cli.log_level.as_deref(), config.log_level.as_deref())?;
    debug!(?config, "configuration loaded");

    let calculator = PayoutCalculator::new();

    match cli.command.unwrap_or(Command::Quote {
        mrp: None,
        discount: None,
    }) {
        Command::Quote { mrp, discount } => {
            let summary = app::quote(&calculator, mrp, discount, &config.defaults)
                .context("Cannot calculate payout")?;
            print!("{summary}");
        }
        Command::Batch { file, output } => {
            app::run_batch(&calculator, &file, output.as_deref())?;
        }
    }

    Ok(())
}
