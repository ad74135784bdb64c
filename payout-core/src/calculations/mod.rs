//! Payout calculation modules for single-item marketplace sales.
//!
//! This module provides the fee schedule, the tier lookup machinery it is
//! built from, and the calculator that chains them into a settled payout.

pub mod common;
pub mod fee_schedule;
pub mod payout;
pub mod tiers;

pub use fee_schedule::FeeSchedule;
pub use payout::{InvalidInputError, PayoutCalculator};
pub use tiers::{TierTable, UpperBound};
