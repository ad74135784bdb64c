pub mod calculations;
pub mod models;

pub use calculations::{FeeSchedule, InvalidInputError, PayoutCalculator};
pub use models::*;
