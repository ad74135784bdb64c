mod calculation_input;
mod calculation_result;

pub use calculation_input::CalculationInput;
pub use calculation_result::CalculationResult;
