// ============================================================================
// Engine Module
// Contains the conversion engine, the synchronization reducer and the controller
// ============================================================================

mod calculator;
mod converter;
mod reducer;

pub mod factory;

pub use calculator::Calculator;
pub use converter::{Amounts, Converter};
pub use factory::{create_from_config, CalculatorBuilder};
pub use reducer::{derive_values, reduce};
