// ============================================================================
// Domain Models Module
// Contains the calculator's state and value objects
// ============================================================================

pub mod config;
pub mod field;
pub mod preset;
pub mod session;
pub mod state;

pub use config::{
    CalculatorConfig, RateConfig, RateSummary, DEFAULT_PRICE_PER_KEY, DEFAULT_UNITS_PER_KEY,
};
pub use field::{ActiveField, Field, FieldValues};
pub use preset::Preset;
pub use session::SessionId;
pub use state::{CalculatorState, Transition};
