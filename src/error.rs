// ============================================================================
// Calculator Errors
// Error types for the opt-in validation paths
// ============================================================================

use thiserror::Error;

/// Errors raised by the strict entry points of the calculator.
///
/// Conversions, parsing and field synchronization never fail: invalid input is
/// a recognized input class and non-positive rates degrade to zero. These
/// variants only surface from explicit validation and lookup calls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// A rate parameter is zero, negative or not finite
    #[error("invalid rate: {name} must be a positive finite number, got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    /// No quick-fill preset carries the requested label
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// Calculator state could not be encoded or decoded
    #[cfg(feature = "serde")]
    #[error("state serialization failed: {0}")]
    Serialization(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for CalculatorError {
    fn from(err: serde_json::Error) -> Self {
        CalculatorError::Serialization(err.to_string())
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
