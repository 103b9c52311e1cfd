// ============================================================================
// Trade Calculator Library
// Metal / key / currency conversion with synchronized input fields
// ============================================================================

//! # Trade Calculator
//!
//! Keeps three linearly related quantities in sync: crafting metal, keys and
//! real-world currency. Editing any one field recomputes the other two from
//! two configurable rates (currency price per key, metal units per key).
//!
//! ## Features
//!
//! - **Conversion engine** routing every key/currency conversion through metal
//! - **Display formatting** with thousands grouping and small-amount precision
//! - **Pure reducer** over an explicit, serializable calculator state
//! - **Controller** exposing edit / focus / rate change / clear / quick-fill
//! - **Event handlers** for logging or recording state changes
//!
//! ## Example
//!
//! ```rust
//! use trade_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! let mut calculator = Calculator::new(RateConfig::standard(), Arc::new(NoOpEventHandler));
//!
//! let values = calculator.on_field_edit(Field::Metal, "56");
//! assert_eq!(values.keys, "1");
//! assert_eq!(values.currency, "3,300");
//!
//! // Re-derived from the metal field under the new rates
//! let values = calculator.on_rate_config_change(RateConfig::new(3000.0, 56.0));
//! assert_eq!(values.currency, "3,000");
//!
//! let values = calculator.on_clear();
//! assert!(values.is_empty());
//! ```

pub mod domain;
pub mod engine;
pub mod error;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ActiveField, CalculatorConfig, CalculatorState, Field, FieldValues, Preset, RateConfig,
        RateSummary, SessionId, Transition,
    };
    pub use crate::engine::{
        create_from_config, derive_values, reduce, Amounts, Calculator, CalculatorBuilder,
        Converter,
    };
    pub use crate::error::{CalculatorError, CalculatorResult};
    pub use crate::interfaces::{
        CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{format_amount, parse_amount};
}
