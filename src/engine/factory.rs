// ============================================================================
// Calculator Factory
// Creates calculators with proper configuration
// ============================================================================

use crate::domain::{CalculatorConfig, CalculatorState, RateConfig};
use crate::engine::Calculator;
use crate::error::CalculatorResult;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for calculator events
///
/// # Returns
/// * `CalculatorResult<Calculator>` - Configured calculator, or `InvalidRate`
///   when strict rates are requested and a rate is not positive
///
/// # Example
/// ```
/// use trade_calculator::prelude::*;
/// use trade_calculator::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::new(RateConfig::standard());
/// let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> CalculatorResult<Calculator> {
    config.validate()?;

    let calculator = Calculator::new(config.rates, event_handler);
    tracing::debug!(
        session = %calculator.session_id(),
        price_per_key = config.rates.price_per_key,
        units_per_key = config.rates.units_per_key,
        "Calculator created"
    );

    Ok(calculator)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use trade_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let mut calculator = CalculatorBuilder::new()
///     .with_price_per_key(3000.0)
///     .with_units_per_key(60.0)
///     .strict_rates()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(calculator.on_field_edit(Field::Keys, "1").currency, "3,000");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    initial_state: Option<CalculatorState>,
}

impl CalculatorBuilder {
    /// Create a new builder with standard rates
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Rate Configuration
    // ========================================================================

    /// Replace both rates
    pub fn with_rates(mut self, rates: RateConfig) -> Self {
        self.config.rates = rates;
        self
    }

    /// Set the key price
    pub fn with_price_per_key(mut self, price_per_key: f64) -> Self {
        self.config.rates.price_per_key = price_per_key;
        self
    }

    /// Set metal units per key
    pub fn with_units_per_key(mut self, units_per_key: f64) -> Self {
        self.config.rates.units_per_key = units_per_key;
        self
    }

    /// Refuse to build with non-positive rates
    pub fn strict_rates(mut self) -> Self {
        self.config.strict_rates = true;
        self
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Resume from a previously captured state; its rates replace the configured ones
    pub fn with_state(mut self, state: CalculatorState) -> Self {
        self.config.rates = state.rates;
        self.initial_state = Some(state);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> CalculatorResult<Calculator> {
        match self.initial_state {
            Some(state) => {
                self.config.validate()?;
                Ok(Calculator::with_state(state, event_handler))
            }
            None => create_from_config(self.config, event_handler),
        }
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActiveField, Field, FieldValues};
    use crate::error::CalculatorError;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_from_config() {
        let config = CalculatorConfig::new(RateConfig::standard());
        let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calculator.rates(), &RateConfig::standard());
        assert!(calculator.values().is_empty());
    }

    #[test]
    fn test_create_lenient_with_degenerate_rates() {
        let config = CalculatorConfig::new(RateConfig::new(0.0, 0.0));
        assert!(create_from_config(config, Arc::new(NoOpEventHandler)).is_ok());
    }

    #[test]
    fn test_create_strict_with_degenerate_rates() {
        let config = CalculatorConfig::new(RateConfig::new(3300.0, -1.0)).with_strict_rates(true);
        let result = create_from_config(config, Arc::new(NoOpEventHandler));
        assert!(matches!(
            result,
            Err(CalculatorError::InvalidRate {
                name: "units_per_key",
                ..
            })
        ));
    }

    #[test]
    fn test_builder_pattern() {
        let builder = CalculatorBuilder::new()
            .with_price_per_key(2800.0)
            .with_units_per_key(50.0);
        assert_eq!(builder.get_config().rates, RateConfig::new(2800.0, 50.0));
        assert!(!builder.get_config().strict_rates);

        let mut calculator = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(
            calculator.on_field_edit(Field::Metal, "25"),
            FieldValues::new("25", "0.5", "1,400")
        );
    }

    #[test]
    fn test_builder_resumes_state() {
        let state = CalculatorState {
            rates: RateConfig::new(3000.0, 60.0),
            active: ActiveField::Keys,
            values: FieldValues::new("120", "2", "6,000"),
        };

        let mut calculator = CalculatorBuilder::new()
            .with_state(state.clone())
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(calculator.state(), &state);
        let values = calculator.on_rate_config_change(RateConfig::standard());
        assert_eq!(values, FieldValues::new("112", "2", "6,600"));
    }

    #[test]
    fn test_builder_strict_rejects() {
        let result = CalculatorBuilder::new()
            .with_rates(RateConfig::new(0.0, 56.0))
            .strict_rates()
            .build(Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }
}
