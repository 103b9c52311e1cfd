// ============================================================================
// Rate Configuration
// Exchange-rate parameters linking metal, keys and currency
// ============================================================================

use crate::error::{CalculatorError, CalculatorResult};
use crate::numeric::{format_fixed, format_grouped};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default market price of one key in currency units
pub const DEFAULT_PRICE_PER_KEY: f64 = 3300.0;

/// Default number of metal units exchanged for one key
pub const DEFAULT_UNITS_PER_KEY: f64 = 56.0;

/// Maximum decimals shown for the key price badge
const PRICE_PER_KEY_DECIMALS: u32 = 3;

// ============================================================================
// Rate Config
// ============================================================================

/// The two rates that define every conversion.
///
/// Both should be strictly positive. Zero or negative values are accepted
/// anyway: conversions that divide by them return `0` instead of failing.
/// Call [`RateConfig::validate`] to reject them explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RateConfig {
    /// Currency price of one key
    pub price_per_key: f64,

    /// Metal units per key
    pub units_per_key: f64,
}

impl RateConfig {
    pub fn new(price_per_key: f64, units_per_key: f64) -> Self {
        Self {
            price_per_key,
            units_per_key,
        }
    }

    /// Builder method: Set the key price
    pub fn with_price_per_key(mut self, price_per_key: f64) -> Self {
        self.price_per_key = price_per_key;
        self
    }

    /// Builder method: Set metal units per key
    pub fn with_units_per_key(mut self, units_per_key: f64) -> Self {
        self.units_per_key = units_per_key;
        self
    }

    /// Validate that both rates are positive and finite
    pub fn validate(&self) -> CalculatorResult<()> {
        check_rate("price_per_key", self.price_per_key)?;
        check_rate("units_per_key", self.units_per_key)?;
        Ok(())
    }

    /// Currency price of a single metal unit, `0` when units per key is not positive
    pub fn price_per_unit(&self) -> f64 {
        if self.units_per_key > 0.0 {
            self.price_per_key / self.units_per_key
        } else {
            0.0
        }
    }

    /// Display-ready summary of these rates
    pub fn summary(&self) -> RateSummary {
        RateSummary::from(*self)
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_rate(name: &'static str, value: f64) -> CalculatorResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalculatorError::InvalidRate { name, value })
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl RateConfig {
    /// Standard market rates: 1 key = 3,300 currency = 56 metal
    pub fn standard() -> Self {
        Self::new(DEFAULT_PRICE_PER_KEY, DEFAULT_UNITS_PER_KEY)
    }
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for creating a calculator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Initial exchange rates
    pub rates: RateConfig,

    /// Refuse to build with non-positive rates instead of degrading to zero
    pub strict_rates: bool,
}

impl CalculatorConfig {
    pub fn new(rates: RateConfig) -> Self {
        Self {
            rates,
            strict_rates: false,
        }
    }

    /// Builder method: Reject degenerate rates at construction
    pub fn with_strict_rates(mut self, strict: bool) -> Self {
        self.strict_rates = strict;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CalculatorResult<()> {
        if self.strict_rates {
            self.rates.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Rate Summary
// ============================================================================

/// The three headline figures shown next to the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RateSummary {
    pub price_per_key: f64,
    pub units_per_key: f64,
    pub price_per_unit: f64,
}

impl RateSummary {
    /// Key price, grouped with up to three decimals (e.g. `"3,300"`, `"3,300.555"`)
    pub fn price_per_key_display(&self) -> String {
        format_grouped(self.price_per_key, PRICE_PER_KEY_DECIMALS)
    }

    /// Metal per key as entered (e.g. `"56"`, `"56.5"`)
    pub fn units_per_key_display(&self) -> String {
        self.units_per_key.to_string()
    }

    /// Price of one metal unit with exactly two decimals, or `"0"` when undefined
    pub fn price_per_unit_display(&self) -> String {
        if self.units_per_key > 0.0 {
            format_fixed(self.price_per_unit, 2)
        } else {
            "0".to_string()
        }
    }
}

impl From<RateConfig> for RateSummary {
    fn from(rates: RateConfig) -> Self {
        Self {
            price_per_key: rates.price_per_key,
            units_per_key: rates.units_per_key,
            price_per_unit: rates.price_per_unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        let rates = RateConfig::default();
        assert_eq!(rates.price_per_key, 3300.0);
        assert_eq!(rates.units_per_key, 56.0);
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let rates = RateConfig::standard()
            .with_price_per_key(2800.0)
            .with_units_per_key(60.5);

        assert_eq!(rates, RateConfig::new(2800.0, 60.5));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            RateConfig::new(3300.0, 0.0).validate(),
            Err(CalculatorError::InvalidRate {
                name: "units_per_key",
                value: 0.0
            })
        );
        assert!(matches!(
            RateConfig::new(-1.0, 56.0).validate(),
            Err(CalculatorError::InvalidRate {
                name: "price_per_key",
                ..
            })
        ));
        assert!(RateConfig::new(f64::NAN, 56.0).validate().is_err());
        assert!(RateConfig::new(3300.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_calculator_config_validation() {
        let lenient = CalculatorConfig::new(RateConfig::new(3300.0, 0.0));
        assert!(!lenient.strict_rates);
        assert!(lenient.validate().is_ok());

        let strict = lenient.with_strict_rates(true);
        assert!(strict.validate().is_err());

        assert!(CalculatorConfig::default()
            .with_strict_rates(true)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_price_per_unit() {
        assert!((RateConfig::standard().price_per_unit() - 58.928_571_428).abs() < 1e-6);
        assert_eq!(RateConfig::new(3300.0, 0.0).price_per_unit(), 0.0);
        assert_eq!(RateConfig::new(3300.0, -5.0).price_per_unit(), 0.0);
    }

    #[test]
    fn test_summary_display() {
        let summary = RateConfig::standard().summary();
        assert_eq!(summary.price_per_key_display(), "3,300");
        assert_eq!(summary.units_per_key_display(), "56");
        assert_eq!(summary.price_per_unit_display(), "58.93");

        let degenerate = RateConfig::new(3300.0, 0.0).summary();
        assert_eq!(degenerate.price_per_unit_display(), "0");

        let even = RateConfig::new(5600.0, 56.0).summary();
        assert_eq!(even.price_per_unit_display(), "100.00");
    }

    #[test]
    fn test_summary_key_price_keeps_three_decimals() {
        let fractional = RateConfig::new(3300.555, 56.0).summary();
        assert_eq!(fractional.price_per_key_display(), "3,300.555");

        let tiny = RateConfig::new(0.005, 56.0).summary();
        assert_eq!(tiny.price_per_key_display(), "0.005");

        let long = RateConfig::new(1234.56789, 56.0).summary();
        assert_eq!(long.price_per_key_display(), "1,234.568");
    }
}
