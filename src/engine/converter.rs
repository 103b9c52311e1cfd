// ============================================================================
// Converter
// Stateless conversions between metal, keys and currency
// ============================================================================

use crate::domain::{Field, RateConfig};

/// Amounts of all three units that describe the same value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amounts {
    pub metal: f64,
    pub keys: f64,
    pub currency: f64,
}

impl Amounts {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Metal => self.metal,
            Field::Keys => self.keys,
            Field::Currency => self.currency,
        }
    }
}

/// Conversion engine bound to one set of rates.
///
/// Metal is the pivot unit: key/currency conversions always pass through
/// metal so every path applies the same arithmetic. Divisions by a
/// non-positive rate yield `0` instead of an error or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    rates: RateConfig,
}

impl Converter {
    pub fn new(rates: RateConfig) -> Self {
        Self { rates }
    }

    // ========================================================================
    // Primitive Conversions
    // ========================================================================

    #[inline]
    pub fn metal_to_currency(&self, metal: f64) -> f64 {
        if self.rates.units_per_key > 0.0 {
            (metal / self.rates.units_per_key) * self.rates.price_per_key
        } else {
            0.0
        }
    }

    #[inline]
    pub fn currency_to_metal(&self, currency: f64) -> f64 {
        if self.rates.price_per_key > 0.0 {
            (currency / self.rates.price_per_key) * self.rates.units_per_key
        } else {
            0.0
        }
    }

    #[inline]
    pub fn metal_to_keys(&self, metal: f64) -> f64 {
        if self.rates.units_per_key > 0.0 {
            metal / self.rates.units_per_key
        } else {
            0.0
        }
    }

    #[inline]
    pub fn keys_to_metal(&self, keys: f64) -> f64 {
        keys * self.rates.units_per_key
    }

    // ========================================================================
    // Derived Conversions (via metal)
    // ========================================================================

    pub fn currency_to_keys(&self, currency: f64) -> f64 {
        self.metal_to_keys(self.currency_to_metal(currency))
    }

    pub fn keys_to_currency(&self, keys: f64) -> f64 {
        self.metal_to_currency(self.keys_to_metal(keys))
    }

    /// Express an amount of `field` in metal
    pub fn to_metal(&self, field: Field, amount: f64) -> f64 {
        match field {
            Field::Metal => amount,
            Field::Keys => self.keys_to_metal(amount),
            Field::Currency => self.currency_to_metal(amount),
        }
    }

    /// Convert an amount of `from` into `to`
    pub fn convert(&self, from: Field, to: Field, amount: f64) -> f64 {
        if from == to {
            return amount;
        }

        let metal = self.to_metal(from, amount);
        match to {
            Field::Metal => metal,
            Field::Keys => self.metal_to_keys(metal),
            Field::Currency => self.metal_to_currency(metal),
        }
    }

    /// All three amounts for a value entered in `source`.
    ///
    /// The source amount is passed through unchanged; the other two are
    /// derived from its metal equivalent.
    pub fn derive(&self, source: Field, amount: f64) -> Amounts {
        Amounts {
            metal: self.convert(source, Field::Metal, amount),
            keys: self.convert(source, Field::Keys, amount),
            currency: self.convert(source, Field::Currency, amount),
        }
    }
}

impl From<RateConfig> for Converter {
    fn from(rates: RateConfig) -> Self {
        Self::new(rates)
    }
}
