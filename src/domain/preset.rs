// ============================================================================
// Quick-Fill Presets
// ============================================================================

use super::RateConfig;
use crate::error::{CalculatorError, CalculatorResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A labelled metal amount that can be entered with one action
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Preset {
    pub label: String,

    /// Metal amount as literal text, entered verbatim into the metal field
    pub metal_amount: String,
}

impl Preset {
    pub fn new(label: impl Into<String>, metal_amount: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            metal_amount: metal_amount.into(),
        }
    }

    /// Built-in shortcuts. The "1 Key" amount follows the current rates.
    pub fn defaults(rates: &RateConfig) -> Vec<Preset> {
        vec![
            Preset::new("Craft Hat", "1.33"),
            Preset::new("ToD Ticket", "14"),
            Preset::new("1 Key", rates.units_per_key.to_string()),
        ]
    }

    /// Find a preset by exact label
    pub fn find<'a>(presets: &'a [Preset], label: &str) -> CalculatorResult<&'a Preset> {
        presets
            .iter()
            .find(|preset| preset.label == label)
            .ok_or_else(|| CalculatorError::UnknownPreset(label.to_string()))
    }
}
