// ============================================================================
// Calculator State
// The explicit state triple and the transitions that drive it
// ============================================================================

use super::{ActiveField, Field, FieldValues, RateConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete calculator state: rates, the active field and the displayed values.
///
/// Displayed values are a pure function of the active field, its raw text and
/// the rates. Transitions are applied with [`CalculatorState::apply`], which
/// returns the next state and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorState {
    pub rates: RateConfig,
    pub active: ActiveField,
    pub values: FieldValues,
}

impl CalculatorState {
    pub fn new(rates: RateConfig) -> Self {
        Self {
            rates,
            active: ActiveField::None,
            values: FieldValues::default(),
        }
    }

    /// Raw text of the active field, if a field is active
    pub fn active_raw(&self) -> Option<&str> {
        self.active.field().map(|field| self.values.get(field))
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::CalculatorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::error::CalculatorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Inputs accepted by the field synchronization state machine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Transition {
    /// Field gained focus; becomes active, values untouched
    Focus(Field),

    /// Field text changed; becomes active and drives the other two
    Edit { field: Field, raw: String },

    /// Rates replaced; the active field (if any) is re-evaluated
    ChangeRates(RateConfig),

    /// All values emptied; the active field is kept
    Clear,

    /// Focus metal and enter the given amount
    QuickFill(String),
}

impl Transition {
    pub fn edit(field: Field, raw: impl Into<String>) -> Self {
        Transition::Edit {
            field,
            raw: raw.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transition::Focus(_) => "focus",
            Transition::Edit { .. } => "edit",
            Transition::ChangeRates(_) => "change_rates",
            Transition::Clear => "clear",
            Transition::QuickFill(_) => "quick_fill",
        }
    }
}
