// ============================================================================
// Field Synchronization Reducer
// Pure (state, transition) -> state recomputation rules
// ============================================================================

use super::Converter;
use crate::domain::{CalculatorState, Field, FieldValues, RateConfig, Transition};
use crate::numeric::{format_amount, parse_amount};

/// Apply a transition to a state, producing the next state
pub fn reduce(state: &CalculatorState, transition: &Transition) -> CalculatorState {
    state.apply(transition)
}

/// Display values for `raw` typed into `field` under `rates`.
///
/// The edited field keeps `raw` verbatim. If `raw` has no numeric value the
/// other two fields are emptied; otherwise they receive formatted amounts
/// derived through metal.
pub fn derive_values(rates: &RateConfig, field: Field, raw: &str) -> FieldValues {
    let Some(amount) = parse_amount(raw) else {
        return FieldValues::only(field, raw);
    };

    let amounts = Converter::new(*rates).derive(field, amount);
    let mut values = FieldValues::new(
        format_amount(amounts.metal),
        format_amount(amounts.keys),
        format_amount(amounts.currency),
    );
    values.set(field, raw);
    values
}

impl CalculatorState {
    /// Compute the state that follows `transition`
    pub fn apply(&self, transition: &Transition) -> CalculatorState {
        let next = self.clone();

        match transition {
            Transition::Focus(field) => CalculatorState {
                active: (*field).into(),
                ..next
            },
            Transition::Edit { field, raw } => next.edited(*field, raw),
            Transition::ChangeRates(rates) => next.with_rates(*rates),
            Transition::Clear => CalculatorState {
                values: FieldValues::default(),
                ..next
            },
            Transition::QuickFill(metal_amount) => next.edited(Field::Metal, metal_amount),
        }
    }

    fn edited(mut self, field: Field, raw: &str) -> Self {
        self.active = field.into();
        self.values = derive_values(&self.rates, field, raw);
        self
    }

    fn with_rates(mut self, rates: RateConfig) -> Self {
        self.rates = rates;

        match self.active.field() {
            Some(field) => {
                let raw = self.values.get(field).to_string();
                self.edited(field, &raw)
            }
            None => self,
        }
    }
}
