// ============================================================================
// Calculator
// Controller owning the calculator state and exposing the UI event surface
// ============================================================================

use crate::domain::{
    ActiveField, CalculatorState, Field, FieldValues, Preset, RateConfig, RateSummary, SessionId,
    Transition,
};
use crate::error::CalculatorResult;
use crate::interfaces::{CalculatorEvent, EventHandler};
use crate::numeric::parse_amount;
use chrono::Utc;
use std::sync::Arc;

/// Single-owner controller around [`CalculatorState`].
///
/// Every operation runs the pure reducer, swaps in the resulting state,
/// reports what happened to the event handler and returns the new values.
pub struct Calculator {
    /// Identifies this calculator in events and logs
    session_id: SessionId,

    /// Current rates, active field and displayed values
    state: CalculatorState,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a calculator with empty fields
    pub fn new(rates: RateConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self::with_state(CalculatorState::new(rates), event_handler)
    }

    /// Create a calculator resuming from an existing state
    pub fn with_state(state: CalculatorState, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            session_id: SessionId::new(),
            state,
            event_handler,
        }
    }

    // ========================================================================
    // Event Surface
    // ========================================================================

    /// Text of `field` changed to `raw`
    pub fn on_field_edit(&mut self, field: Field, raw: &str) -> FieldValues {
        let events = self.transition(Transition::edit(field, raw));
        self.event_handler.on_events(events);
        self.values().clone()
    }

    /// `field` gained focus
    pub fn on_field_focus(&mut self, field: Field) -> ActiveField {
        let events = self.transition(Transition::Focus(field));
        self.event_handler.on_events(events);
        self.state.active
    }

    /// Rates replaced; accepted as given, including non-positive values
    pub fn on_rate_config_change(&mut self, rates: RateConfig) -> FieldValues {
        if let Err(err) = rates.validate() {
            tracing::warn!(session = %self.session_id, %err, "Applying degenerate rates");
        }

        let events = self.transition(Transition::ChangeRates(rates));
        self.event_handler.on_events(events);
        self.values().clone()
    }

    /// Rates replaced only if both are positive and finite
    pub fn try_rate_config_change(&mut self, rates: RateConfig) -> CalculatorResult<FieldValues> {
        rates.validate()?;
        Ok(self.on_rate_config_change(rates))
    }

    /// Empty all three fields; the active field stays active
    pub fn on_clear(&mut self) -> FieldValues {
        let events = self.transition(Transition::Clear);
        self.event_handler.on_events(events);
        self.values().clone()
    }

    /// Focus the metal field and enter `metal_amount` verbatim
    pub fn quick_fill(&mut self, metal_amount: &str) -> FieldValues {
        let events = self.transition(Transition::QuickFill(metal_amount.to_string()));
        self.event_handler.on_events(events);
        self.values().clone()
    }

    /// Quick-fill the preset with the given label
    pub fn apply_preset(&mut self, label: &str) -> CalculatorResult<FieldValues> {
        let presets = self.presets();
        let preset = Preset::find(&presets, label)?;
        Ok(self.quick_fill(&preset.metal_amount))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> CalculatorState {
        self.state.clone()
    }

    /// Replace the whole state without emitting events
    pub fn restore(&mut self, state: CalculatorState) {
        tracing::debug!(session = %self.session_id, "Restoring calculator state");
        self.state = state;
    }

    pub fn values(&self) -> &FieldValues {
        &self.state.values
    }

    pub fn active_field(&self) -> ActiveField {
        self.state.active
    }

    pub fn rates(&self) -> &RateConfig {
        &self.state.rates
    }

    pub fn rate_summary(&self) -> RateSummary {
        self.state.rates.summary()
    }

    /// Quick-fill shortcuts for the current rates
    pub fn presets(&self) -> Vec<Preset> {
        Preset::defaults(&self.state.rates)
    }

    // ========================================================================
    // Internal
    // ========================================================================

    /// Advance the state and describe the change as events
    fn transition(&mut self, transition: Transition) -> Vec<CalculatorEvent> {
        let next = self.state.apply(&transition);
        let focus_changed = next.active != self.state.active;

        tracing::debug!(
            session = %self.session_id,
            transition = transition.name(),
            active = ?next.active,
            "Calculator transition"
        );

        self.state = next;

        let timestamp = Utc::now();
        let mut events = Vec::new();

        match transition {
            Transition::Focus(_) => {
                if focus_changed {
                    events.push(self.focus_event(timestamp));
                }
            }
            Transition::Edit { field, raw } => {
                if focus_changed {
                    events.push(self.focus_event(timestamp));
                }
                events.push(self.edit_event(field, raw, timestamp));
            }
            Transition::QuickFill(raw) => {
                if focus_changed {
                    events.push(self.focus_event(timestamp));
                }
                events.push(self.edit_event(Field::Metal, raw, timestamp));
            }
            Transition::ChangeRates(rates) => {
                events.push(CalculatorEvent::RatesChanged {
                    session_id: self.session_id,
                    rates,
                    recomputed: !self.state.active.is_none(),
                    timestamp,
                });
            }
            Transition::Clear => {
                events.push(CalculatorEvent::Cleared {
                    session_id: self.session_id,
                    timestamp,
                });
            }
        }

        events
    }

    fn focus_event(&self, timestamp: chrono::DateTime<Utc>) -> CalculatorEvent {
        CalculatorEvent::FocusChanged {
            session_id: self.session_id,
            active: self.state.active,
            timestamp,
        }
    }

    fn edit_event(
        &self,
        field: Field,
        raw: String,
        timestamp: chrono::DateTime<Utc>,
    ) -> CalculatorEvent {
        if parse_amount(&raw).is_some() {
            CalculatorEvent::FieldEdited {
                session_id: self.session_id,
                field,
                values: self.state.values.clone(),
                timestamp,
            }
        } else {
            tracing::trace!(session = %self.session_id, %field, raw = %raw, "Input has no numeric value");
            CalculatorEvent::InputRejected {
                session_id: self.session_id,
                field,
                raw,
                timestamp,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};

    fn calculator() -> Calculator {
        Calculator::new(RateConfig::standard(), Arc::new(NoOpEventHandler))
    }

    #[test]
    fn test_field_edits() {
        let mut calc = calculator();

        assert_eq!(
            calc.on_field_edit(Field::Metal, "56"),
            FieldValues::new("56", "1", "3,300")
        );
        assert_eq!(
            calc.on_field_edit(Field::Keys, "2"),
            FieldValues::new("112", "2", "6,600")
        );
        assert_eq!(
            calc.on_field_edit(Field::Currency, "1,650"),
            FieldValues::new("28", "0.5", "1,650")
        );
        assert_eq!(
            calc.on_field_edit(Field::Currency, "abc"),
            FieldValues::new("", "", "abc")
        );
        assert_eq!(calc.active_field(), ActiveField::Currency);
    }

    #[test]
    fn test_focus_returns_active_field() {
        let mut calc = calculator();
        assert_eq!(calc.active_field(), ActiveField::None);
        assert_eq!(calc.on_field_focus(Field::Keys), ActiveField::Keys);
        assert!(calc.values().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut calc = calculator();
        calc.on_field_edit(Field::Keys, "3");

        assert_eq!(calc.on_clear(), FieldValues::default());
        assert_eq!(calc.active_field(), ActiveField::Keys);
    }

    #[test]
    fn test_rate_change_with_degenerate_units() {
        let mut calc = calculator();
        calc.on_field_edit(Field::Metal, "77");

        let values = calc.on_rate_config_change(RateConfig::new(3300.0, 0.0));
        assert_eq!(values.keys, "0");
        assert_eq!(values.metal, "77");
        assert_eq!(calc.rates().units_per_key, 0.0);
    }

    #[test]
    fn test_try_rate_change_rejects_degenerate_rates() {
        let mut calc = calculator();
        calc.on_field_edit(Field::Metal, "56");

        let err = calc
            .try_rate_config_change(RateConfig::new(0.0, 56.0))
            .unwrap_err();
        assert!(matches!(
            err,
            CalculatorError::InvalidRate {
                name: "price_per_key",
                ..
            }
        ));
        assert_eq!(calc.rates(), &RateConfig::standard());

        let values = calc
            .try_rate_config_change(RateConfig::new(6600.0, 56.0))
            .unwrap();
        assert_eq!(values.currency, "6,600");
    }

    #[test]
    fn test_quick_fill_and_presets() {
        let mut calc = calculator();
        calc.on_field_focus(Field::Currency);

        assert_eq!(calc.quick_fill("14"), FieldValues::new("14", "0.25", "825"));
        assert_eq!(calc.active_field(), ActiveField::Metal);

        let values = calc.apply_preset("1 Key").unwrap();
        assert_eq!(values, FieldValues::new("56", "1", "3,300"));

        let values = calc.apply_preset("Craft Hat").unwrap();
        assert_eq!(values.metal, "1.33");
        assert_eq!(values.keys, "0.02");
        assert_eq!(values.currency, "78.38");

        assert_eq!(
            calc.apply_preset("Unusual"),
            Err(CalculatorError::UnknownPreset("Unusual".to_string()))
        );
    }

    #[test]
    fn test_snapshot_and_restore() {
        let mut calc = calculator();
        calc.on_field_edit(Field::Keys, "2");
        let snapshot = calc.snapshot();

        calc.on_clear();
        assert!(calc.values().is_empty());

        calc.restore(snapshot.clone());
        assert_eq!(calc.state(), &snapshot);
        assert_eq!(calc.values().metal, "112");
    }

    #[test]
    fn test_rate_summary() {
        let calc = calculator();
        assert_eq!(calc.rate_summary().price_per_unit_display(), "58.93");
    }

    #[test]
    fn test_events_emitted() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let mut calc = Calculator::new(RateConfig::standard(), recorder.clone());
        let session_id = calc.session_id();

        calc.on_field_focus(Field::Metal);
        calc.on_field_focus(Field::Metal);
        calc.on_field_edit(Field::Metal, "56");
        calc.on_field_edit(Field::Keys, "x");
        calc.on_rate_config_change(RateConfig::new(3000.0, 60.0));
        calc.on_clear();

        let events = recorder.drain();
        assert_eq!(events.len(), 6);
        assert!(events.iter().all(|e| e.session_id() == session_id));

        assert!(matches!(
            events[0],
            CalculatorEvent::FocusChanged {
                active: ActiveField::Metal,
                ..
            }
        ));
        assert!(matches!(
            &events[1],
            CalculatorEvent::FieldEdited { field: Field::Metal, values, .. }
                if values == &FieldValues::new("56", "1", "3,300")
        ));
        assert!(matches!(
            events[2],
            CalculatorEvent::FocusChanged {
                active: ActiveField::Keys,
                ..
            }
        ));
        assert!(matches!(
            &events[3],
            CalculatorEvent::InputRejected { field: Field::Keys, raw, .. } if raw == "x"
        ));
        assert!(matches!(
            events[4],
            CalculatorEvent::RatesChanged {
                recomputed: true,
                ..
            }
        ));
        assert!(matches!(events[5], CalculatorEvent::Cleared { .. }));
    }
}
