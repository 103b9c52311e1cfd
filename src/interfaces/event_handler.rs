// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator state changes
// ============================================================================

use crate::domain::{ActiveField, Field, FieldValues, RateConfig, SessionId};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// Active field changed by focus
    FocusChanged {
        session_id: SessionId,
        active: ActiveField,
        timestamp: DateTime<Utc>,
    },

    /// Numeric text entered; the other two fields were recomputed
    FieldEdited {
        session_id: SessionId,
        field: Field,
        values: FieldValues,
        timestamp: DateTime<Utc>,
    },

    /// Text without a numeric value entered; the other two fields were emptied
    InputRejected {
        session_id: SessionId,
        field: Field,
        raw: String,
        timestamp: DateTime<Utc>,
    },

    /// Rates replaced
    RatesChanged {
        session_id: SessionId,
        rates: RateConfig,
        recomputed: bool,
        timestamp: DateTime<Utc>,
    },

    /// All field values emptied
    Cleared {
        session_id: SessionId,
        timestamp: DateTime<Utc>,
    },
}

impl CalculatorEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            CalculatorEvent::FocusChanged { session_id, .. }
            | CalculatorEvent::FieldEdited { session_id, .. }
            | CalculatorEvent::InputRejected { session_id, .. }
            | CalculatorEvent::RatesChanged { session_id, .. }
            | CalculatorEvent::Cleared { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for observing the calculator
/// Implementations can handle logging, rendering hooks, audit, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        tracing::debug!(session = %event.session_id(), "Calculator event: {:?}", event);
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculatorEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<CalculatorEvent> {
        self.events.lock().clone()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&self) -> Vec<CalculatorEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculatorEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleared(session_id: SessionId) -> CalculatorEvent {
        CalculatorEvent::Cleared {
            session_id,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(cleared(SessionId::new()));
        // Should not panic
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        let session_id = SessionId::new();
        assert!(handler.is_empty());

        handler.on_event(cleared(session_id));
        handler.on_events(vec![
            CalculatorEvent::FocusChanged {
                session_id,
                active: ActiveField::Keys,
                timestamp: Utc::now(),
            },
            cleared(session_id),
        ]);

        assert_eq!(handler.len(), 3);
        assert!(matches!(
            handler.events()[1],
            CalculatorEvent::FocusChanged {
                active: ActiveField::Keys,
                ..
            }
        ));

        let drained = handler.drain();
        assert_eq!(drained.len(), 3);
        assert!(drained.iter().all(|e| e.session_id() == session_id));
        assert!(handler.is_empty());
    }
}
