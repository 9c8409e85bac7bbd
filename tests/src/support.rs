use std::sync::{Arc, Mutex};

use motorpool_common::event::EVENT_TARGET;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

/// One notification event as seen by a subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorded {
    pub kind: String,
    pub message: String,
    pub vehicle: Option<u64>,
    pub garage: Option<u64>,
}

/// Layer that keeps every event published on the notification target.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl EventRecorder {
    pub fn take(&self) -> Vec<Recorded> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}

impl<S: Subscriber> Layer<S> for EventRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != EVENT_TARGET {
            return;
        }

        let mut recorded = Recorded::default();
        event.record(&mut recorded);
        if let Ok(mut events) = self.events.lock() {
            events.push(recorded);
        }
    }
}

impl Visit for Recorded {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "kind" {
            self.kind = value.to_string();
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "vehicle" => self.vehicle = Some(value),
            "garage" => self.garage = Some(value),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

/// Runs `f` with a recording subscriber installed on this thread.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Recorded>) {
    let recorder = EventRecorder::default();
    let subscriber = Registry::default().with(recorder.clone());
    let output = tracing::subscriber::with_default(subscriber, f);
    (output, recorder.take())
}

/// Kinds of the recorded events, in emission order.
pub fn kinds(events: &[Recorded]) -> Vec<&str> {
    events.iter().map(|e| e.kind.as_str()).collect()
}
