//! Diagnostics emitted while computing exclusions
//!
//! Every time a field is excluded the calculator hands an [`ExclusionEvent`]
//! to the configured [`DiagnosticsSink`]. Sinks are informational only: they
//! return nothing and a sink that panics is contained by the calculator.
//! The panic hook still fires for such a sink, so its message reaches stderr
//! unless the host process installs a quieter hook.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A field dropped at the requested version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionEvent {
    /// Lower bound declared on the field
    pub since: String,
    /// Version that was requested
    pub requested: String,
    /// Upper bound declared on the field
    pub until: String,
    /// Dot-delimited path of the excluded field
    pub path: String,
}

/// Receiver of exclusion events
pub trait DiagnosticsSink {
    fn record(&self, event: &ExclusionEvent);
}

/// Default sink, logs each exclusion through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&self, event: &ExclusionEvent) {
        tracing::info!(
            since = %event.since,
            requested = %event.requested,
            until = %event.until,
            path = %event.path,
            "Excluding versioned field"
        );
    }
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn record(&self, _event: &ExclusionEvent) {}
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<ExclusionEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<ExclusionEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticsSink for CollectingSink {
    fn record(&self, event: &ExclusionEvent) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
    }
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for &S {
    fn record(&self, event: &ExclusionEvent) {
        (**self).record(event)
    }
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for std::sync::Arc<S> {
    fn record(&self, event: &ExclusionEvent) {
        (**self).record(event)
    }
}
