//! Recording doubles for the analytics and navigation ports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::traits::{AnalyticsEvent, AnalyticsSink, Navigator};

/// Keeps every emitted event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnalytics {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Number of `Capture` events with the given name.
    pub fn count_captures(&self, name: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, AnalyticsEvent::Capture { name: n, .. } if n == name))
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn emit(&self, event: AnalyticsEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Counts calls to [`Navigator::go_to_login`].
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    login_visits: Arc<AtomicUsize>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_visits(&self) -> usize {
        self.login_visits.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn go_to_login(&self) {
        self.login_visits.fetch_add(1, Ordering::SeqCst);
    }
}
