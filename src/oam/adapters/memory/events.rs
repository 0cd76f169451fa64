//! Recording event sink.

use crate::oam::domain::EventNotification;
use crate::oam::ports::EventSink;
use std::sync::{Arc, Mutex};

/// Event sink that keeps every published notification.
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    notifications: Arc<Mutex<Vec<EventNotification>>>,
}

impl RecordingEventSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the notifications published so far.
    ///
    /// A poisoned lock yields the data recorded before the poisoning.
    #[must_use]
    pub fn notifications(&self) -> Vec<EventNotification> {
        self.notifications
            .lock()
            .map_or_else(|poisoned| poisoned.into_inner().clone(), |guard| guard.clone())
    }
}

impl EventSink for RecordingEventSink {
    fn publish(&self, notification: &EventNotification) {
        match self.notifications.lock() {
            Ok(mut guard) => guard.push(notification.clone()),
            Err(poisoned) => poisoned.into_inner().push(notification.clone()),
        }
    }
}
