use std::sync::{Arc, Mutex};

use phantom_server::{Phantom, PhantomTracker};
use phantom_shared::PhantomKey;

use super::test_host::TestHost;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackerEvent {
    Created(PhantomKey),
    PlacementModeChanged { key: PhantomKey, was_relative: bool },
    ViewerSetEmptied(PhantomKey),
}

/// Tracker that only records the callbacks it receives
pub struct RecordingTracker {
    events: Mutex<Vec<TrackerEvent>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<TrackerEvent> {
        self.events.lock().unwrap().clone()
    }

    /// The `was_relative` flag of every placement notification for `key`
    pub fn placement_changes(&self, key: PhantomKey) -> Vec<bool> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                TrackerEvent::PlacementModeChanged {
                    key: event_key,
                    was_relative,
                } if *event_key == key => Some(*was_relative),
                _ => None,
            })
            .collect()
    }

    pub fn emptied_count(&self, key: PhantomKey) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| **event == TrackerEvent::ViewerSetEmptied(key))
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn push(&self, event: TrackerEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Default for RecordingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PhantomTracker<TestHost> for RecordingTracker {
    fn on_created(&self, phantom: &Arc<Phantom<TestHost>>) {
        if let Some(key) = phantom.key() {
            self.push(TrackerEvent::Created(key));
        }
    }

    fn on_placement_mode_changed(&self, key: PhantomKey, was_relative: bool) {
        self.push(TrackerEvent::PlacementModeChanged { key, was_relative });
    }

    fn on_viewer_set_emptied(&self, key: PhantomKey) {
        self.push(TrackerEvent::ViewerSetEmptied(key));
    }
}
