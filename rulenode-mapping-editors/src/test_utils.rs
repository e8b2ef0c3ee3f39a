//! Test helper module
//!
//! Mock implementations for the change-notification seam.

use std::sync::Mutex;

use serde_json::Value;

use crate::traits::ConfigChangeListener;

/// Records every emission for later assertions.
#[derive(Default)]
pub struct RecordingListener {
    emissions: Mutex<Vec<Option<Value>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// All emissions seen so far, oldest first.
    pub fn emissions(&self) -> Vec<Option<Value>> {
        self.emissions.lock().expect("listener lock poisoned").clone()
    }

    /// The most recent emission, if any.
    pub fn last(&self) -> Option<Option<Value>> {
        self.emissions().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.emissions().len()
    }
}

impl ConfigChangeListener for RecordingListener {
    fn config_changed(&self, value: Option<&Value>) {
        self.emissions
            .lock()
            .expect("listener lock poisoned")
            .push(value.cloned());
    }
}
