//! Shared helpers for the editor integration tests.

use std::sync::Mutex;

use rulenode_mapping_editors::ConfigChangeListener;
use serde_json::Value;

/// Records every emission for later assertions.
#[derive(Default)]
pub struct RecordingListener {
    emissions: Mutex<Vec<Option<Value>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> Vec<Option<Value>> {
        self.emissions.lock().expect("listener lock poisoned").clone()
    }

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
