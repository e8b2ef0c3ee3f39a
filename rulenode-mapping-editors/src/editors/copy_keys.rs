//! Copy-keys transformation editor.

use std::sync::Arc;

use rulenode_mapping_model::{ErrorSet, KeyListModel};
use serde_json::Value;

use crate::error::{EditorError, EditorResult};
use crate::traits::{ChangeNotifier, ConfigChangeListener, ConfigEditor};
use crate::types::{CopyKeysConfig, CopyKeysInput, FetchTo, resolve_fetch_to};

/// Editor for the copy-keys transformation: an ordered list of distinct
/// keys plus the side (`fromMetadata`) they are read from.
///
/// The key list is always required. Key input is normalized on entry:
/// trimmed, blank and duplicate keys silently ignored.
pub struct CopyKeysEditor {
    keys: KeyListModel,
    from_metadata: FetchTo,
    disabled: bool,
    notifier: ChangeNotifier,
}

impl Default for CopyKeysEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyKeysEditor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: KeyListModel::new(),
            from_metadata: FetchTo::Data,
            disabled: false,
            notifier: ChangeNotifier::default(),
        }
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        self.keys.keys()
    }

    #[must_use]
    pub fn from_metadata(&self) -> FetchTo {
        self.from_metadata
    }

    pub fn set_change_listener(&mut self, listener: Arc<dyn ConfigChangeListener>) {
        self.notifier.set(listener);
    }

    pub fn clear_change_listener(&mut self) {
        self.notifier.clear();
    }

    /// Adds a key (trimmed; blank or duplicate input is ignored) and
    /// emits.
    pub fn add_key(&mut self, raw: &str) -> bool {
        let changed = self.keys.add(raw);
        if changed {
            self.emit();
        }
        changed
    }

    /// Removes a key and emits.
    pub fn remove_key(&mut self, key: &str) -> bool {
        let changed = self.keys.remove(key);
        if changed {
            self.emit();
        }
        changed
    }

    /// Switches the side the keys are read from and emits.
    pub fn set_from_metadata(&mut self, from_metadata: FetchTo) -> bool {
        if self.disabled {
            return false;
        }
        self.from_metadata = from_metadata;
        self.emit();
        true
    }

    fn current_value(&self) -> Option<Value> {
        if self.keys.check(true).is_some() {
            return None;
        }
        let config = CopyKeysConfig {
            keys: self.keys.to_external(),
            from_metadata: self.from_metadata,
        };
        serde_json::to_value(config).ok()
    }

    fn emit(&self) {
        self.notifier.notify(self.current_value().as_ref());
    }
}

impl ConfigEditor for CopyKeysEditor {
    fn write_value(&mut self, config: Option<&Value>) -> EditorResult<()> {
        let input: CopyKeysInput = match config {
            None | Some(Value::Null) => CopyKeysInput::default(),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| EditorError::InvalidConfiguration(e.to_string()))?,
        };
        self.from_metadata = resolve_fetch_to(input.from_metadata, FetchTo::Data);
        self.keys.load(input.keys.as_deref());
        Ok(())
    }

    fn value(&self) -> Option<Value> {
        self.current_value()
    }

    fn validate(&self) -> Option<ErrorSet> {
        if self.disabled {
            return None;
        }
        self.keys.check(true)
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.keys.set_disabled(disabled);
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}
