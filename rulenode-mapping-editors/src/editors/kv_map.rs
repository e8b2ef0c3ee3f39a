//! Generic editable key/value map editor.

use std::sync::Arc;

use rulenode_mapping_model::{DuplicateRule, ErrorSet, KeyValueMap, KvEntry, KvMapModel};
use serde_json::Value;

use crate::error::{EditorError, EditorResult};
use crate::traits::{ChangeNotifier, ConfigChangeListener, ConfigEditor};

/// Editable key/value map bound to a plain JSON-object configuration
/// value.
///
/// The generic building block of the editor family: a `required` knob, an
/// optional unique key/value pair rule, and the `None` sentinel emission
/// whenever the mapping is invalid or required-and-empty.
pub struct KvMapEditor {
    model: KvMapModel,
    required: bool,
    notifier: ChangeNotifier,
}

impl KvMapEditor {
    #[must_use]
    pub fn new(required: bool, unique_key_value_pair: bool) -> Self {
        let rule = if unique_key_value_pair {
            DuplicateRule::UniquePair
        } else {
            DuplicateRule::Off
        };
        Self {
            model: KvMapModel::new(rule),
            required,
            notifier: ChangeNotifier::default(),
        }
    }

    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn entries(&self) -> &[KvEntry] {
        self.model.entries()
    }

    /// Current mapping projection, regardless of validity.
    #[must_use]
    pub fn mapping(&self) -> KeyValueMap {
        self.model.to_external()
    }

    pub fn set_change_listener(&mut self, listener: Arc<dyn ConfigChangeListener>) {
        self.notifier.set(listener);
    }

    pub fn clear_change_listener(&mut self) {
        self.notifier.clear();
    }

    /// Appends an empty entry and emits.
    pub fn add(&mut self) -> bool {
        let changed = self.model.add();
        if changed {
            self.emit();
        }
        changed
    }

    /// Removes the entry at `index` and emits.
    pub fn remove(&mut self, index: usize) -> bool {
        let changed = self.model.remove(index);
        if changed {
            self.emit();
        }
        changed
    }

    pub fn set_key(&mut self, index: usize, key: &str) -> bool {
        let changed = self.model.set_key(index, key);
        if changed {
            self.emit();
        }
        changed
    }

    pub fn set_value(&mut self, index: usize, value: &str) -> bool {
        let changed = self.model.set_value(index, value);
        if changed {
            self.emit();
        }
        changed
    }

    fn current_value(&self) -> Option<Value> {
        if self.model.check(self.required).is_some() {
            return None;
        }
        let object: serde_json::Map<String, Value> = self
            .model
            .to_external()
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();
        Some(Value::Object(object))
    }

    fn emit(&self) {
        self.notifier.notify(self.current_value().as_ref());
    }
}

impl ConfigEditor for KvMapEditor {
    fn write_value(&mut self, config: Option<&Value>) -> EditorResult<()> {
        let mapping = parse_mapping(config)?;
        self.model.load(mapping.as_ref());
        Ok(())
    }

    fn value(&self) -> Option<Value> {
        self.current_value()
    }

    fn validate(&self) -> Option<ErrorSet> {
        self.model.validate(self.required)
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.model.set_disabled(disabled);
    }

    fn is_disabled(&self) -> bool {
        self.model.is_disabled()
    }
}

/// Converts a JSON configuration value into a key/value mapping.
///
/// `None`/`null` mean "no mapping"; anything other than an all-string
/// object is malformed.
pub(crate) fn parse_mapping(config: Option<&Value>) -> EditorResult<Option<KeyValueMap>> {
    match config {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(object)) => {
            let mut mapping = KeyValueMap::new();
            for (key, value) in object {
                let Value::String(value) = value else {
                    return Err(EditorError::InvalidConfiguration(format!(
                        "mapping value for key '{key}' is not a string"
                    )));
                };
                mapping.insert(key.clone(), value.clone());
            }
            Ok(Some(mapping))
        }
        Some(other) => Err(EditorError::InvalidConfiguration(format!(
            "expected a key/value object, got: {other}"
        ))),
    }
}
