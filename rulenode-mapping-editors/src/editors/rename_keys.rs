//! Rename-keys transformation editor.

use std::sync::Arc;

use rulenode_mapping_model::{DuplicateRule, ErrorSet, KvEntry, KvMapModel};
use serde_json::Value;

use crate::error::{EditorError, EditorResult};
use crate::traits::{ChangeNotifier, ConfigChangeListener, ConfigEditor};
use crate::types::{FetchTo, RenameKeysConfig, RenameKeysInput, resolve_fetch_to};

/// Editor for the rename-keys transformation: a required mapping of
/// current key names to new key names plus the side (`fromMetadata`) the
/// rename applies to.
///
/// Two keys renamed to the same target would collide after the rename, so
/// the mapping runs under the cross-entry duplicate-value rule: every
/// entry sharing a new name with another entry is flagged.
pub struct RenameKeysEditor {
    model: KvMapModel,
    from_metadata: FetchTo,
    disabled: bool,
    notifier: ChangeNotifier,
}

impl Default for RenameKeysEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RenameKeysEditor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: KvMapModel::new(DuplicateRule::UniqueValues),
            from_metadata: FetchTo::Data,
            disabled: false,
            notifier: ChangeNotifier::default(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[KvEntry] {
        self.model.entries()
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

    /// Appends an empty rename pair and emits.
    pub fn add(&mut self) -> bool {
        let changed = self.model.add();
        if changed {
            self.emit();
        }
        changed
    }

    /// Removes the rename pair at `index` and emits.
    pub fn remove(&mut self, index: usize) -> bool {
        let changed = self.model.remove(index);
        if changed {
            self.emit();
        }
        changed
    }

    /// Updates the current key name of the pair at `index` and emits.
    pub fn set_key(&mut self, index: usize, key: &str) -> bool {
        let changed = self.model.set_key(index, key);
        if changed {
            self.emit();
        }
        changed
    }

    /// Updates the new key name of the pair at `index` and emits.
    pub fn set_new_name(&mut self, index: usize, new_name: &str) -> bool {
        let changed = self.model.set_value(index, new_name);
        if changed {
            self.emit();
        }
        changed
    }

    /// Switches the side the rename applies to and emits.
    pub fn set_from_metadata(&mut self, from_metadata: FetchTo) -> bool {
        if self.disabled {
            return false;
        }
        self.from_metadata = from_metadata;
        self.emit();
        true
    }

    fn current_value(&self) -> Option<Value> {
        if self.model.check(true).is_some() {
            return None;
        }
        let config = RenameKeysConfig {
            rename_keys_mapping: self.model.to_external(),
            from_metadata: self.from_metadata,
        };
        serde_json::to_value(config).ok()
    }

    fn emit(&self) {
        self.notifier.notify(self.current_value().as_ref());
    }
}

impl ConfigEditor for RenameKeysEditor {
    fn write_value(&mut self, config: Option<&Value>) -> EditorResult<()> {
        let input: RenameKeysInput = match config {
            None | Some(Value::Null) => RenameKeysInput::default(),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| EditorError::InvalidConfiguration(e.to_string()))?,
        };
        self.from_metadata = resolve_fetch_to(input.from_metadata, FetchTo::Data);
        self.model.load(input.rename_keys_mapping.as_ref());
        Ok(())
    }

    fn value(&self) -> Option<Value> {
        self.current_value()
    }

    fn validate(&self) -> Option<ErrorSet> {
        if self.disabled {
            return None;
        }
        self.model.check(true)
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.model.set_disabled(disabled);
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingListener;
    use rulenode_mapping_model::ValidationFlag;
    use serde_json::json;

    #[test]
    fn write_value_loads_mapping_and_side() {
        let mut editor = RenameKeysEditor::new();
        editor
            .write_value(Some(&json!({
                "renameKeysMapping": {"temp": "temperature"},
                "fromMetadata": "METADATA"
            })))
            .expect("current shape");
        assert_eq!(editor.entries().len(), 1);
        assert_eq!(editor.from_metadata(), FetchTo::Metadata);
        assert_eq!(
            editor.value(),
            Some(json!({
                "renameKeysMapping": {"temp": "temperature"},
                "fromMetadata": "METADATA"
            }))
        );
    }

    #[test]
    fn write_value_migrates_legacy_boolean() {
        let mut editor = RenameKeysEditor::new();
        editor
            .write_value(Some(&json!({
                "renameKeysMapping": {"a": "b"},
                "fromMetadata": false
            })))
            .expect("legacy shape");
        assert_eq!(editor.from_metadata(), FetchTo::Data);
    }

    #[test]
    fn empty_mapping_is_invalid() {
        let mut editor = RenameKeysEditor::new();
        editor.write_value(None).expect("reset");
        let errors = editor.validate().expect("mapping required");
        assert!(errors.contains(ValidationFlag::MappingRequired));
        assert_eq!(editor.value(), None);
    }

    #[test]
    fn colliding_new_names_block_the_value() {
        let listener = Arc::new(RecordingListener::new());
        let mut editor = RenameKeysEditor::new();
        editor
            .write_value(Some(&json!({"renameKeysMapping": {"a": "x"}})))
            .expect("current shape");
        editor.set_change_listener(listener.clone());

        editor.add();
        editor.set_key(1, "b");
        editor.set_new_name(1, "x");

        assert!(editor.entries()[0].duplicate());
        assert!(editor.entries()[1].duplicate());
        let errors = editor.validate().expect("value collision");
        assert!(errors.contains(ValidationFlag::DuplicatePair));
        assert_eq!(listener.last(), Some(None));

        editor.set_new_name(1, "y");
        assert_eq!(editor.validate(), None);
        assert_eq!(
            listener.last(),
            Some(Some(json!({
                "renameKeysMapping": {"a": "x", "b": "y"},
                "fromMetadata": "DATA"
            })))
        );
    }

    #[test]
    fn renaming_a_key_to_itself_is_allowed() {
        // Only cross-entry collisions are flagged here; key == value is
        // the pair rule of other editors.
        let mut editor = RenameKeysEditor::new();
        editor
            .write_value(Some(&json!({"renameKeysMapping": {"x": "x"}})))
            .expect("current shape");
        assert_eq!(editor.validate(), None);
    }

    #[test]
    fn disabled_editor_is_inert() {
        let mut editor = RenameKeysEditor::new();
        editor
            .write_value(Some(&json!({"renameKeysMapping": {"a": "b"}})))
            .expect("current shape");
        editor.set_disabled(true);
        assert!(!editor.add());
        assert!(!editor.set_from_metadata(FetchTo::Metadata));
        assert_eq!(editor.validate(), None);
        assert!(editor.value().is_some());
    }
}
