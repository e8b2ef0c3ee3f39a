//! Related-entity attribute enrichment editor.

use std::sync::Arc;

use rulenode_mapping_model::{
    DuplicateRule, ErrorSet, KeyValueMap, KvEntry, KvMapModel, ValidationFlag,
};
use serde_json::Value;

use crate::error::{EditorError, EditorResult};
use crate::traits::{ChangeNotifier, ConfigChangeListener, ConfigEditor};
use crate::types::{
    DataToFetch, FetchTo, RelatedAttributesConfig, RelatedAttributesInput, default_kv_map,
    default_sv_map,
};
use crate::utils::deep_trim;

/// Editor for the related-entity enrichment: fetches attributes, latest
/// telemetry or entity fields of a related entity into the message.
///
/// Two sibling mappings are edited behind one mode switch: the
/// entity-field mapping (`svMap`, active in [`DataToFetch::Fields`]) and
/// the key mapping (`kvMap`, active otherwise). Exactly one of them is
/// required at a time; switching the mode never touches either mapping's
/// entries, so switching back restores previously entered pairs. Only the
/// active mapping is persisted, as the generic `dataMapping` field.
pub struct RelatedAttributesEditor {
    relations_query: Option<Value>,
    data_to_fetch: DataToFetch,
    sv_map: KvMapModel,
    kv_map: KvMapModel,
    fetch_to: FetchTo,
    disabled: bool,
    notifier: ChangeNotifier,
}

impl Default for RelatedAttributesEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RelatedAttributesEditor {
    #[must_use]
    pub fn new() -> Self {
        let mut sv_map = KvMapModel::new(DuplicateRule::Off);
        sv_map.load(Some(&default_sv_map()));
        let mut kv_map = KvMapModel::new(DuplicateRule::Off);
        kv_map.load(Some(&default_kv_map()));
        Self {
            relations_query: None,
            data_to_fetch: DataToFetch::Attributes,
            sv_map,
            kv_map,
            fetch_to: FetchTo::Metadata,
            disabled: false,
            notifier: ChangeNotifier::default(),
        }
    }

    #[must_use]
    pub fn relations_query(&self) -> Option<&Value> {
        self.relations_query.as_ref()
    }

    #[must_use]
    pub fn data_to_fetch(&self) -> DataToFetch {
        self.data_to_fetch
    }

    #[must_use]
    pub fn fetch_to(&self) -> FetchTo {
        self.fetch_to
    }

    /// Entries of the mapping the current mode activates.
    #[must_use]
    pub fn entries(&self) -> &[KvEntry] {
        self.active_mapping().entries()
    }

    /// Entity-field mapping (active in [`DataToFetch::Fields`]).
    #[must_use]
    pub fn sv_map(&self) -> KeyValueMap {
        self.sv_map.to_external()
    }

    /// Key mapping (active in attribute and telemetry modes).
    #[must_use]
    pub fn kv_map(&self) -> KeyValueMap {
        self.kv_map.to_external()
    }

    pub fn set_change_listener(&mut self, listener: Arc<dyn ConfigChangeListener>) {
        self.notifier.set(listener);
    }

    pub fn clear_change_listener(&mut self) {
        self.notifier.clear();
    }

    /// Replaces the relation query and emits.
    pub fn set_relations_query(&mut self, query: Option<Value>) -> bool {
        if self.disabled {
            return false;
        }
        self.relations_query = query;
        self.emit();
        true
    }

    /// Switches which data is fetched and emits.
    ///
    /// The now-active mapping becomes required and the other one stops
    /// counting toward validity; no entries are touched on either side.
    pub fn set_data_to_fetch(&mut self, mode: DataToFetch) -> bool {
        if self.disabled {
            return false;
        }
        self.data_to_fetch = mode;
        self.emit();
        true
    }

    /// Switches where fetched values land and emits.
    pub fn set_fetch_to(&mut self, fetch_to: FetchTo) -> bool {
        if self.disabled {
            return false;
        }
        self.fetch_to = fetch_to;
        self.emit();
        true
    }

    /// Appends an empty pair to the active mapping and emits.
    pub fn add_entry(&mut self) -> bool {
        let changed = self.active_mapping_mut().add();
        if changed {
            self.emit();
        }
        changed
    }

    /// Removes the pair at `index` from the active mapping and emits.
    pub fn remove_entry(&mut self, index: usize) -> bool {
        let changed = self.active_mapping_mut().remove(index);
        if changed {
            self.emit();
        }
        changed
    }

    pub fn set_entry_key(&mut self, index: usize, key: &str) -> bool {
        let changed = self.active_mapping_mut().set_key(index, key);
        if changed {
            self.emit();
        }
        changed
    }

    pub fn set_entry_value(&mut self, index: usize, value: &str) -> bool {
        let changed = self.active_mapping_mut().set_value(index, value);
        if changed {
            self.emit();
        }
        changed
    }

    fn active_mapping(&self) -> &KvMapModel {
        match self.data_to_fetch {
            DataToFetch::Fields => &self.sv_map,
            DataToFetch::Attributes | DataToFetch::LatestTelemetry => &self.kv_map,
        }
    }

    fn active_mapping_mut(&mut self) -> &mut KvMapModel {
        match self.data_to_fetch {
            DataToFetch::Fields => &mut self.sv_map,
            DataToFetch::Attributes | DataToFetch::LatestTelemetry => &mut self.kv_map,
        }
    }

    /// Pure aggregate over the active parts, independent of the disabled
    /// state. The inactive mapping carries no validators.
    fn check_all(&self) -> Option<ErrorSet> {
        let mut errors = ErrorSet::new();
        if self.relations_query.is_none() {
            errors.insert(ValidationFlag::FieldsRequired);
        }
        errors.merge(self.active_mapping().check(true));
        errors.into_result()
    }

    fn current_value(&self) -> Option<Value> {
        if self.check_all().is_some() {
            return None;
        }
        let relations_query = self.relations_query.clone()?;
        let data_mapping: KeyValueMap = self
            .active_mapping()
            .to_external()
            .into_iter()
            .map(|(key, value)| (key.trim().to_string(), value))
            .collect();
        let config = RelatedAttributesConfig {
            relations_query,
            data_to_fetch: self.data_to_fetch,
            data_mapping,
            fetch_to: self.fetch_to,
        };
        serde_json::to_value(config).ok().map(deep_trim)
    }

    fn emit(&self) {
        self.notifier.notify(self.current_value().as_ref());
    }
}

impl ConfigEditor for RelatedAttributesEditor {
    fn write_value(&mut self, config: Option<&Value>) -> EditorResult<()> {
        let input: RelatedAttributesInput = match config {
            None | Some(Value::Null) => RelatedAttributesInput::default(),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| EditorError::InvalidConfiguration(e.to_string()))?,
        };

        let data_to_fetch = match (input.data_to_fetch, input.telemetry) {
            (Some(mode), _) => mode,
            (None, Some(telemetry)) => {
                let mode = if telemetry {
                    DataToFetch::LatestTelemetry
                } else {
                    DataToFetch::Attributes
                };
                log::debug!("Resolved legacy telemetry={telemetry} flag to dataToFetch={mode}");
                mode
            }
            (None, None) => DataToFetch::Attributes,
        };

        let loaded = match (input.data_mapping, input.attr_mapping) {
            (Some(mapping), _) => Some(mapping),
            (None, Some(mapping)) => {
                log::debug!("Loaded mapping from legacy attrMapping field");
                Some(mapping)
            }
            (None, None) => None,
        };

        let mut sv_map = default_sv_map();
        let mut kv_map = default_kv_map();
        if let Some(mapping) = loaded {
            if data_to_fetch == DataToFetch::Fields {
                sv_map = mapping;
            } else {
                kv_map = mapping;
            }
        }

        self.relations_query = input.relations_query;
        self.data_to_fetch = data_to_fetch;
        self.fetch_to = input.fetch_to.unwrap_or(FetchTo::Metadata);
        self.sv_map.load(Some(&sv_map));
        self.kv_map.load(Some(&kv_map));
        Ok(())
    }

    fn value(&self) -> Option<Value> {
        self.current_value()
    }

    fn validate(&self) -> Option<ErrorSet> {
        if self.disabled {
            return None;
        }
        self.check_all()
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.sv_map.set_disabled(disabled);
        self.kv_map.set_disabled(disabled);
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}
