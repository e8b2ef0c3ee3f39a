//! Related-entity attribute enrichment configuration.

use rulenode_mapping_model::KeyValueMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fetch::{DataToFetch, FetchTo};

/// Persisted related-entity enrichment configuration.
///
/// Only the mapping for the active [`DataToFetch`] mode is persisted, as
/// the generic `dataMapping` field; the edit-time split into an
/// entity-field mapping and a key mapping is not visible to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedAttributesConfig {
    /// Relation query selecting the related entity. Opaque to the editor,
    /// passed through as-is.
    pub relations_query: Value,
    /// Which related-entity data is fetched.
    pub data_to_fetch: DataToFetch,
    /// Source key (or entity field) to target key.
    pub data_mapping: KeyValueMap,
    /// Whether fetched values land in the message payload or its metadata.
    pub fetch_to: FetchTo,
}

/// Loose input shape covering every historical field layout.
///
/// `telemetry` is the boolean predecessor of `dataToFetch`; `attrMapping`
/// is the predecessor of `dataMapping`. Current fields are preferred when
/// both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RelatedAttributesInput {
    pub relations_query: Option<Value>,
    pub telemetry: Option<bool>,
    pub data_to_fetch: Option<DataToFetch>,
    pub attr_mapping: Option<KeyValueMap>,
    pub data_mapping: Option<KeyValueMap>,
    pub fetch_to: Option<FetchTo>,
}

/// Seed entity-field mapping shown when no configuration was loaded.
pub(crate) fn default_sv_map() -> KeyValueMap {
    let mut mapping = KeyValueMap::new();
    mapping.insert("name".to_string(), "relatedEntityName".to_string());
    mapping
}

/// Seed key mapping shown when no configuration was loaded.
pub(crate) fn default_kv_map() -> KeyValueMap {
    let mut mapping = KeyValueMap::new();
    mapping.insert("serialNumber".to_string(), "sn".to_string());
    mapping
}
