//! Rename-keys transformation configuration.

use rulenode_mapping_model::KeyValueMap;
use serde::{Deserialize, Serialize};

use super::fetch::{FetchTo, FetchToCompat};

/// Persisted rename-keys configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameKeysConfig {
    /// Current key name to new key name.
    pub rename_keys_mapping: KeyValueMap,
    /// Side the keys are renamed on.
    pub from_metadata: FetchTo,
}

/// Loose input shape: tolerates absent fields and the legacy boolean
/// `fromMetadata`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RenameKeysInput {
    pub rename_keys_mapping: Option<KeyValueMap>,
    pub from_metadata: Option<FetchToCompat>,
}
