//! Copy-keys transformation configuration.

use serde::{Deserialize, Serialize};

use super::fetch::{FetchTo, FetchToCompat};

/// Persisted copy-keys configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyKeysConfig {
    /// Keys copied between the message payload and its metadata.
    pub keys: Vec<String>,
    /// Side the keys are read from.
    pub from_metadata: FetchTo,
}

/// Loose input shape: tolerates absent fields and the legacy boolean
/// `fromMetadata`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CopyKeysInput {
    pub keys: Option<Vec<String>>,
    pub from_metadata: Option<FetchToCompat>,
}
