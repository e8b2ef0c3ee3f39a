//! # rulenode-mapping-editors
//!
//! Configuration editors for data-transformation rule nodes, built on the
//! [`rulenode_mapping_model`] editing engine.
//!
//! ## Editors
//!
//! | Editor | Configuration | Mapping rule |
//! |--------|---------------|--------------|
//! | [`KvMapEditor`] | plain key/value object | optional unique key/value pair |
//! | [`CopyKeysEditor`] | `keys` + `fromMetadata` | distinct trimmed keys |
//! | [`RenameKeysEditor`] | `renameKeysMapping` + `fromMetadata` | cross-entry unique new names |
//! | [`RelatedAttributesEditor`] | `relationsQuery` + `dataToFetch` + `dataMapping` + `fetchTo` | mode-gated sibling mappings |
//! | [`OutputMessageTypeSelector`] | message type string | known aliases + custom text |
//!
//! Every editor speaks the same host seam: [`ConfigEditor`] for loading
//! and reading configurations, [`ConfigChangeListener`] for synchronous
//! change notification. A change that leaves the editor valid emits the
//! persisted configuration; an invalid or required-and-empty state emits
//! the `None` sentinel, which the host must not persist.
//!
//! Configurations written by older releases load transparently: legacy
//! field names (`telemetry`, `attrMapping`, boolean `fromMetadata`)
//! resolve to their current equivalents, absent fields to documented
//! defaults.
//!
//! ## Usage
//!
//! ```rust
//! use rulenode_mapping_editors::{ConfigEditor, KvMapEditor};
//! use serde_json::json;
//!
//! let mut editor = KvMapEditor::new(true, false);
//! editor.write_value(Some(&json!({"sn": "serialNumber"})))?;
//! assert_eq!(editor.value(), Some(json!({"sn": "serialNumber"})));
//!
//! // An empty pair invalidates the mapping until it is filled in.
//! editor.add();
//! assert!(editor.value().is_none());
//! editor.set_key(1, "model");
//! editor.set_value(1, "deviceModel");
//! assert!(editor.value().is_some());
//! # Ok::<(), rulenode_mapping_editors::EditorError>(())
//! ```

pub mod editors;
pub mod error;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use editors::{
    CopyKeysEditor, KvMapEditor, OutputMessageTypeSelector, RelatedAttributesEditor,
    RenameKeysEditor,
};
pub use error::{EditorError, EditorResult};
pub use traits::{ConfigChangeListener, ConfigEditor};
pub use types::{
    CopyKeysConfig, DataToFetch, FetchTo, MAX_MESSAGE_TYPE_LEN, MessageTypeAlias,
    RelatedAttributesConfig, RenameKeysConfig,
};
pub use utils::deep_trim;

// Re-export the model crate's public types
pub use rulenode_mapping_model::{
    DuplicateRule, ErrorSet, KeyListModel, KeyValueMap, KvEntry, KvMapModel, ValidationFlag,
};
