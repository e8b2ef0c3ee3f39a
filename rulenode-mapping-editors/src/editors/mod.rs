//! Concrete rule-node configuration editors.

mod copy_keys;
mod kv_map;
mod output_message_type;
mod related_attributes;
mod rename_keys;

pub use copy_keys::CopyKeysEditor;
pub use kv_map::KvMapEditor;
pub use output_message_type::OutputMessageTypeSelector;
pub use related_attributes::RelatedAttributesEditor;
pub use rename_keys::RenameKeysEditor;
