//! Configuration type definitions for the editor family.

mod copy_keys;
mod fetch;
mod message_type;
mod related_attributes;
mod rename_keys;

pub use copy_keys::CopyKeysConfig;
pub(crate) use copy_keys::CopyKeysInput;
pub use fetch::{DataToFetch, FetchTo};
pub(crate) use fetch::{FetchToCompat, resolve_fetch_to};
pub use message_type::{MAX_MESSAGE_TYPE_LEN, MessageTypeAlias};
pub use related_attributes::RelatedAttributesConfig;
pub(crate) use related_attributes::{RelatedAttributesInput, default_kv_map, default_sv_map};
pub use rename_keys::RenameKeysConfig;
pub(crate) use rename_keys::RenameKeysInput;
