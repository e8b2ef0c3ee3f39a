//! A single editable key/value entry.

use serde::Serialize;

use crate::validation::is_non_blank;

/// One editable key/value pair plus its own validity flags.
///
/// Key and value are always required; a field is valid iff it passes the
/// non-blank rule ([`is_non_blank`]). The `duplicate` flag is maintained by
/// the owning collection's rescan after every change, not by the entry
/// itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KvEntry {
    key: String,
    value: String,
    key_valid: bool,
    value_valid: bool,
    duplicate: bool,
}

impl KvEntry {
    /// Creates an entry and validates both fields immediately.
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key_valid: is_non_blank(key),
            value_valid: is_non_blank(value),
            duplicate: false,
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn key_valid(&self) -> bool {
        self.key_valid
    }

    #[must_use]
    pub fn value_valid(&self) -> bool {
        self.value_valid
    }

    /// Whether the active duplicate rule flagged this entry.
    #[must_use]
    pub fn duplicate(&self) -> bool {
        self.duplicate
    }

    /// Both fields pass the non-blank rule.
    #[must_use]
    pub fn fields_valid(&self) -> bool {
        self.key_valid && self.value_valid
    }

    /// Updates the key and re-validates it.
    pub fn set_key(&mut self, key: &str) {
        key.clone_into(&mut self.key);
        self.key_valid = is_non_blank(&self.key);
    }

    /// Updates the value and re-validates it.
    pub fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
        self.value_valid = is_non_blank(&self.value);
    }

    pub(crate) fn set_duplicate(&mut self, duplicate: bool) {
        self.duplicate = duplicate;
    }
}
