//! Ordered list of distinct message keys (the chip-input model).

use crate::validation::{ErrorSet, ValidationFlag, is_non_blank};

/// Ordered collection of distinct, trimmed, non-blank keys.
///
/// Keys are normalized on entry: [`add`](Self::add) trims its input and
/// silently ignores blank or already-present keys, so every stored key is
/// valid by construction and validation reduces to the required/empty
/// check.
#[derive(Debug, Clone, Default)]
pub struct KeyListModel {
    keys: Vec<String>,
    disabled: bool,
}

impl KeyListModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list with `keys` as given. `None` clears the list.
    ///
    /// Loading is a programmatic operation and works while disabled.
    pub fn load(&mut self, keys: Option<&[String]>) {
        self.keys.clear();
        if let Some(keys) = keys {
            self.keys.extend(keys.iter().cloned());
        }
    }

    /// Trims `raw` and appends it; blank or duplicate input is ignored.
    pub fn add(&mut self, raw: &str) -> bool {
        if self.disabled {
            return false;
        }
        let key = raw.trim();
        if key.is_empty() || self.keys.iter().any(|k| k == key) {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    /// Removes `key` if present.
    pub fn remove(&mut self, key: &str) -> bool {
        if self.disabled {
            return false;
        }
        let Some(index) = self.keys.iter().position(|k| k == key) else {
            return false;
        };
        self.keys.remove(index);
        true
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn to_external(&self) -> Vec<String> {
        self.keys.clone()
    }

    /// Aggregate validation, suspended while disabled.
    #[must_use]
    pub fn validate(&self, required: bool) -> Option<ErrorSet> {
        if self.disabled {
            return None;
        }
        self.check(required)
    }

    /// Pure validation, independent of the disabled state.
    #[must_use]
    pub fn check(&self, required: bool) -> Option<ErrorSet> {
        if required && self.keys.is_empty() {
            return Some(ErrorSet::of(ValidationFlag::MappingRequired));
        }
        // Loaded keys are trusted; edited keys are normalized on add. A
        // blank key can only appear through load, flag it anyway.
        if self.keys.iter().any(|k| !is_non_blank(k)) {
            return Some(ErrorSet::of(ValidationFlag::FieldsRequired));
        }
        None
    }
}
