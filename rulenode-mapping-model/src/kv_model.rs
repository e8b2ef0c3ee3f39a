//! Ordered, editable key/value mapping collection.

use std::collections::BTreeMap;

use crate::entry::KvEntry;
use crate::validation::{ErrorSet, ValidationFlag};

/// Plain key-to-value mapping exchanged with the backend.
///
/// The external format is an unordered JSON object; a `BTreeMap` keeps
/// iteration deterministic.
pub type KeyValueMap = BTreeMap<String, String>;

/// Duplicate-detection mode for a [`KvMapModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateRule {
    /// No duplicate detection.
    #[default]
    Off,
    /// Flag entries whose key equals their own value.
    UniquePair,
    /// Flag every entry whose value appears on two or more entries.
    ///
    /// A value that matches only its own entry's key is not flagged; that
    /// case belongs to [`UniquePair`](Self::UniquePair).
    UniqueValues,
}

/// Ordered collection of editable [`KvEntry`] records.
///
/// Insertion order is significant for rendering; the external mapping
/// produced by [`to_external`](Self::to_external) is unordered and has
/// unique keys by construction (last entry with a given key wins).
/// Duplicate keys may transiently exist across entries while editing; they
/// are not rejected at the collection level.
///
/// Disabling the collection freezes structural mutation and suspends
/// aggregate validation: a disabled collection is "disabled", not
/// "invalid".
#[derive(Debug, Clone, Default)]
pub struct KvMapModel {
    entries: Vec<KvEntry>,
    duplicate_rule: DuplicateRule,
    disabled: bool,
}

impl KvMapModel {
    /// Creates an empty collection with the given duplicate rule.
    #[must_use]
    pub fn new(duplicate_rule: DuplicateRule) -> Self {
        Self {
            entries: Vec::new(),
            duplicate_rule,
            disabled: false,
        }
    }

    /// Replaces the entries with one per pair of `mapping`, preserving the
    /// input's iteration order. `None` clears the collection.
    ///
    /// Loading is a programmatic operation and works while disabled.
    pub fn load(&mut self, mapping: Option<&KeyValueMap>) {
        self.entries.clear();
        if let Some(mapping) = mapping {
            for (key, value) in mapping {
                self.entries.push(KvEntry::new(key, value));
            }
        }
        self.rescan_duplicates();
    }

    /// Appends an empty entry (both fields invalid until filled in).
    ///
    /// Returns `false` while disabled.
    pub fn add(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.entries.push(KvEntry::default());
        self.rescan_duplicates();
        true
    }

    /// Removes the entry at `index`.
    ///
    /// Out-of-range indices and the disabled state are logged no-ops.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.disabled {
            return false;
        }
        if index >= self.entries.len() {
            log::warn!(
                "Ignoring removal at index {index}, collection has {} entries",
                self.entries.len()
            );
            return false;
        }
        self.entries.remove(index);
        self.rescan_duplicates();
        true
    }

    /// Updates the key of the entry at `index` and re-validates.
    pub fn set_key(&mut self, index: usize, key: &str) -> bool {
        if self.disabled {
            return false;
        }
        let Some(entry) = self.entries.get_mut(index) else {
            log::warn!("Ignoring key edit at out-of-range index {index}");
            return false;
        };
        entry.set_key(key);
        self.rescan_duplicates();
        true
    }

    /// Updates the value of the entry at `index` and re-validates.
    pub fn set_value(&mut self, index: usize, value: &str) -> bool {
        if self.disabled {
            return false;
        }
        let Some(entry) = self.entries.get_mut(index) else {
            log::warn!("Ignoring value edit at out-of-range index {index}");
            return false;
        };
        entry.set_value(value);
        self.rescan_duplicates();
        true
    }

    #[must_use]
    pub fn entries(&self) -> &[KvEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn duplicate_rule(&self) -> DuplicateRule {
        self.duplicate_rule
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Projects the entries into a fresh plain mapping.
    ///
    /// Entries with a blank key or value are skipped; on key collision the
    /// last entry in collection order wins.
    #[must_use]
    pub fn to_external(&self) -> KeyValueMap {
        let mut mapping = KeyValueMap::new();
        for entry in &self.entries {
            if entry.fields_valid() {
                mapping.insert(entry.key().to_string(), entry.value().to_string());
            }
        }
        mapping
    }

    /// Aggregate validation, suspended while disabled.
    ///
    /// See [`check`](Self::check) for the precedence of the underlying
    /// rules.
    #[must_use]
    pub fn validate(&self, required: bool) -> Option<ErrorSet> {
        if self.disabled {
            return None;
        }
        self.check(required)
    }

    /// Pure aggregate validation, independent of the disabled state.
    ///
    /// Precedence: `mappingRequired` (required and empty), then
    /// `fieldsRequired` (any blank key/value), then `duplicatePair` (any
    /// entry flagged by the duplicate rule). Returns `None` when valid.
    #[must_use]
    pub fn check(&self, required: bool) -> Option<ErrorSet> {
        if required && self.entries.is_empty() {
            return Some(ErrorSet::of(ValidationFlag::MappingRequired));
        }
        if self.entries.iter().any(|e| !e.fields_valid()) {
            return Some(ErrorSet::of(ValidationFlag::FieldsRequired));
        }
        if self.entries.iter().any(KvEntry::duplicate) {
            return Some(ErrorSet::of(ValidationFlag::DuplicatePair));
        }
        None
    }

    /// Re-derives every entry's duplicate flag from the whole collection.
    fn rescan_duplicates(&mut self) {
        match self.duplicate_rule {
            DuplicateRule::Off => {
                for entry in &mut self.entries {
                    entry.set_duplicate(false);
                }
            }
            DuplicateRule::UniquePair => {
                for entry in &mut self.entries {
                    let flagged = entry.key() == entry.value();
                    entry.set_duplicate(flagged);
                }
            }
            DuplicateRule::UniqueValues => {
                // Blank values are already covered by the required rule.
                let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
                for entry in &self.entries {
                    if entry.value_valid() {
                        *counts.entry(entry.value()).or_insert(0) += 1;
                    }
                }
                let repeated: Vec<String> = counts
                    .into_iter()
                    .filter(|&(_, count)| count > 1)
                    .map(|(value, _)| value.to_string())
                    .collect();
                for entry in &mut self.entries {
                    let flagged =
                        entry.value_valid() && repeated.iter().any(|v| v == entry.value());
                    entry.set_duplicate(flagged);
                }
            }
        }
    }
}
