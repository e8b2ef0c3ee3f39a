//! Aggregate validation flags and the de-duplicated error set.

use std::collections::BTreeSet;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Returns `true` when `s` contains at least one non-whitespace character.
///
/// This is the non-blank rule applied to every required string field in the
/// editor family: empty and whitespace-only strings are invalid, interior
/// whitespace is fine.
#[must_use]
pub fn is_non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

/// A single aggregate validation failure kind.
///
/// Flags summarize a whole collection or editor; per-entry detail stays on
/// the entries themselves. Any number of entries failing the same rule
/// yields the flag once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationFlag {
    /// The collection is required but has no entries.
    MappingRequired,
    /// At least one entry has a blank key or value.
    FieldsRequired,
    /// The active duplicate rule flagged at least one entry.
    DuplicatePair,
    /// The message-type value is blank while required, or exceeds the
    /// length cap.
    MessageTypeInvalid,
}

impl ValidationFlag {
    /// Host-facing camelCase name, used as the key in the serialized
    /// error object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MappingRequired => "mappingRequired",
            Self::FieldsRequired => "fieldsRequired",
            Self::DuplicatePair => "duplicatePair",
            Self::MessageTypeInvalid => "messageTypeInvalid",
        }
    }
}

impl fmt::Display for ValidationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// De-duplicated set of [`ValidationFlag`]s for an editor or collection.
///
/// Serializes as the flag-to-`true` object hosts render from:
///
/// ```json
/// {"fieldsRequired": true, "duplicatePair": true}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    flags: BTreeSet<ValidationFlag>,
}

impl ErrorSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding a single flag.
    #[must_use]
    pub fn of(flag: ValidationFlag) -> Self {
        let mut set = Self::new();
        set.insert(flag);
        set
    }

    /// Adds a flag; returns `false` if it was already present.
    pub fn insert(&mut self, flag: ValidationFlag) -> bool {
        self.flags.insert(flag)
    }

    /// Merges another set (or nothing) into this one.
    pub fn merge(&mut self, other: Option<ErrorSet>) {
        if let Some(other) = other {
            self.flags.extend(other.flags);
        }
    }

    #[must_use]
    pub fn contains(&self, flag: ValidationFlag) -> bool {
        self.flags.contains(&flag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Iterates the flags in their fixed declaration order.
    pub fn iter(&self) -> impl Iterator<Item = ValidationFlag> + '_ {
        self.flags.iter().copied()
    }

    /// `None` when no flags are set, `Some(self)` otherwise.
    ///
    /// Validation entry points return `Option<ErrorSet>` so callers can
    /// treat "no errors" and "valid" as the same thing.
    #[must_use]
    pub fn into_result(self) -> Option<ErrorSet> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for flag in &self.flags {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            f.write_str(flag.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for ErrorSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.flags.len()))?;
        for flag in &self.flags {
            map.serialize_entry(flag.as_str(), &true)?;
        }
        map.end()
    }
}

impl FromIterator<ValidationFlag> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = ValidationFlag>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}
