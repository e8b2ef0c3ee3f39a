//! Mode discriminators shared across the editor family.

use serde::{Deserialize, Serialize};

/// Whether a transformation reads from / writes to the message payload or
/// its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchTo {
    /// Message payload.
    Data,
    /// Message metadata.
    Metadata,
}

impl std::fmt::Display for FetchTo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Data => write!(f, "DATA"),
            Self::Metadata => write!(f, "METADATA"),
        }
    }
}

/// Which related-entity data an enrichment fetches.
///
/// Gates which of the two sibling mappings is required: `Fields` activates
/// the entity-field mapping, the other two activate the key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataToFetch {
    /// Server-scope attributes of the related entity.
    Attributes,
    /// Latest time-series values of the related entity.
    LatestTelemetry,
    /// Entity fields (name, type, label, ...).
    Fields,
}

impl std::fmt::Display for DataToFetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attributes => write!(f, "ATTRIBUTES"),
            Self::LatestTelemetry => write!(f, "LATEST_TELEMETRY"),
            Self::Fields => write!(f, "FIELDS"),
        }
    }
}

/// Accepts the historical boolean encoding of `fromMetadata` alongside the
/// current enum.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub(crate) enum FetchToCompat {
    Legacy(bool),
    Mode(FetchTo),
}

impl FetchToCompat {
    /// Resolves to the current enum, logging when the legacy boolean was
    /// in play.
    pub(crate) fn resolve(self) -> FetchTo {
        match self {
            Self::Mode(mode) => mode,
            Self::Legacy(legacy) => {
                let mode = if legacy { FetchTo::Metadata } else { FetchTo::Data };
                log::debug!("Resolved legacy boolean fromMetadata={legacy} to {mode}");
                mode
            }
        }
    }
}

/// Applies the documented per-editor default when the field is absent.
pub(crate) fn resolve_fetch_to(compat: Option<FetchToCompat>, default: FetchTo) -> FetchTo {
    compat.map_or(default, FetchToCompat::resolve)
}
