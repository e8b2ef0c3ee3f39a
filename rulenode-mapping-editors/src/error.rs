//! Unified error type definition

use thiserror::Error;

/// Editor layer error type.
///
/// Validation outcomes are not errors — they are reported through
/// [`ErrorSet`](rulenode_mapping_model::ErrorSet) and the `None` value
/// sentinel. `EditorError` covers only structurally malformed
/// configuration input; absent or legacy fields resolve to documented
/// defaults instead of erroring.
#[derive(Error, Debug)]
pub enum EditorError {
    /// The configuration handed to `write_value` has the wrong shape
    /// (e.g. a mapping field holding non-string values).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Editor layer Result type alias
pub type EditorResult<T> = std::result::Result<T, EditorError>;
