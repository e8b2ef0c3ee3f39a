use rulenode_mapping_model::ErrorSet;
use serde_json::Value;

use crate::error::EditorResult;

/// Object-safe seam between a configuration editor and its host panel.
///
/// A host adapter (web form, terminal form, REST handler) drives an editor
/// through this trait plus the editor's own typed mutators. The value and
/// validity channels are separate: hosts read [`validate`](Self::validate)
/// to decide whether to allow saving, and read [`value`](Self::value) for
/// the configuration to persist.
pub trait ConfigEditor {
    /// Loads a configuration object received from the host.
    ///
    /// `None` or JSON `null` resets the editor to its documented defaults.
    /// Missing and legacy fields resolve to defaults; only a structurally
    /// malformed value errors. Loading does not notify the change
    /// listener.
    fn write_value(&mut self, config: Option<&Value>) -> EditorResult<()>;

    /// Current serialized configuration.
    ///
    /// `Some` while the editor is valid, `None` while it is invalid or a
    /// required collection is empty. Hosts must not persist `None`; they
    /// block save/navigation instead.
    fn value(&self) -> Option<Value>;

    /// Aggregate validity: `None` when valid, otherwise the de-duplicated
    /// flag set. Always `None` while disabled — a disabled editor is
    /// "disabled", not "invalid".
    fn validate(&self) -> Option<ErrorSet>;

    /// Toggles the disabled state: edit operations become inert and
    /// validators are suspended. [`value`](Self::value) still reflects the
    /// underlying state.
    fn set_disabled(&mut self, disabled: bool);

    fn is_disabled(&self) -> bool;
}
