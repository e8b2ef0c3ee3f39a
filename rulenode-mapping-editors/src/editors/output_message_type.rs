//! Output message type selector.

use std::sync::Arc;

use rulenode_mapping_model::{ErrorSet, ValidationFlag, is_non_blank};
use serde_json::Value;

use crate::error::{EditorError, EditorResult};
use crate::traits::{ChangeNotifier, ConfigChangeListener, ConfigEditor};
use crate::types::{MAX_MESSAGE_TYPE_LEN, MessageTypeAlias};

/// Scalar editor for the output message type of a transformation node.
///
/// Offers the well-known request types plus a custom free-text value. The
/// free text is only editable while the [`MessageTypeAlias::Custom`] alias
/// is selected; picking a well-known alias overwrites it with the alias
/// value.
pub struct OutputMessageTypeSelector {
    message_type: Option<String>,
    required: bool,
    disabled: bool,
    notifier: ChangeNotifier,
}

impl OutputMessageTypeSelector {
    #[must_use]
    pub fn new(required: bool) -> Self {
        Self {
            message_type: None,
            required,
            disabled: false,
            notifier: ChangeNotifier::default(),
        }
    }

    #[must_use]
    pub fn message_type(&self) -> Option<&str> {
        self.message_type.as_deref()
    }

    /// Alias the current value resolves to.
    #[must_use]
    pub fn alias(&self) -> MessageTypeAlias {
        self.message_type
            .as_deref()
            .map_or(MessageTypeAlias::Custom, MessageTypeAlias::resolve)
    }

    #[must_use]
    pub fn required(&self) -> bool {
        self.required
    }

    /// Toggles the required rule. Does not emit; the value itself is
    /// unchanged.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn set_change_listener(&mut self, listener: Arc<dyn ConfigChangeListener>) {
        self.notifier.set(listener);
    }

    pub fn clear_change_listener(&mut self) {
        self.notifier.clear();
    }

    /// Selects an alias and emits.
    ///
    /// A well-known alias writes its backend value; `Custom` clears the
    /// value for free-text entry.
    pub fn select_alias(&mut self, alias: MessageTypeAlias) -> bool {
        if self.disabled {
            return false;
        }
        self.message_type = Some(alias.value().unwrap_or_default().to_string());
        self.emit();
        true
    }

    /// Edits the free-text value and emits.
    ///
    /// Only available while the `Custom` alias is selected, mirroring the
    /// locked text field of the form.
    pub fn set_message_type(&mut self, raw: &str) -> bool {
        if self.disabled || self.alias() != MessageTypeAlias::Custom {
            return false;
        }
        self.message_type = Some(raw.to_string());
        self.emit();
        true
    }

    fn check(&self) -> Option<ErrorSet> {
        let value = self.message_type.as_deref().unwrap_or("");
        if self.required && !is_non_blank(value) {
            return Some(ErrorSet::of(ValidationFlag::MessageTypeInvalid));
        }
        if value.chars().count() > MAX_MESSAGE_TYPE_LEN {
            return Some(ErrorSet::of(ValidationFlag::MessageTypeInvalid));
        }
        None
    }

    fn current_value(&self) -> Option<Value> {
        if self.check().is_some() {
            return None;
        }
        Some(
            self.message_type
                .as_ref()
                .map_or(Value::Null, |value| Value::String(value.clone())),
        )
    }

    fn emit(&self) {
        self.notifier.notify(self.current_value().as_ref());
    }
}

impl ConfigEditor for OutputMessageTypeSelector {
    fn write_value(&mut self, config: Option<&Value>) -> EditorResult<()> {
        self.message_type = match config {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value.clone()),
            Some(other) => {
                return Err(EditorError::InvalidConfiguration(format!(
                    "expected a message type string, got: {other}"
                )));
            }
        };
        Ok(())
    }

    fn value(&self) -> Option<Value> {
        self.current_value()
    }

    fn validate(&self) -> Option<ErrorSet> {
        if self.disabled {
            return None;
        }
        self.check()
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}
