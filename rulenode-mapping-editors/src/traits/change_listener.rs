use std::sync::Arc;

use serde_json::Value;

/// Receives the serialized configuration after every user-initiated
/// mutation.
///
/// Notification is synchronous: the listener runs inside the mutating
/// call, after validation has been recomputed, so a host never observes a
/// stale validity/value pair. `value` is `Some` when the change left the
/// editor valid and `None` otherwise (the host keeps the last good value
/// and blocks saving).
pub trait ConfigChangeListener {
    fn config_changed(&self, value: Option<&Value>);
}

/// Holder for the single listener an editor carries.
///
/// The registration is scoped to the editor: it lasts until
/// `clear_change_listener` is called or the editor is dropped, so a
/// discarded editor can never emit again.
#[derive(Default)]
pub(crate) struct ChangeNotifier {
    listener: Option<Arc<dyn ConfigChangeListener>>,
}

impl ChangeNotifier {
    pub(crate) fn set(&mut self, listener: Arc<dyn ConfigChangeListener>) {
        self.listener = Some(listener);
    }

    pub(crate) fn clear(&mut self) {
        self.listener = None;
    }

    pub(crate) fn notify(&self, value: Option<&Value>) {
        if let Some(listener) = &self.listener {
            listener.config_changed(value);
        }
    }
}
