//! End-to-end scenarios across the editor family: loading persisted
//! configurations, editing, validation aggregation and value emission.

mod common;

use std::sync::Arc;

use common::RecordingListener;
use rulenode_mapping_editors::{
    ConfigEditor, CopyKeysEditor, DataToFetch, FetchTo, KvMapEditor, MessageTypeAlias,
    OutputMessageTypeSelector, RelatedAttributesEditor, RenameKeysEditor, ValidationFlag,
};
use serde_json::json;

// ============ Key/value map round trips ============

#[test]
fn kv_map_load_then_value_round_trips() {
    let mut editor = KvMapEditor::new(true, false);
    let mapping = json!({"a": "1", "b": "2", "c": "3"});
    editor.write_value(Some(&mapping)).expect("valid mapping");
    let value = editor.value().expect("valid state");
    assert_eq!(value, mapping);

    // Feeding the emitted value back in reproduces the same entries.
    let mut reloaded = KvMapEditor::new(true, false);
    reloaded.write_value(Some(&value)).expect("emitted value");
    assert_eq!(reloaded.value(), Some(mapping));
}

#[test]
fn kv_map_edits_survive_round_trip() {
    let mut editor = KvMapEditor::new(true, false);
    editor.write_value(None).expect("empty load");
    editor.add();
    editor.set_key(0, "sn");
    editor.set_value(0, "serialNumber");
    editor.add();
    editor.set_key(1, "model");
    editor.set_value(1, "deviceModel");
    editor.remove(0);

    assert_eq!(editor.value(), Some(json!({"model": "deviceModel"})));
}

#[test]
fn kv_map_add_add_remove_keeps_second_entry_at_front() {
    let mut editor = KvMapEditor::new(false, false);
    editor.add();
    editor.add();
    editor.set_key(1, "kept");
    assert!(editor.remove(0));
    assert_eq!(editor.entries().len(), 1);
    assert_eq!(editor.entries()[0].key(), "kept");
}

#[test]
fn kv_map_null_load_with_required_reports_mapping_required() {
    let mut editor = KvMapEditor::new(true, false);
    editor.write_value(None).expect("null load");
    let errors = editor.validate().expect("required and empty");
    assert!(errors.contains(ValidationFlag::MappingRequired));
    assert_eq!(editor.value(), None);
}

#[test]
fn kv_map_whitespace_key_reports_fields_required() {
    let mut editor = KvMapEditor::new(true, false);
    editor.write_value(None).expect("null load");
    editor.add();
    editor.set_key(0, "  ");
    editor.set_value(0, "x");
    assert!(!editor.entries()[0].key_valid());
    let errors = editor.validate().expect("blank key");
    assert!(errors.contains(ValidationFlag::FieldsRequired));
}

#[test]
fn kv_map_unique_pair_mode_flags_identical_pair() {
    let mut editor = KvMapEditor::new(true, true);
    editor
        .write_value(Some(&json!({"x": "x"})))
        .expect("valid shape");
    let errors = editor.validate().expect("key equals value");
    assert!(errors.contains(ValidationFlag::DuplicatePair));
    assert_eq!(errors.len(), 1);
}

// ============ Copy keys ============

#[test]
fn copy_keys_full_editing_session() {
    let listener = Arc::new(RecordingListener::new());
    let mut editor = CopyKeysEditor::new();
    editor
        .write_value(Some(&json!({"keys": ["temperature"], "fromMetadata": true})))
        .expect("legacy shape");
    editor.set_change_listener(listener.clone());

    assert_eq!(editor.from_metadata(), FetchTo::Metadata);

    editor.add_key(" humidity ");
    editor.set_from_metadata(FetchTo::Data);
    editor.remove_key("temperature");

    assert_eq!(
        listener.emissions(),
        vec![
            Some(json!({"keys": ["temperature", "humidity"], "fromMetadata": "METADATA"})),
            Some(json!({"keys": ["temperature", "humidity"], "fromMetadata": "DATA"})),
            Some(json!({"keys": ["humidity"], "fromMetadata": "DATA"})),
        ]
    );
}

#[test]
fn copy_keys_empty_list_emits_sentinel() {
    let listener = Arc::new(RecordingListener::new());
    let mut editor = CopyKeysEditor::new();
    editor.add_key("only");
    editor.set_change_listener(listener.clone());
    editor.remove_key("only");

    assert_eq!(listener.last(), Some(None));
    let errors = editor.validate().expect("keys required");
    assert!(errors.contains(ValidationFlag::MappingRequired));
}

// ============ Rename keys ============

#[test]
fn rename_keys_duplicate_new_names_flag_both_pairs() {
    let mut editor = RenameKeysEditor::new();
    editor
        .write_value(Some(&json!({"renameKeysMapping": {"a": "x", "b": "x"}})))
        .expect("valid shape");

    assert!(editor.entries().iter().all(rulenode_mapping_editors::KvEntry::duplicate));
    let errors = editor.validate().expect("value collision");
    assert!(errors.contains(ValidationFlag::DuplicatePair));
    assert_eq!(editor.value(), None);
}

#[test]
fn rename_keys_recovers_after_fixing_collision() {
    let mut editor = RenameKeysEditor::new();
    editor
        .write_value(Some(&json!({"renameKeysMapping": {"a": "x", "b": "x"}})))
        .expect("valid shape");
    editor.set_new_name(1, "y");
    assert_eq!(editor.validate(), None);
    assert_eq!(
        editor.value(),
        Some(json!({"renameKeysMapping": {"a": "x", "b": "y"}, "fromMetadata": "DATA"}))
    );
}

// ============ Related attributes ============

#[test]
fn related_attributes_key_map_scenario() {
    let mut editor = RelatedAttributesEditor::new();
    editor
        .write_value(Some(&json!({
            "relationsQuery": {"direction": "FROM"},
            "dataToFetch": "ATTRIBUTES",
            "dataMapping": {"sn": "serialNumber"}
        })))
        .expect("valid configuration");

    assert_eq!(editor.entries().len(), 1);
    assert_eq!(editor.entries()[0].key(), "sn");
    assert_eq!(editor.entries()[0].value(), "serialNumber");
    assert_eq!(editor.validate(), None);

    let value = editor.value().expect("valid configuration");
    assert_eq!(value.get("dataMapping"), Some(&json!({"sn": "serialNumber"})));
}

#[test]
fn related_attributes_mode_switch_keeps_inactive_entries() {
    let mut editor = RelatedAttributesEditor::new();
    editor
        .write_value(Some(&json!({
            "relationsQuery": {"direction": "FROM"},
            "dataToFetch": "ATTRIBUTES",
            "dataMapping": {"power": "p", "voltage": "v"}
        })))
        .expect("valid configuration");

    let before = editor.kv_map();
    editor.set_data_to_fetch(DataToFetch::Fields);
    editor.add_entry();
    editor.set_entry_key(1, "label");
    editor.set_entry_value(1, "relatedLabel");
    editor.set_data_to_fetch(DataToFetch::LatestTelemetry);

    // Neither side lost anything across two switches.
    assert_eq!(editor.kv_map(), before);
    editor.set_data_to_fetch(DataToFetch::Fields);
    assert_eq!(
        editor.sv_map().get("label").map(String::as_str),
        Some("relatedLabel")
    );
}

#[test]
fn related_attributes_legacy_configuration_loads_with_defaults() {
    let mut editor = RelatedAttributesEditor::new();
    editor
        .write_value(Some(&json!({
            "relationsQuery": {"direction": "FROM"},
            "telemetry": true,
            "attrMapping": {"power": "p"}
        })))
        .expect("legacy shape");

    assert_eq!(editor.data_to_fetch(), DataToFetch::LatestTelemetry);
    assert_eq!(editor.fetch_to(), FetchTo::Metadata);
    let value = editor.value().expect("valid configuration");
    assert_eq!(value.get("dataToFetch"), Some(&json!("LATEST_TELEMETRY")));
    assert_eq!(value.get("dataMapping"), Some(&json!({"power": "p"})));
    // Legacy fields never survive into the persisted shape.
    assert_eq!(value.get("telemetry"), None);
    assert_eq!(value.get("attrMapping"), None);
}

#[test]
fn related_attributes_persisted_value_is_deep_trimmed() {
    let mut editor = RelatedAttributesEditor::new();
    editor
        .write_value(Some(&json!({
            "relationsQuery": {"relationType": " Contains "},
            "dataToFetch": "ATTRIBUTES",
            "dataMapping": {" sn ": " serialNumber "}
        })))
        .expect("valid configuration");

    let value = editor.value().expect("valid configuration");
    assert_eq!(value.get("dataMapping"), Some(&json!({"sn": "serialNumber"})));
    assert_eq!(
        value.get("relationsQuery"),
        Some(&json!({"relationType": "Contains"}))
    );
}

// ============ Message type selector ============

#[test]
fn message_type_selector_session() {
    let listener = Arc::new(RecordingListener::new());
    let mut selector = OutputMessageTypeSelector::new(true);
    selector.set_change_listener(listener.clone());

    selector.select_alias(MessageTypeAlias::PostTelemetryRequest);
    assert_eq!(listener.last(), Some(Some(json!("POST_TELEMETRY_REQUEST"))));

    selector.select_alias(MessageTypeAlias::Custom);
    assert_eq!(listener.last(), Some(None));

    selector.set_message_type("ALARM_CLEARED");
    assert_eq!(listener.last(), Some(Some(json!("ALARM_CLEARED"))));
    assert_eq!(selector.alias(), MessageTypeAlias::Custom);
}

// ============ Disabled state across the seam ============

#[test]
fn disabled_editors_keep_their_value_channel() {
    let mut editor = KvMapEditor::new(true, false);
    editor
        .write_value(Some(&json!({"a": "b"})))
        .expect("valid mapping");
    editor.set_disabled(true);

    // Inert edits, suspended validators, readable value.
    assert!(!editor.add());
    assert_eq!(editor.validate(), None);
    assert_eq!(editor.value(), Some(json!({"a": "b"})));

    editor.set_disabled(false);
    assert!(editor.add());
    assert!(editor.validate().is_some());
}

#[test]
fn listener_count_matches_mutation_count() {
    let listener = Arc::new(RecordingListener::new());
    let mut editor = KvMapEditor::new(false, false);
    editor.set_change_listener(listener.clone());

    editor.add(); // 1
    editor.set_key(0, "k"); // 2
    editor.set_value(0, "v"); // 3
    editor.remove(5); // out of range: no mutation, no emission
    editor.set_disabled(true);
    editor.add(); // inert: no emission

    assert_eq!(listener.count(), 3);
}
