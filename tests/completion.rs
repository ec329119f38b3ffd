//! Completion tests - vocabulary selection, prefix lookup, staging

mod common;

use common::{press, test_session, test_session_with_config, test_session_with_keys, type_all};
use jqbar::config::EditorConfig;
use jqbar::editor::EditMode;
use jqbar::json_keys::document_keys;

// ============================================================================
// Builtin vocabulary lookup
// ============================================================================

#[test]
fn test_single_letter_stages_first_candidate() {
    let mut session = test_session();
    press(&mut session, 's');

    assert_eq!(session.text(), "scalars");
    assert_eq!(session.mode(), EditMode::Completion);
    // Caret stays at the typed prefix, the staged tail is selected behind it
    assert_eq!(session.selection().head, 1);
    assert_eq!(session.selection().anchor, 7);
    assert!(session.selection().is_reversed());
}

#[test]
fn test_prefix_narrows_candidate() {
    let mut session = test_session();
    type_all(&mut session, "se");

    assert_eq!(session.text(), "select()");
    assert_eq!(session.selection().head, 2);
    assert_eq!(session.selection().anchor, 8);
    assert_eq!(session.mode(), EditMode::Completion);
}

#[test]
fn test_function_suggestion_carries_call_parens() {
    let mut session = test_session();
    type_all(&mut session, "gro");

    assert_eq!(session.text(), "group_by()");
    assert_eq!(session.selection().head, 3);
    assert_eq!(session.mode(), EditMode::Completion);
}

#[test]
fn test_no_candidate_resets_mode() {
    let mut session = test_session();
    type_all(&mut session, "xy");

    assert_eq!(session.text(), "xy");
    assert_eq!(session.caret(), 2);
    assert_eq!(session.mode(), EditMode::Insert);
    assert_eq!(session.pending_tasks(), 0);
}

#[test]
fn test_candidate_mismatch_after_match() {
    // "sel" stages select(), the trailing f rules it out again
    let mut session = test_session();
    type_all(&mut session, "self");

    assert_eq!(session.text(), "self");
    assert_eq!(session.caret(), 4);
    assert_eq!(session.mode(), EditMode::Insert);
}

#[test]
fn test_exact_match_suppresses_suggestion() {
    let mut session = test_session();
    type_all(&mut session, "keys");

    assert_eq!(session.text(), "keys");
    assert_eq!(session.caret(), 4);
    assert_eq!(session.mode(), EditMode::Insert);
}

#[test]
fn test_extending_past_exact_match_completes_again() {
    let mut session = test_session();
    type_all(&mut session, "keys_");

    assert_eq!(session.text(), "keys_unsorted");
    assert_eq!(session.selection().head, 5);
    assert_eq!(session.mode(), EditMode::Completion);
}

// ============================================================================
// Document key vocabulary
// ============================================================================

#[test]
fn test_dot_prefix_prefers_document_keys() {
    let mut session = test_session_with_keys(&["name", "nested", "status"]);
    type_all(&mut session, ".na");

    assert_eq!(session.text(), ".name");
    assert_eq!(session.selection().head, 3);
    assert_eq!(session.selection().anchor, 5);
    assert_eq!(session.mode(), EditMode::Completion);
}

#[test]
fn test_document_keys_not_offered_without_dot() {
    let mut session = test_session_with_keys(&["zebra"]);
    type_all(&mut session, "ze");

    assert_eq!(session.text(), "ze");
    assert_eq!(session.mode(), EditMode::Insert);
}

#[test]
fn test_builtins_not_offered_after_dot() {
    let mut session = test_session();
    type_all(&mut session, ".sel");

    assert_eq!(session.text(), ".sel");
    assert_eq!(session.mode(), EditMode::Insert);
}

#[test]
fn test_builtin_offered_after_pipe() {
    let mut session = test_session();
    type_all(&mut session, "keys|se");

    assert_eq!(session.text(), "keys|select()");
    assert_eq!(session.selection().head, 7);
    assert_eq!(session.mode(), EditMode::Completion);
}

#[test]
fn test_republished_keys_take_effect() {
    let mut session = test_session_with_keys(&["alpha"]);
    type_all(&mut session, ".a");
    assert_eq!(session.text(), ".alpha");

    // Document changed; the old key is gone
    session.publish_context_vocabulary(["beta"]);
    press(&mut session, 'b');

    assert_eq!(session.text(), ".ab");
    assert_eq!(session.mode(), EditMode::Insert);
}

#[test]
fn test_add_identifier_extends_vocabulary() {
    let mut session = test_session();
    session.add_identifier("zulu");
    type_all(&mut session, ".zu");

    assert_eq!(session.text(), ".zulu");
    assert_eq!(session.mode(), EditMode::Completion);
}

#[test]
fn test_cleared_keys_stop_completing() {
    let mut session = test_session_with_keys(&["alpha"]);
    session.clear_context_vocabulary();
    type_all(&mut session, ".al");

    assert_eq!(session.text(), ".al");
    assert_eq!(session.mode(), EditMode::Insert);
}

// ============================================================================
// Trigger configuration
// ============================================================================

#[test]
fn test_trigger_follows_configuration() {
    let config = EditorConfig {
        trigger: '$',
        ..Default::default()
    };
    let mut session = test_session_with_config(config);
    session.publish_context_vocabulary(["name"]);
    type_all(&mut session, "$na");

    assert_eq!(session.text(), "$name");
    assert_eq!(session.selection().head, 3);
    assert_eq!(session.mode(), EditMode::Completion);
}

#[test]
fn test_dot_is_ordinary_under_custom_trigger() {
    let config = EditorConfig {
        trigger: '$',
        ..Default::default()
    };
    let mut session = test_session_with_config(config);
    session.publish_context_vocabulary(["name"]);
    type_all(&mut session, ".na");

    // The dot no longer selects the document keys, so the builtin list
    // answers: "na" extends to "nan"
    assert_eq!(session.text(), ".nan");
    assert_eq!(session.selection().head, 3);
    assert_eq!(session.selection().anchor, 4);
}

// ============================================================================
// Keys harvested from a document on disk
// ============================================================================

#[test]
fn test_keys_harvested_from_temp_document() {
    use tempfile::tempdir;

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sample.json");
    std::fs::write(
        &path,
        r#"{"user": {"email": "a@b", "tags": ["x"]}, "active": true}"#,
    )
    .expect("Failed to write sample");

    let raw = std::fs::read_to_string(&path).expect("Failed to read sample");
    let document: serde_json::Value = serde_json::from_str(&raw).expect("Invalid JSON");

    let mut session = test_session();
    session.publish_context_vocabulary(document_keys(&document));
    type_all(&mut session, ".em");

    assert_eq!(session.text(), ".email");
    assert_eq!(session.selection().head, 3);
    assert_eq!(session.mode(), EditMode::Completion);
}
