//! Configuration system tests
//!
//! Tests for config paths and editor config defaults.

use jqbar::config::EditorConfig;
use jqbar::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_jqbar() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("jqbar"));
}

#[test]
fn test_config_dir_uses_dot_config_on_unix() {
    #[cfg(not(target_os = "windows"))]
    {
        let dir = config_paths::config_dir().unwrap();
        assert!(
            dir.to_string_lossy().contains(".config"),
            "Expected .config in path, got: {}",
            dir.display()
        );
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_under_config_dir() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(logs.starts_with(&config));
    assert!(logs.to_string_lossy().ends_with("logs"));
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_default_trigger_is_dot() {
    let config = EditorConfig::default();
    assert_eq!(config.trigger, '.');
}

#[test]
fn test_default_auto_pair_enabled() {
    let config = EditorConfig::default();
    assert!(config.auto_pair);
}

#[test]
fn test_default_commit_fallback_is_tab() {
    let config = EditorConfig::default();
    assert_eq!(config.commit_fallback, "\t");
}

#[test]
fn test_config_yaml_roundtrip() {
    let config = EditorConfig {
        trigger: '$',
        auto_pair: false,
        commit_fallback: "  ".to_string(),
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let back: EditorConfig = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(back.trigger, '$');
    assert!(!back.auto_pair);
    assert_eq!(back.commit_fallback, "  ");
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let config: EditorConfig = serde_yaml::from_str("trigger: '$'").unwrap();

    assert_eq!(config.trigger, '$');
    assert!(config.auto_pair);
    assert_eq!(config.commit_fallback, "\t");
}
