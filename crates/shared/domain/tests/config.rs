use ans_domain::config::{ApiConfig, ClientConfig, ThemeConfig, WindowConfig};
use serde_json::json;
use std::time::Duration;

#[test]
fn config_defaults_are_sane() {
    let api = ApiConfig::default();
    assert_eq!(api.base_url, "http://127.0.0.1:8000/api");
    assert_eq!(api.timeout(), Duration::from_secs(10));

    let theme = ThemeConfig::default();
    assert_eq!(theme.storage_key, "user-theme");
    assert_eq!(theme.attribute, "data-theme");
    assert!(theme.storage_path.is_none());

    let window = WindowConfig::default();
    assert!(window.width > 0.0 && window.height > 0.0);
}

#[test]
fn client_config_deserializes_partial_sections() {
    let raw = json!({
        "api": { "base_url": "https://ans.example.com/api" },
        "theme": { "storage_path": "/tmp/prefs.json" }
    });

    let cfg: ClientConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.api.base_url, "https://ans.example.com/api");
    assert_eq!(cfg.api.timeout_ms, 10_000);
    assert_eq!(cfg.theme.storage_key, "user-theme");
    assert_eq!(cfg.theme.storage_path, Some(std::path::PathBuf::from("/tmp/prefs.json")));
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn cloned_config_is_copy_on_write() {
    let original = ClientConfig::default();
    let mut edited = original.clone();
    edited.api.timeout_ms = 500;

    assert_eq!(original.api.timeout_ms, 10_000);
    assert_eq!(edited.api.timeout_ms, 500);
}
