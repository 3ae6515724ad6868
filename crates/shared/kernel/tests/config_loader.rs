use ans_kernel::config::{ConfigError, ConfigLoader};
use ans_kernel::domain::config::ClientConfig;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn missing_file_and_empty_env_yield_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let cfg: ClientConfig =
        ConfigLoader::new().file(dir.path().join("client")).env_source(env(&[])).load()?;

    assert_eq!(cfg.api.base_url, "http://127.0.0.1:8000/api");
    assert_eq!(cfg.api.timeout_ms, 10_000);
    Ok(())
}

#[test]
fn env_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("client.toml"),
        "[api]\nbase_url = \"http://from-file/api\"\ntimeout_ms = 2500\n\n[theme]\nattribute = \"data-mode\"\n",
    )?;

    let cfg: ClientConfig = ConfigLoader::new()
        .file(dir.path().join("client"))
        .env_source(env(&[("ANS__API__BASE_URL", "https://api.example.com/api")]))
        .load()?;

    assert_eq!(cfg.api.base_url, "https://api.example.com/api");
    assert_eq!(cfg.api.timeout_ms, 2500);
    assert_eq!(cfg.theme.attribute, "data-mode");
    assert_eq!(cfg.theme.storage_key, "user-theme");
    Ok(())
}

#[test]
fn malformed_file_reports_context() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("client.toml"), "[api\nbase_url = ")?;

    let err = ConfigLoader::new()
        .file(dir.path().join("client"))
        .env_source(env(&[]))
        .load::<ClientConfig>()
        .expect_err("malformed toml must fail");

    let ConfigError::Config { context, .. } = &err;
    assert_eq!(context.as_deref(), Some("Failed to build config"));
    assert!(err.to_string().starts_with("Config error (Failed to build config)"));
    Ok(())
}
