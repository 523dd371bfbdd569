use fedhub_domain::config::AppConfig;
use fedhub_kernel::config::{ConfigError, load_config, validate_app_config};
use serial_test::serial;
use std::fs;

fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("fedhub.toml");
    fs::write(&path, body).expect("write config file");
    path
}

#[test]
#[serial]
fn loads_config_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(
        &dir,
        r#"
[i18n]
default_locale = "en"
locales = [{ code = "en", iso = "en-US", file = "en.json", name = "English" }]

[logging]
level = "debug"
"#,
    );

    let cfg: AppConfig = load_config(Some(&path)).expect("config loads");
    assert_eq!(cfg.i18n.default_locale, "en");
    assert_eq!(cfg.logging.level, "debug");
    // Untouched sections keep their defaults.
    assert_eq!(cfg.content.collections[0].name, "help");
    validate_app_config(&cfg).expect("config is valid");
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let result: Result<AppConfig, ConfigError> = load_config(Some("/nonexistent/fedhub.toml"));
    assert!(matches!(result, Err(ConfigError::Config { .. })));
}

#[test]
fn default_locale_must_be_declared() {
    let raw = serde_json::json!({
        "i18n": {
            "default_locale": "fr",
            "locales": [{ "code": "en", "iso": "en-US", "file": "en.json", "name": "English" }]
        }
    });
    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");

    let err = validate_app_config(&cfg).expect_err("undeclared default locale");
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn duplicate_locale_codes_are_rejected() {
    let raw = serde_json::json!({
        "i18n": {
            "default_locale": "en",
            "locales": [
                { "code": "en", "iso": "en-US", "file": "en.json", "name": "English" },
                { "code": "en", "iso": "en-GB", "file": "en-gb.json", "name": "English (UK)" }
            ]
        }
    });
    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");

    assert!(validate_app_config(&cfg).is_err());
}
