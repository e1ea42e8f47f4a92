use rentcat::config::{Config, ConfigError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://localhost:5000/api");
    assert_eq!(config.api.list_path, "/products");
    assert_eq!(config.api.search_path, "/products/search");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.api.max_retries, 2);
    assert_eq!(config.api.retry_backoff_base_ms, 200);
    assert_eq!(config.search.default_radius_km, 50.0);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("rentcat/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config(
        r#"
[api]
base_url = "https://rent.example.com/api"
max_retries = 0

[search]
default_radius_km = 25.0
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.api.base_url, "https://rent.example.com/api");
    assert_eq!(config.api.max_retries, 0);
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.search_path, "/products/search");
    assert_eq!(config.search.default_radius_km, 25.0);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("[api\nbase_url = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let file = write_config("[ui]\ntick_rate_ms = \"fast\"\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_loaded_file_is_validated() {
    let file = write_config("[api]\nbase_url = \"ftp://example.com\"\n");
    let err = Config::load_from(file.path()).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => assert!(message.contains("ftp://example.com")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_relative_paths() {
    let mut config = Config::default();
    config.api.search_path = "products/search".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("search_path"));
}

#[test]
fn test_validation_rejects_non_positive_radius() {
    for radius in [0.0, -5.0, f64::NAN] {
        let mut config = Config::default();
        config.search.default_radius_km = radius;
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "radius {} should be rejected",
            radius
        );
    }
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}
