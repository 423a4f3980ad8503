use placeholder_core::{AppConfig, ConfigError, FetchParams};

fn temp_dir(prefix: &str) -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "{}_{}_{}",
        prefix,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn defaults_match_initial_controls() {
    let config = AppConfig::default();
    assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(config.defaults, FetchParams { limit: 10, min_chars: 100, max_chars: 500 });
    assert_eq!(config.ui.notification_millis, 5000);
    assert!(config.api.base_url().is_ok());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = temp_dir("placeholder_config");
    let path = dir.join("config.json");
    std::fs::write(
        &path,
        r#"{ "api": { "base_url": "http://localhost:3000" }, "defaults": { "limit": 25 } }"#,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:3000");
    assert_eq!(config.api.request_timeout_seconds, 10);
    assert_eq!(config.defaults.limit, 25);
    assert_eq!(config.defaults.min_chars, 100);
    assert_eq!(config.ui.debounce_millis, 300);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rejects_corrupted_file_and_bad_base_url() {
    let dir = temp_dir("placeholder_config_bad");

    let corrupted = dir.join("corrupted.json");
    std::fs::write(&corrupted, b"{ this is not json ").unwrap();
    assert!(matches!(
        AppConfig::from_file(&corrupted),
        Err(ConfigError::Json(_))
    ));

    let bad_url = dir.join("bad_url.json");
    std::fs::write(&bad_url, r#"{ "api": { "base_url": "not a url" } }"#).unwrap();
    assert!(matches!(
        AppConfig::from_file(&bad_url),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));

    assert!(matches!(
        AppConfig::from_file(dir.join("missing.json")),
        Err(ConfigError::Io(_))
    ));

    let _ = std::fs::remove_dir_all(&dir);
}
