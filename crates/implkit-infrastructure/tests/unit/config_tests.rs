//! Configuration loading tests

use implkit_domain::Error;
use implkit_domain::constants::DEFAULT_CONFIG_PREFIX;
use implkit_infrastructure::config::{AppConfig, ConfigLoader, DiscoveryConfig, LoggingConfig};
use std::env;
use std::fs;
use tempfile::TempDir;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("implkit.toml");
    fs::write(&path, content).expect("write config");
    path
}

// Prefixes that no real environment sets, so parallel tests see no overrides
fn isolated_loader(tag: &str) -> ConfigLoader {
    ConfigLoader::new().with_env_prefix(format!("IMPLKIT_TEST_{}", tag))
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.logging, LoggingConfig::default());
    assert_eq!(config.discovery.prefix, DEFAULT_CONFIG_PREFIX);
    assert!(config.discovery.enabled);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let config = isolated_loader("MISSING")
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[logging]
level = "debug"

[discovery]
prefix = "shapes_config"
"#,
    );

    let loader = isolated_loader("FILE").with_config_path(&path);
    assert_eq!(loader.config_path(), Some(path.as_path()));

    let config = loader.load().unwrap();
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.json_format);
    assert_eq!(config.discovery.prefix, "shapes_config");
    assert!(config.discovery.enabled);
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nlevel = \"loud\"\n");

    let result = isolated_loader("LEVEL").with_config_path(&path).load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_empty_prefix_is_rejected_only_when_enabled() {
    let dir = TempDir::new().unwrap();

    let enabled = write_config(&dir, "[discovery]\nprefix = \"\"\n");
    let result = isolated_loader("PREFIX").with_config_path(&enabled).load();
    assert!(matches!(result, Err(Error::Configuration { .. })));

    let disabled = write_config(&dir, "[discovery]\nprefix = \"\"\nenabled = false\n");
    let config = isolated_loader("PREFIX")
        .with_config_path(&disabled)
        .load()
        .unwrap();
    assert!(!config.discovery.enabled);
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging\nlevel = ");

    let result = isolated_loader("MALFORMED").with_config_path(&path).load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let config = AppConfig {
        logging: LoggingConfig {
            level: "warn".to_string(),
            json_format: true,
        },
        discovery: DiscoveryConfig {
            prefix: "plugin_".to_string(),
            enabled: false,
        },
    };

    let loader = isolated_loader("SAVE");
    loader.save_to_file(&config, &path).unwrap();

    let reloaded = loader.with_config_path(&path).load().unwrap();
    assert_eq!(reloaded, config);
}

/// Verify nested environment variables override the file
///
/// Run with: `cargo test -p implkit-infrastructure --test unit config -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[discovery]\nprefix = \"from_file\"\n");
    set_env("IMPLKIT__DISCOVERY__PREFIX", "from_env");
    set_env("IMPLKIT__LOGGING__JSON_FORMAT", "true");

    let config = ConfigLoader::new().with_config_path(&path).load();

    remove_env("IMPLKIT__DISCOVERY__PREFIX");
    remove_env("IMPLKIT__LOGGING__JSON_FORMAT");

    let config = config.expect("Should load config");
    assert_eq!(config.discovery.prefix, "from_env");
    assert!(config.logging.json_format);
}
