//! Tests for the Packer configuration system.

use std::sync::Mutex;

use packer_core::catalog::Package;
use packer_core::config::{CliOverrides, PackerConfig};
use packer_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_packer_env_vars() {
    for key in ["PACKER_CALCULATOR_HEADROOM_MULTIPLIER", "PACKER_LOG_LEVEL"] {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_yields_defaults() {
    let config = PackerConfig::from_toml("").unwrap();
    assert_eq!(config, PackerConfig::default());
    assert_eq!(config.calculator.effective_headroom_multiplier(), 50);
    assert_eq!(config.logging.effective_level(), "packer=info");

    let seeds = config.catalog.effective_packages();
    let quantities: Vec<u32> = seeds.iter().map(|p| p.quantity).collect();
    assert_eq!(quantities, vec![250, 500, 1000, 2000, 5000]);
    assert_eq!(seeds[0].id, "P_1");
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config = PackerConfig::from_toml(
        r#"
[calculator]
headroom_multiplier = 10

[[catalog.packages]]
id = "small"
quantity = 23

[[catalog.packages]]
id = "large"
quantity = 53
"#,
    )
    .unwrap();

    assert_eq!(config.calculator.effective_headroom_multiplier(), 10);
    assert_eq!(
        config.catalog.effective_packages(),
        vec![Package::new("small", 23), Package::new("large", 53)]
    );
    assert!(config.logging.level.is_none());
}

#[test]
fn layered_resolution_cli_over_env_over_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_packer_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("packer.toml"),
        r#"
[calculator]
headroom_multiplier = 20

[logging]
level = "packer=warn"
"#,
    )
    .unwrap();

    // Env overrides project for the log level only.
    std::env::set_var("PACKER_LOG_LEVEL", "packer=debug");
    let config = PackerConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.calculator.headroom_multiplier, Some(20));
    assert_eq!(config.logging.level.as_deref(), Some("packer=debug"));

    // CLI overrides both.
    std::env::set_var("PACKER_CALCULATOR_HEADROOM_MULTIPLIER", "30");
    let cli = CliOverrides {
        headroom_multiplier: Some(40),
        ..Default::default()
    };
    let config = PackerConfig::load(dir.path(), Some(&cli)).unwrap();
    assert_eq!(config.calculator.headroom_multiplier, Some(40));

    clear_packer_env_vars();
}

#[test]
fn missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_packer_env_vars();

    let dir = tempdir();
    let config = PackerConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.calculator.effective_headroom_multiplier(), 50);
}

#[test]
fn invalid_project_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_packer_env_vars();

    let dir = tempdir();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[calculator\nheadroom_multiplier = ").unwrap();

    let err = PackerConfig::load_with_project_file(&path, None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validate_rejects_non_positive_multiplier() {
    let config = PackerConfig::from_toml("[calculator]\nheadroom_multiplier = 0\n").unwrap();
    let err = PackerConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "calculator.headroom_multiplier")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validate_rejects_duplicate_and_zero_seed_quantities() {
    let mut config = PackerConfig::default();
    config.catalog.packages = vec![Package::new("a", 10), Package::new("b", 10)];
    assert!(PackerConfig::validate(&config).is_err());

    config.catalog.packages = vec![Package::new("zero", 0)];
    assert!(PackerConfig::validate(&config).is_err());
}

#[test]
fn toml_round_trip_preserves_overrides() {
    let mut config = PackerConfig::default();
    config.calculator.headroom_multiplier = Some(75);
    config.catalog.packages = vec![Package::new("x", 7)];

    let text = config.to_toml().unwrap();
    assert_eq!(PackerConfig::from_toml(&text).unwrap(), config);
}
