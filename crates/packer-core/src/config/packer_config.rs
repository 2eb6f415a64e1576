//! Top-level Packer configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CalculatorConfig, CatalogConfig, LoggingConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;
use crate::types::FxHashSet;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PACKER_*`)
/// 3. Project config (`packer.toml` in project root)
/// 4. User config (`~/.packer/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PackerConfig {
    pub calculator: CalculatorConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub headroom_multiplier: Option<i64>,
    pub log_level: Option<String>,
}

impl PackerConfig {
    /// Load configuration rooted at `root`, looking for `packer.toml` there.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_project_file(&root.join(PROJECT_CONFIG_FILE), cli_overrides)
    }

    /// Load configuration using an explicit project config file.
    ///
    /// A missing project file is not an error; the remaining layers apply.
    pub fn load_with_project_file(
        project_config_path: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PackerConfig) -> Result<(), ConfigError> {
        if let Some(multiplier) = config.calculator.headroom_multiplier {
            if multiplier <= 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "calculator.headroom_multiplier".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for package in &config.catalog.packages {
            if package.quantity == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "catalog.packages".to_string(),
                    message: format!("package {} must have a quantity greater than 0", package.id),
                });
            }
            if !seen.insert(package.quantity) {
                return Err(ConfigError::ValidationFailed {
                    field: "catalog.packages".to_string(),
                    message: format!("duplicate package quantity {}", package.quantity),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.packer/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".packer").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut PackerConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PackerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when set.
    fn merge(base: &mut PackerConfig, other: &PackerConfig) {
        if other.calculator.headroom_multiplier.is_some() {
            base.calculator.headroom_multiplier = other.calculator.headroom_multiplier;
        }
        if !other.catalog.packages.is_empty() {
            base.catalog.packages = other.catalog.packages.clone();
        }
        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut PackerConfig) {
        if let Ok(val) = std::env::var("PACKER_CALCULATOR_HEADROOM_MULTIPLIER") {
            if let Ok(v) = val.parse::<i64>() {
                config.calculator.headroom_multiplier = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PACKER_LOG_LEVEL") {
            config.logging.level = Some(val);
        }
    }

    fn apply_cli_overrides(config: &mut PackerConfig, cli: &CliOverrides) {
        if let Some(v) = cli.headroom_multiplier {
            config.calculator.headroom_multiplier = Some(v);
        }
        if let Some(ref v) = cli.log_level {
            config.logging.level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
