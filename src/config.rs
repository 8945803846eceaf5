//! Configuration for the formcheck CLI.
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (formcheck.toml)
//! - Environment variables (FORMCHECK__*)
//!
//! ## Example config file (formcheck.toml):
//! ```toml
//! [validation]
//! backend = "garde"
//! fail_fast = false
//!
//! [output]
//! format = "pretty"
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::selector::BackendId;

/// Main configuration for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormcheckConfig {
    /// Validation settings
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    /// Backend used when `--backend` is not given.
    #[serde(default)]
    pub backend: BackendId,

    /// Report only the first violated constraint.
    #[serde(default)]
    pub fail_fast: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format for JSON printed by the CLI.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

impl FormcheckConfig {
    /// Load configuration from default locations.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, optionally requiring a specific file.
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from default locations
        let config_locations = [
            "formcheck.toml",
            ".formcheck.toml",
            "config/formcheck.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "formcheck", "formcheck") {
            let xdg_config = config_dir.config_dir().join("formcheck.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        // Load from specified path
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Load from environment variables (FORMCHECK__*)
        builder = builder.add_source(
            Environment::with_prefix("FORMCHECK")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use super::*;

    // `load_from` reads FORMCHECK__* from the process environment, which is
    // shared across test threads. Every test that calls it takes this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_default_config() {
        let config = FormcheckConfig::default();
        assert_eq!(config.validation.backend, BackendId::JsonSchema);
        assert!(!config.validation.fail_fast);
        assert_eq!(config.output.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_serialize_config() {
        let config = FormcheckConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[validation]"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("backend = \"jsonschema\""));
    }

    #[test]
    fn test_load_from_file() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formcheck.toml");
        std::fs::write(&path, "[validation]\nbackend = \"garde\"\nfail_fast = true\n").unwrap();

        let config = FormcheckConfig::load_from(path.to_str()).unwrap();
        assert_eq!(config.validation.backend, BackendId::Garde);
        assert!(config.validation.fail_fast);
        // Section not in the file keeps its defaults.
        assert_eq!(config.output.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formcheck.toml");
        std::fs::write(&path, "[validation]\nbackend = \"garde\"\n").unwrap();

        std::env::set_var("FORMCHECK__VALIDATION__BACKEND", "fluent");
        let config = FormcheckConfig::load_from(path.to_str());
        std::env::remove_var("FORMCHECK__VALIDATION__BACKEND");

        // The environment source layers over the file.
        assert_eq!(config.unwrap().validation.backend, BackendId::Fluent);
    }

    #[test]
    fn test_save_round_trip() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let mut config = FormcheckConfig::default();
        config.validation.backend = BackendId::Fluent;
        config.output.format = OutputFormat::Compact;
        config.save(path.to_str().unwrap()).unwrap();

        let loaded = FormcheckConfig::load_from(path.to_str()).unwrap();
        assert_eq!(loaded.validation.backend, BackendId::Fluent);
        assert_eq!(loaded.output.format, OutputFormat::Compact);
    }
}
