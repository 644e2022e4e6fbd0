//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `DEPLOYGO_<SECTION>__<KEY>`
//! 3. Config file (`--config FILE` or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use deploygo_core::domain::{Port, TemplateFamily, Version};

const ENV_PREFIX: &str = "DEPLOYGO";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub template: String,
    pub port: u16,
    pub version: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            template: TemplateFamily::Go.selector().to_string(),
            port: Port::DEFAULT.get(),
            version: Version::INITIAL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Propagate template render failures instead of writing raw content.
    pub strict: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the TOML file, then environment.
    ///
    /// With `must_exist`, an explicit `config_file` has to be present; the
    /// default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, must_exist: bool) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::load_from(path, must_exist),
            None => Self::load_from(&Self::config_path(), false),
        }
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("configuration has an invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.deploygo.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "deploygo", "deploygo")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".deploygo.toml"))
    }

    /// Look up a single value by its dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.template" => self.defaults.template.clone(),
            "defaults.port" => self.defaults.port.to_string(),
            "defaults.version" => self.defaults.version.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            "templates.strict" => self.templates.strict.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key understood by [`Self::get`].
    pub const KEYS: [&'static str; 5] = [
        "defaults.template",
        "defaults.port",
        "defaults.version",
        "output.no_color",
        "templates.strict",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_match_the_domain() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.template, "go");
        assert_eq!(cfg.defaults.port, 8080);
        assert_eq!(cfg.defaults.version, "1.0.0");
        assert!(!cfg.templates.strict);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.defaults, Defaults::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&temp.path().join("absent.toml"), true).is_err());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[defaults]\nport = 9000\n\n[templates]\nstrict = true\n").unwrap();

        let cfg = AppConfig::load_from(&path, true).unwrap();

        assert_eq!(cfg.defaults.port, 9000);
        assert_eq!(cfg.defaults.template, "go");
        assert!(cfg.templates.strict);
    }

    #[test]
    fn serialized_defaults_load_back() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, toml::to_string_pretty(&AppConfig::default()).unwrap()).unwrap();

        assert_eq!(AppConfig::load_from(&path, true).unwrap(), AppConfig::default());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.port").as_deref(), Some("8080"));
        assert_eq!(cfg.get("templates.strict").as_deref(), Some("false"));
        assert!(cfg.get("does.not.exist").is_none());
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
