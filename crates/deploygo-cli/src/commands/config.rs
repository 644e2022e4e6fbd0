//! `deploygo config` - inspect and initialise configuration.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` override, if any; it is also where
/// `config init` writes.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = config_file
        .map(Path::to_path_buf)
        .unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::ConfigError {
                message: format!(
                    "Unknown config key '{key}' (known keys: {})",
                    AppConfig::KEYS.join(", ")
                ),
                source: None,
            })?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.data(&to_toml(&config)?)?;
        }

        ConfigCommands::Path => {
            output.data(&path.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                output.warning(&format!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display(),
                ))?;
                return Ok(());
            }

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
                    message: format!("Failed to create config directory '{}'", parent.display()),
                    source: e,
                })?;
            }

            std::fs::write(&path, to_toml(&AppConfig::default())?).map_err(|e| {
                CliError::IoError {
                    message: format!("Failed to write config to '{}'", path.display()),
                    source: e,
                }
            })?;

            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}
