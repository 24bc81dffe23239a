//! `f5 config`: inspect configuration and write a starter file.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, KEYS},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    project_root: &Path,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.emit(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(config)?;
            } else {
                output.emit(&to_toml(config)?)?;
            }
        }

        ConfigCommands::Path { global } => {
            let path = target_path(global, project_root)?;
            output.emit(&path.display().to_string())?;
        }

        ConfigCommands::Init { global, force } => {
            let path = target_path(global, project_root)?;

            if path.exists() && !force {
                output.warning(&format!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                ))?;
                return Ok(());
            }

            let toml = to_toml(&AppConfig::default())?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_cli_context(|| {
                    format!("Failed to create config directory '{}'", parent.display())
                })?;
            }
            std::fs::write(&path, toml)
                .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("Unknown config key '{key}' (known keys: {})", KEYS.join(", ")),
        source: None,
    })
}

fn target_path(global: bool, project_root: &Path) -> CliResult<PathBuf> {
    if !global {
        return Ok(AppConfig::project_config_path(project_root));
    }
    AppConfig::global_config_path().ok_or_else(|| CliError::ConfigError {
        message: "No home directory found for the global config".into(),
        source: None,
    })
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
