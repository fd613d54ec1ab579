//! Configuration loading
//!
//! Coordinates loading configuration from the config file, `.env` files, the
//! environment and the command line.

use crate::primitives::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{cli::CliConfig, config::AppConfig, config::defaults, env::EnvironmentConfig};

impl AppConfig {
    /// Load config: defaults -> config file -> .env -> env vars -> CLI
    pub fn load() -> Result<CliConfig, ConfigError> {
        // .env values must be in the process environment before clap reads it
        load_env_files()?;

        let cli = CliConfig::load()?;
        let env = EnvironmentConfig::load()?;
        Self::resolve(cli, &env)
    }

    /// Layer a parsed command line over defaults and the config file
    pub fn resolve(cli: CliConfig, env: &EnvironmentConfig) -> Result<CliConfig, ConfigError> {
        let mut config = Self::default();

        if let Some(file_config) = Self::discover_file(cli.app_config.config.as_deref())? {
            config = config.merge_with(file_config);
        }

        config.color = env.apply_color_config(config.color);
        config = config.merge_with(cli.app_config);
        config.validate()?;

        Ok(CliConfig {
            app_config: config,
            command: cli.command,
        })
    }

    /// Read the explicit config file, or the first default location that exists
    pub fn discover_file(explicit: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_yaml_file(path).map(Some);
        }

        match default_config_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => {
                debug!(path = %path.display(), "Using configuration file");
                Self::from_yaml_file(&path).map(Some)
            }
            None => Ok(None),
        }
    }
}

/// `./config.yaml`, then `config.yaml` in the platform config directory
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(defaults::CONFIG_FILE)];
    if let Some(dirs) = ProjectDirs::from("design", "inherent", "depviz") {
        paths.push(dirs.config_dir().join(defaults::CONFIG_FILE));
    }
    paths
}

fn load_env_files() -> Result<(), ConfigError> {
    for env_file in [".env.local", ".env"] {
        match dotenvy::from_filename(env_file) {
            Ok(path) => debug!(path = %path.display(), "Loaded environment file"),
            Err(e) if e.not_found() => {}
            Err(source) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
