//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> config file -> .env -> env vars -> CLI args.

use crate::primitives::*;
use crate::registry::nuget::DEFAULT_BASE_URL;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration values
pub mod defaults {
    use super::*;

    pub const LOG_LEVEL: u8 = 1; // Warnings by default
    pub const LOG_FORMAT: LogFormat = LogFormat::Text;
    pub const LOG_OUTPUT: LogOutput = LogOutput::Stderr;
    pub const COLOR: ColorIntent = ColorIntent::Auto;
    pub const NET_TIMEOUT: u64 = 30;
    pub const URL: &str = DEFAULT_BASE_URL;
    pub const CONFIG_FILE: &str = "config.yaml";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT
    }

    pub fn color() -> ColorIntent {
        defaults::COLOR
    }

    pub fn net_timeout() -> u64 {
        defaults::NET_TIMEOUT
    }

    pub fn url() -> String {
        defaults::URL.to_string()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Root package to analyze
    #[arg(short, long, global = true, env = "DEPVIZ_PACKAGE")]
    #[serde(default)]
    pub package: Option<String>,

    /// Root package version (latest when omitted)
    #[arg(long = "pkg-version", global = true, env = "DEPVIZ_VERSION")]
    #[serde(default, rename = "version")]
    pub pkg_version: Option<String>,

    /// Skip packages whose name contains this substring (case-insensitive)
    #[arg(short, long, global = true, env = "DEPVIZ_FILTER")]
    #[serde(default)]
    pub filter: Option<String>,

    /// Registry base URL, or the registry file path in offline mode
    #[arg(short, long, global = true, env = "DEPVIZ_URL", default_value = defaults::URL)]
    #[serde(default = "default_fns::url")]
    pub url: String,

    /// Read dependencies from a local registry file instead of NuGet
    #[arg(long, global = true, env = "DEPVIZ_OFFLINE")]
    #[serde(default, alias = "mode")]
    pub offline: bool,

    /// Directory the diagram file is written to (current directory by default)
    #[arg(short, long, global = true, env = "DEPVIZ_OUTPUT_DIR")]
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Registry timeout in seconds
    #[arg(short = 't', long, env = "DEPVIZ_NET_TIMEOUT", default_value_t = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "DEPVIZ_LOG_LEVEL", default_value_t = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Output format (text, json, yaml)
    #[arg(long, env = "DEPVIZ_LOG_FORMAT", value_enum, default_value_t = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "DEPVIZ_LOG_OUTPUT", value_enum, default_value_t = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "DEPVIZ_COLOR", value_enum, default_value_t = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,

    /// YAML configuration file (./config.yaml, then the user config directory)
    #[arg(long, env = "DEPVIZ_CONFIG")]
    #[serde(skip)]
    pub config: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            package: None,
            pkg_version: None,
            filter: None,
            url: default_fns::url(),
            offline: false,
            output_dir: None,
            net_timeout: default_fns::net_timeout(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
            config: None,
        }
    }
}

impl AppConfig {
    /// Read a YAML configuration file
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::ConfigFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml_str(&content).map_err(|reason| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse YAML configuration text; an empty document yields the defaults
    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(content).map_err(|e| e.to_string())
    }

    /// Logger settings; `ansi` is the already resolved color decision
    pub fn to_logger_config(&self, ansi: bool) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.net_timeout)
    }

    /// Directory for generated files
    pub fn output_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// The root package, required by every graph command
    pub fn root_package(&self) -> Result<&str, ConfigError> {
        self.package
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ConfigError::ValidationFailed {
                reason: "no package specified (use --package, DEPVIZ_PACKAGE or the config file)"
                    .to_string(),
            })
    }

    pub fn version_or_latest(&self) -> &str {
        self.pkg_version.as_deref().unwrap_or_default()
    }

    pub fn filter_or_empty(&self) -> &str {
        self.filter.as_deref().unwrap_or_default()
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        // For Option fields, take other if it's Some
        if other.package.is_some() {
            self.package = other.package;
        }
        if other.pkg_version.is_some() {
            self.pkg_version = other.pkg_version;
        }
        if other.filter.is_some() {
            self.filter = other.filter;
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir;
        }
        if other.config.is_some() {
            self.config = other.config;
        }

        // For primitive fields, take other if it's not the default
        if other.url != defaults::URL {
            self.url = other.url;
        }
        if other.offline {
            self.offline = true;
        }
        if other.net_timeout != defaults::NET_TIMEOUT {
            self.net_timeout = other.net_timeout;
        }
        if other.log_level != defaults::LOG_LEVEL {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if other.log_format != defaults::LOG_FORMAT {
            self.log_format = other.log_format;
        }
        if other.log_output != defaults::LOG_OUTPUT {
            self.log_output = other.log_output;
        }
        if other.color != defaults::COLOR {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration, reporting every problem at once
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if let Some(package) = &self.package
            && package.trim().is_empty()
        {
            problems.push("package name must not be empty".to_string());
        }

        if self.url.trim().is_empty() {
            problems.push("url must not be empty".to_string());
        } else if self.offline && !Path::new(&self.url).is_file() {
            problems.push(format!("offline registry file does not exist: {}", self.url));
        }

        if let Some(version) = &self.pkg_version
            && version.trim() != version
        {
            problems.push("version must not have surrounding whitespace".to_string());
        }

        if self.net_timeout == 0 {
            problems.push("net timeout must be greater than zero".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationFailed {
                reason: problems.join("; "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
