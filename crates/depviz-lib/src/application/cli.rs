use crate::primitives::ConfigError;
use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// depviz CLI - NuGet dependency graph visualizer
#[derive(Debug, Clone, Parser)]
#[command(name = "depviz")]
#[command(about = "Builds the transitive dependency graph of a NuGet package")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// depviz commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Cli::parse().into())
    }
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Available depviz commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Build the graph, print it with its PlantUML diagram and save the diagram
    Graph {
        /// Print the diagram without writing the .puml file
        #[arg(long, help = "Do not write the diagram file")]
        no_save: bool,
    },

    /// Print the order in which packages have to be loaded
    Order,

    /// Print the direct dependencies of the root package
    Deps,

    /// List packages available in the offline registry
    Packages,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Graph { no_save: false }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
