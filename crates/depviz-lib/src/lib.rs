//! # depviz Library
//!
//! Transitive dependency graphs of NuGet packages: build, linearize, render.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared coordination
//! - [`logger`] - Structured logging with progress spinners
//! - [`registry`] - Dependency sources: live NuGet and offline registry files
//! - [`graph`] - Graph construction, load order and PlantUML rendering
//! - [`display`] - User-facing status output
//! - [`application`] - CLI interface, configuration and command handlers
//!
//! ## Quick Start
//!
//! ```no_run
//! // Parse the command line, configure logging and run the command
//! depviz_lib::main().unwrap();
//! ```

pub mod application;
pub mod display;
pub mod graph;
pub mod logger;
pub mod primitives;
pub mod registry;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use display::Display;
pub use graph::{DependencyGraph, GraphBuilder, NodeId, PlantUmlRenderer, load_order};
pub use logger::Logger;
pub use primitives::{ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};
pub use registry::{DependencySource, NugetRegistry, OfflineRegistry, SourceError};

// Private imports for the main function
use anyhow::Result;
use console::Term;

pub fn main() -> Result<()> {
    // 1. Load configuration: file, .env, environment, command line
    let config = AppConfig::load()?;
    let app_config = &config.app_config;

    // 2. Resolve color per stream and initialize output
    let stdout_color = app_config
        .color
        .resolve(Term::stdout().features().colors_supported());
    let stderr_color = app_config
        .color
        .resolve(Term::stderr().features().colors_supported());
    Display::init(stdout_color)?;
    Logger::init(app_config.to_logger_config(stderr_color))?;

    // 3. Run the command
    execute_command(config)
}
