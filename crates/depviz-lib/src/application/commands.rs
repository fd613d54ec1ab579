//! Command execution handlers
//!
//! Each handler opens the configured dependency source, does its work and
//! reports through [`Display`]. Errors carry context for the binary to print.

use crate::application::{AppConfig, CliConfig, Commands};
use crate::display::Display;
use crate::graph::{
    DependencyGraph, GraphBuilder, LoadOrderSummary, PlantUmlRenderer, load_order, render_listing,
    write_diagram,
};
use crate::registry::{DependencySource, NugetRegistry, OfflineRegistry};
use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::{debug, info};

/// Execute the parsed command line; no subcommand means `graph`
pub fn execute_command(config: CliConfig) -> Result<()> {
    let command = config.command.unwrap_or_default();
    execute_command_with_config(command, &config.app_config)
}

/// Execute a specific command with a resolved configuration (for testing)
pub fn execute_command_with_config(command: Commands, config: &AppConfig) -> Result<()> {
    debug!(?command, "Executing command");

    match command {
        Commands::Graph { no_save } => handle_graph(config, !no_save),
        Commands::Order => handle_order(config),
        Commands::Deps => handle_deps(config),
        Commands::Packages => handle_packages(config),
    }
}

/// Open the registry named by the configuration
pub fn open_source(config: &AppConfig) -> Result<Box<dyn DependencySource>> {
    if config.offline {
        let registry = open_offline(config)?;
        info!(path = %config.url, packages = registry.len(), "Using offline registry");
        Ok(Box::new(registry))
    } else {
        let registry = NugetRegistry::with_base_url(&config.url, config.timeout())
            .context("Failed to create the NuGet client")?;
        info!(url = %registry.base_url(), "Using NuGet registry");
        Ok(Box::new(registry))
    }
}

fn open_offline(config: &AppConfig) -> Result<OfflineRegistry> {
    OfflineRegistry::load(Path::new(&config.url))
        .with_context(|| format!("Failed to load offline registry {}", config.url))
}

/// Build the graph for the configured root package
pub fn build_graph(
    config: &AppConfig,
    source: &dyn DependencySource,
) -> Result<(GraphBuilder, DependencyGraph)> {
    let builder = GraphBuilder::new(config.root_package()?, config.version_or_latest())
        .with_filter(config.filter_or_empty());

    let span = crate::progress_span!(format!("Resolving {}", builder.root()));
    let graph = span
        .in_scope(|| builder.build(source))
        .with_context(|| format!("Failed to build the dependency graph of {}", builder.root()))?;

    Ok((builder, graph))
}

fn handle_graph(config: &AppConfig, save: bool) -> Result<()> {
    let status = Display::status();
    let source = open_source(config)?;

    status.working(&format!("Resolving dependencies of {}", config.root_package()?));
    let (builder, graph) = build_graph(config, source.as_ref())?;
    status.success(
        "Graph built",
        &format!(
            "{} packages, {} dependencies",
            graph.node_count(),
            graph.edge_count()
        ),
    );

    status.section(&format!("Dependency graph of {}", builder.root()));
    for line in render_listing(&graph) {
        status.message(&line);
    }

    let diagram = PlantUmlRenderer::new().render(&graph, &builder.root().canonical());
    status.section("PlantUML");
    status.verbatim("diagram", &diagram);

    if save {
        // A failed save does not invalidate the printed diagram
        match write_diagram(&config.output_dir()?, builder.root().name(), &diagram) {
            Ok(path) => {
                status.success("Diagram saved", &path.display().to_string());
                status.subtle(&format!("Render it with: plantuml {}", path.display()));
            }
            Err(e) => status.warning(&format!("Could not save the diagram: {e}")),
        }
    }

    Ok(())
}

fn handle_order(config: &AppConfig) -> Result<()> {
    let status = Display::status();
    let source = open_source(config)?;

    let (builder, graph) = build_graph(config, source.as_ref())?;
    let order = load_order(&graph, builder.root());
    let summary = LoadOrderSummary::analyze(&order, builder.root());

    status.section(&format!("Load order (root: {})", builder.root()));
    for (index, node) in order.iter().enumerate() {
        status.step(index + 1, summary.total, &node.canonical());
    }

    status.section("Summary");
    status.info(&format!("{} packages to load", summary.total));
    if let Some(last) = &summary.last {
        status.info(&format!("loaded last: {}", last));
    }
    if summary.root_last {
        status.success("Root package loads last", "");
    } else {
        status.warning(&format!("root package {} is not loaded last", builder.root()));
    }

    Ok(())
}

fn handle_deps(config: &AppConfig) -> Result<()> {
    let status = Display::status();
    let source = open_source(config)?;
    let root = config.root_package()?;

    let known = source
        .contains(root)
        .with_context(|| format!("Failed to look up {}", root))?;
    if !known {
        bail!("Package '{}' not found in the dependency source", root);
    }

    let deps = source
        .dependencies(root, config.version_or_latest())
        .with_context(|| format!("Failed to get dependencies of {}", root))?;

    if deps.is_empty() {
        status.info(&format!("{} has no direct dependencies", root));
        return Ok(());
    }

    status.section(&format!("Direct dependencies of {}", root));
    let lines: Vec<String> = deps
        .iter()
        .map(|(name, version)| {
            if version.is_empty() {
                name.clone()
            } else {
                format!("{} {}", name, version)
            }
        })
        .collect();
    status.list(&lines);

    Ok(())
}

fn handle_packages(config: &AppConfig) -> Result<()> {
    if !config.offline {
        bail!("The packages command needs an offline registry (--offline --url <file>)");
    }

    let status = Display::status();
    let registry = open_offline(config)?;

    if registry.is_empty() {
        status.warning(&format!("no packages in {}", config.url));
        return Ok(());
    }

    status.section(&format!("Packages in {}", config.url));
    status.list(&registry.packages());

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
