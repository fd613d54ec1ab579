//! E2E tests for the graph, order, deps and packages commands against
//! offline registry files

use anyhow::Result;
use depviz_lib::application::cli::Commands;
use depviz_lib::application::commands::{build_graph, execute_command_with_config, open_source};
use depviz_lib::graph::{LoadOrderSummary, NodeId, load_order, render_listing};
use depviz_tests::TestEnvironment;
use depviz_tests::fixtures::{CYCLE_REGISTRY, DIAMOND_REGISTRY, SERVICE_REGISTRY};

fn names(order: &[NodeId]) -> Vec<&str> {
    order.iter().map(NodeId::name).collect()
}

#[test]
fn e2e_graph_command_writes_expected_diagram() -> Result<()> {
    let env = TestEnvironment::with_registry(DIAMOND_REGISTRY)?;
    let config = env.offline_config("App")?;

    execute_command_with_config(Commands::Graph { no_save: false }, &config)?;

    let expected = "\
@startuml
title Dependency graph: App
skinparam componentStyle rectangle
skinparam nodesep 20
skinparam ranksep 30

component \"App\" as Node_App
component \"Core\" as Node_Core
component \"Http\" as Node_Http
component \"Json\" as Node_Json

Node_App --> Node_Http
Node_App --> Node_Json
Node_Http --> Node_Core
Node_Json --> Node_Core
@enduml";
    assert_eq!(env.read_diagram("App")?, expected);
    Ok(())
}

#[test]
fn e2e_rerun_produces_identical_diagram() -> Result<()> {
    let env = TestEnvironment::with_registry(SERVICE_REGISTRY)?;
    let config = env.offline_config("Service")?;

    execute_command_with_config(Commands::default(), &config)?;
    let first = env.read_diagram("Service")?;
    execute_command_with_config(Commands::default(), &config)?;

    assert_eq!(env.read_diagram("Service")?, first);
    Ok(())
}

#[test]
fn e2e_diamond_load_order() -> Result<()> {
    let env = TestEnvironment::with_registry(DIAMOND_REGISTRY)?;
    let config = env.offline_config("App")?;

    let source = open_source(&config)?;
    let (builder, graph) = build_graph(&config, source.as_ref())?;
    let order = load_order(&graph, builder.root());

    assert_eq!(names(&order), ["Core", "Http", "Json", "App"]);
    let summary = LoadOrderSummary::analyze(&order, builder.root());
    assert_eq!(summary.total, 4);
    assert!(summary.root_last);
    Ok(())
}

#[test]
fn e2e_cycle_is_truncated() -> Result<()> {
    let env = TestEnvironment::with_registry(CYCLE_REGISTRY)?;
    let config = env.offline_config("A")?;

    let source = open_source(&config)?;
    let (_, graph) = build_graph(&config, source.as_ref())?;

    assert_eq!(
        render_listing(&graph),
        ["A -> B", "B -> C", "C -> (no dependencies)"]
    );
    assert!(!graph.has_cycles());

    execute_command_with_config(Commands::Order, &config)?;
    Ok(())
}

#[test]
fn e2e_filter_removes_test_packages() -> Result<()> {
    let env = TestEnvironment::with_registry(SERVICE_REGISTRY)?;
    let mut config = env.offline_config("Service")?;
    config.filter = Some("testing".to_string());

    let source = open_source(&config)?;
    let (builder, graph) = build_graph(&config, source.as_ref())?;

    assert!(!graph.contains(&NodeId::unversioned("Service.Testing")));
    // Only reachable through the filtered package
    assert!(!graph.contains(&NodeId::unversioned("xunit")));
    assert_eq!(
        names(&load_order(&graph, builder.root())),
        ["Logging", "Service.Core", "Service"]
    );
    Ok(())
}

#[test]
fn e2e_filter_never_hides_the_root() -> Result<()> {
    let env = TestEnvironment::with_registry(SERVICE_REGISTRY)?;
    let mut config = env.offline_config("Service")?;
    config.filter = Some("service".to_string());

    let source = open_source(&config)?;
    let (_, graph) = build_graph(&config, source.as_ref())?;

    assert_eq!(render_listing(&graph), ["Logging -> (no dependencies)", "Service -> Logging"]);
    Ok(())
}

#[test]
fn e2e_leaf_root() -> Result<()> {
    let env = TestEnvironment::with_registry("Solo:\n")?;
    let config = env.offline_config("Solo")?;

    execute_command_with_config(Commands::Graph { no_save: false }, &config)?;

    let diagram = env.read_diagram("Solo")?;
    assert!(diagram.contains("component \"Solo\" as Node_Solo"));
    assert!(!diagram.contains("-->"));
    Ok(())
}

#[test]
fn e2e_unknown_root_writes_nothing() -> Result<()> {
    let env = TestEnvironment::with_registry(DIAMOND_REGISTRY)?;
    let config = env.offline_config("Ghost")?;

    let err = execute_command_with_config(Commands::default(), &config).unwrap_err();

    assert!(format!("{err:#}").contains("'Ghost' not found"));
    assert!(!env.diagram_exists("Ghost"));
    Ok(())
}

#[test]
fn e2e_deps_and_packages_commands() -> Result<()> {
    let env = TestEnvironment::with_registry(SERVICE_REGISTRY)?;
    let config = env.offline_config("Service")?;

    execute_command_with_config(Commands::Deps, &config)?;
    execute_command_with_config(Commands::Packages, &config)?;
    Ok(())
}
