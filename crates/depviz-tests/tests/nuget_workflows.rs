//! E2E tests for graph commands against a mock NuGet flat-container server

use anyhow::Result;
use depviz_lib::application::cli::Commands;
use depviz_lib::application::commands::{build_graph, execute_command_with_config, open_source};
use depviz_lib::graph::{NodeId, load_order, render_listing};
use depviz_tests::{NuspecBuilder, TestEnvironment, index_json};
use mockito::{Mock, Server, ServerGuard};

fn mock_nuspec(server: &mut ServerGuard, id: &str, version: &str, nuspec: &NuspecBuilder) -> Mock {
    let lower = id.to_lowercase();
    server
        .mock("GET", format!("/{lower}/{version}/{lower}.nuspec").as_str())
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(nuspec.build())
        .create()
}

fn mock_index(server: &mut ServerGuard, id: &str, versions: &[&str]) -> Mock {
    server
        .mock("GET", format!("/{}/index.json", id.to_lowercase()).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(index_json(versions))
        .create()
}

#[test]
fn e2e_live_graph_follows_version_constraints() -> Result<()> {
    let mut server = Server::new();
    let _m = mock_index(&mut server, "Serilog.Sinks.File", &["4.1.0", "5.0.0"]);
    let _m = mock_nuspec(
        &mut server,
        "Serilog.Sinks.File",
        "5.0.0",
        &NuspecBuilder::new("Serilog.Sinks.File", "5.0.0")
            .group(Some(".NETFramework4.5"), &[("Serilog", Some("2.10.0"))])
            .group(Some("net5.0"), &[("Serilog", Some("[2.12.0, )"))]),
    );
    let _m = mock_nuspec(
        &mut server,
        "Serilog",
        "2.10.0",
        &NuspecBuilder::new("Serilog", "2.10.0"),
    );

    let env = TestEnvironment::new()?;
    let config = env.live_config(&server.url(), "Serilog.Sinks.File", Some("5.0.0"));

    execute_command_with_config(Commands::Graph { no_save: false }, &config)?;

    let diagram = env.read_diagram("Serilog.Sinks.File")?;
    assert!(diagram.contains("component \"Serilog.Sinks.File\\n5.0.0\" as Node_Serilog_Sinks_File_5_0_0"));
    assert!(diagram.contains("Node_Serilog_Sinks_File_5_0_0 --> Node_Serilog_2_10_0"));
    Ok(())
}

#[test]
fn e2e_live_root_without_version_uses_latest_stable() -> Result<()> {
    let mut server = Server::new();
    let index = mock_index(&mut server, "App", &["1.0.0", "1.1.0", "2.0.0-preview1"]);
    let _m = mock_nuspec(
        &mut server,
        "App",
        "1.1.0",
        &NuspecBuilder::new("App", "1.1.0").group(None, &[("Lib", Some("[3.0.0, 4.0.0)"))]),
    );
    let _m = mock_nuspec(&mut server, "Lib", "3.0.0", &NuspecBuilder::new("Lib", "3.0.0"));

    let env = TestEnvironment::new()?;
    let config = env.live_config(&server.url(), "App", None);

    let source = open_source(&config)?;
    let (builder, graph) = build_graph(&config, source.as_ref())?;

    assert!(index.matched());
    assert_eq!(builder.root(), &NodeId::unversioned("App"));
    assert_eq!(
        load_order(&graph, builder.root()),
        [NodeId::new("Lib", "3.0.0"), NodeId::unversioned("App")]
    );
    Ok(())
}

#[test]
fn e2e_live_unversioned_dependency_resolves_latest() -> Result<()> {
    let mut server = Server::new();
    let _m = mock_index(&mut server, "Root", &["1.0.0"]);
    let _m = mock_nuspec(
        &mut server,
        "Root",
        "1.0.0",
        &NuspecBuilder::new("Root", "1.0.0").group(None, &[("Open", None), ("Upper", Some("(, 2.0]"))]),
    );
    let _m = mock_index(&mut server, "Open", &["0.9.0"]);
    let _m = mock_nuspec(&mut server, "Open", "0.9.0", &NuspecBuilder::new("Open", "0.9.0"));
    let _m = mock_index(&mut server, "Upper", &["1.5.0"]);
    let _m = mock_nuspec(&mut server, "Upper", "1.5.0", &NuspecBuilder::new("Upper", "1.5.0"));

    let env = TestEnvironment::new()?;
    let config = env.live_config(&server.url(), "Root", Some("1.0.0"));

    let source = open_source(&config)?;
    let (_, graph) = build_graph(&config, source.as_ref())?;

    assert_eq!(
        render_listing(&graph),
        [
            "Open -> (no dependencies)",
            "Root 1.0.0 -> Open, Upper",
            "Upper -> (no dependencies)",
        ]
    );
    Ok(())
}

#[test]
fn e2e_live_unknown_root() -> Result<()> {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/nothere/index.json")
        .with_status(404)
        .create();

    let env = TestEnvironment::new()?;
    let config = env.live_config(&server.url(), "NotHere", Some("1.0.0"));

    let err = execute_command_with_config(Commands::Order, &config).unwrap_err();
    assert!(format!("{err:#}").contains("'NotHere' not found"));
    Ok(())
}

#[test]
fn e2e_live_server_error_aborts_build() -> Result<()> {
    let mut server = Server::new();
    let _m = mock_index(&mut server, "Root", &["1.0.0"]);
    let _m = mock_nuspec(
        &mut server,
        "Root",
        "1.0.0",
        &NuspecBuilder::new("Root", "1.0.0").group(None, &[("Broken", Some("1.0.0"))]),
    );
    let _m = server
        .mock("GET", "/broken/1.0.0/broken.nuspec")
        .with_status(500)
        .create();

    let env = TestEnvironment::new()?;
    let config = env.live_config(&server.url(), "Root", Some("1.0.0"));

    let err = execute_command_with_config(Commands::default(), &config).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Broken 1.0.0"), "{message}");
    assert!(message.contains("HTTP 500"), "{message}");
    assert!(!env.diagram_exists("Root"));
    Ok(())
}
