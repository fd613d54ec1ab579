use super::*;
use crate::graph::NodeId;
use crate::testing::TempDirFixture;

fn offline_config(fixture: &TempDirFixture, lines: &[&str], package: &str) -> AppConfig {
    let registry = fixture.write_registry(lines).unwrap();
    AppConfig {
        package: Some(package.to_string()),
        url: registry.to_string_lossy().to_string(),
        offline: true,
        output_dir: Some(fixture.path().to_path_buf()),
        ..AppConfig::default()
    }
}

#[test]
fn test_graph_command_writes_diagram() {
    let fixture = TempDirFixture::new().unwrap();
    let config = offline_config(&fixture, &["A: B C", "B: C", "C:"], "A");

    execute_command_with_config(Commands::Graph { no_save: false }, &config).unwrap();

    let diagram = fixture.read_file("A_diagram.puml").unwrap();
    assert!(diagram.starts_with("@startuml\n"));
    assert!(diagram.contains("Node_A --> Node_B"));
    assert!(diagram.contains("Node_B --> Node_C"));
    assert!(diagram.ends_with("@enduml"));
}

#[test]
fn test_graph_command_no_save() {
    let fixture = TempDirFixture::new().unwrap();
    let config = offline_config(&fixture, &["A: B", "B:"], "A");

    execute_command_with_config(Commands::Graph { no_save: true }, &config).unwrap();

    assert!(!fixture.file_exists("A_diagram.puml"));
}

#[test]
fn test_graph_command_missing_output_dir_is_not_fatal() {
    let fixture = TempDirFixture::new().unwrap();
    let config = AppConfig {
        output_dir: Some(fixture.path().join("missing")),
        ..offline_config(&fixture, &["A:"], "A")
    };

    assert!(execute_command_with_config(Commands::default(), &config).is_ok());
}

#[test]
fn test_missing_root_fails() {
    let fixture = TempDirFixture::new().unwrap();
    let config = offline_config(&fixture, &["A: B"], "Z");

    let err = execute_command_with_config(Commands::Order, &config).unwrap_err();
    assert!(format!("{err:#}").contains("'Z' not found"), "{err:#}");
}

#[test]
fn test_order_and_deps_commands() {
    let fixture = TempDirFixture::new().unwrap();
    let config = offline_config(&fixture, &["A: B", "B: A"], "A");

    execute_command_with_config(Commands::Order, &config).unwrap();
    execute_command_with_config(Commands::Deps, &config).unwrap();
}

#[test]
fn test_deps_unknown_package() {
    let fixture = TempDirFixture::new().unwrap();
    let config = offline_config(&fixture, &["A:"], "Nope");

    assert!(execute_command_with_config(Commands::Deps, &config).is_err());
}

#[test]
fn test_missing_package_is_reported() {
    let fixture = TempDirFixture::new().unwrap();
    let config = AppConfig {
        package: None,
        ..offline_config(&fixture, &["A:"], "A")
    };

    let err = execute_command_with_config(Commands::Order, &config).unwrap_err();
    assert!(err.to_string().contains("no package specified"));
}

#[test]
fn test_packages_command() {
    let fixture = TempDirFixture::new().unwrap();
    let config = AppConfig {
        package: None,
        ..offline_config(&fixture, &["B:", "A: B"], "A")
    };

    execute_command_with_config(Commands::Packages, &config).unwrap();

    let online = AppConfig::default();
    assert!(execute_command_with_config(Commands::Packages, &online).is_err());
}

#[test]
fn test_build_graph_applies_filter() {
    let fixture = TempDirFixture::new().unwrap();
    let config = AppConfig {
        filter: Some("test".to_string()),
        ..offline_config(&fixture, &["App: Core TestKit", "Core:", "TestKit: Core"], "App")
    };

    let source = open_source(&config).unwrap();
    let (builder, graph) = build_graph(&config, source.as_ref()).unwrap();

    assert_eq!(builder.root(), &NodeId::unversioned("App"));
    assert!(graph.contains(&NodeId::unversioned("Core")));
    assert!(!graph.contains(&NodeId::unversioned("TestKit")));
}

#[test]
fn test_live_source_through_mock_server() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/app/index.json")
        .with_status(200)
        .with_body(r#"{"versions":["1.0.0"]}"#)
        .create();
    let _m = server
        .mock("GET", "/app/1.0.0/app.nuspec")
        .with_status(200)
        .with_body(
            r#"<package><metadata><dependencies>
                <dependency id="Lib" version="[2.0.0, )" />
            </dependencies></metadata></package>"#,
        )
        .create();
    let _m = server
        .mock("GET", "/lib/2.0.0/lib.nuspec")
        .with_status(200)
        .with_body("<package><metadata /></package>")
        .create();

    let config = AppConfig {
        package: Some("App".to_string()),
        pkg_version: Some("1.0.0".to_string()),
        url: server.url(),
        ..AppConfig::default()
    };

    let source = open_source(&config).unwrap();
    let (builder, graph) = build_graph(&config, source.as_ref()).unwrap();

    let order = load_order(&graph, builder.root());
    assert_eq!(
        order,
        vec![NodeId::new("Lib", "2.0.0"), NodeId::new("App", "1.0.0")]
    );
}
