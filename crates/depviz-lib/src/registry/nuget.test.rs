use super::*;
use mockito::Server;

const NUSPEC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd">
  <metadata>
    <id>Serilog.Sinks.File</id>
    <version>5.0.0</version>
    <dependencies>
      <group targetFramework=".NETFramework4.5">
        <dependency id="Serilog" version="2.10.0" exclude="Build,Analyzers" />
      </group>
      <group targetFramework=".NETStandard2.0">
        <dependency id="Serilog" version="[2.12.0, )" />
        <dependency id="System.Text.Json" version="[6.0.0, 8.0.0)" />
        <dependency id="Untyped" />
      </group>
    </dependencies>
  </metadata>
</package>
"#;

fn registry(server: &Server) -> NugetRegistry {
    NugetRegistry::with_base_url(server.url(), Duration::from_secs(5)).unwrap()
}

#[test]
fn test_normalize_version() {
    assert_eq!(normalize_version("13.0.1"), "13.0.1");
    assert_eq!(normalize_version(" 1.0 "), "1.0");
    assert_eq!(normalize_version("[4.3.0, )"), "4.3.0");
    assert_eq!(normalize_version("[1.0.0]"), "1.0.0");
    assert_eq!(normalize_version("(1.0,2.0)"), "1.0");
    assert_eq!(normalize_version("(,2.0]"), "");
    assert_eq!(normalize_version(""), "");
}

#[test]
fn test_flat_container_version() {
    assert_eq!(flat_container_version("1.0"), "1.0.0");
    assert_eq!(flat_container_version("2"), "2.0.0");
    assert_eq!(flat_container_version("13.0.1"), "13.0.1");
    assert_eq!(flat_container_version("1.2.3.0"), "1.2.3");
    assert_eq!(flat_container_version("1.2.3.4"), "1.2.3.4");
    assert_eq!(flat_container_version("01.002.3"), "1.2.3");
    assert_eq!(flat_container_version("1.0-RC1"), "1.0.0-RC1");
    assert_eq!(flat_container_version("1.0.0+build.5"), "1.0.0");
    assert_eq!(flat_container_version("weird"), "weird");
}

#[test]
fn test_pick_latest_prefers_stable() {
    let versions: Vec<String> = ["1.0.0", "2.0.0", "3.0.0-beta1"]
        .iter()
        .map(|v| v.to_string())
        .collect();
    assert_eq!(pick_latest(&versions).as_deref(), Some("2.0.0"));

    let prerelease_only = vec!["0.1.0-alpha".to_string(), "0.2.0-rc1".to_string()];
    assert_eq!(pick_latest(&prerelease_only).as_deref(), Some("0.2.0-rc1"));

    assert_eq!(pick_latest(&[]), None);
}

#[test]
fn test_segment_lowercases_and_escapes() {
    assert_eq!(segment("Newtonsoft.Json"), "newtonsoft.json");
    assert_eq!(segment("a b/c"), "a%20b%2Fc");
}

#[test]
fn test_parse_nuspec_collects_all_groups() {
    let deps = parse_nuspec("Serilog.Sinks.File", NUSPEC).unwrap();

    let ids: Vec<&str> = deps.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["Serilog", "Serilog", "System.Text.Json", "Untyped"]);
    assert_eq!(deps[0].version, "2.10.0");
    assert_eq!(deps[3].version, "");
}

#[test]
fn test_parse_nuspec_without_dependencies() {
    let xml = "<package><metadata><id>Leaf</id></metadata></package>";
    assert!(parse_nuspec("Leaf", xml).unwrap().is_empty());
}

#[test]
fn test_parse_nuspec_flat_dependencies() {
    let xml = r#"<package><metadata><dependencies>
        <dependency id="A" version="1.0" />
        <dependency id="B" version="[2.0,)"></dependency>
    </dependencies></metadata></package>"#;

    let deps = parse_nuspec("Root", xml).unwrap();
    assert_eq!(
        deps,
        vec![
            PackageDependency {
                id: "A".to_string(),
                version: "1.0".to_string()
            },
            PackageDependency {
                id: "B".to_string(),
                version: "[2.0,)".to_string()
            },
        ]
    );
}

#[test]
fn test_parse_nuspec_unterminated_section() {
    let xml = r#"<package><metadata><dependencies><dependency id="A" version="1.0" />"#;
    let err = parse_nuspec("Broken", xml).unwrap_err();

    assert!(matches!(err, SourceError::MalformedMetadata { ref package, .. } if package == "Broken"));
}

#[test]
fn test_versions_and_latest() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/newtonsoft.json/index.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"versions":["12.0.3","13.0.1","13.0.2-beta1"]}"#)
        .expect(2)
        .create();

    let registry = registry(&server);
    assert_eq!(
        registry.versions("Newtonsoft.Json").unwrap(),
        vec!["12.0.3", "13.0.1", "13.0.2-beta1"]
    );
    assert_eq!(registry.latest_version("Newtonsoft.Json").unwrap(), "13.0.1");
    mock.assert();
}

#[test]
fn test_empty_version_list() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/ghost/index.json")
        .with_status(200)
        .with_body(r#"{"versions":[]}"#)
        .create();

    let err = registry(&server).latest_version("Ghost").unwrap_err();
    assert!(matches!(err, SourceError::NoVersions { .. }));
}

#[test]
fn test_invalid_index_body() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/broken/index.json")
        .with_status(200)
        .with_body("not json")
        .create();

    let err = registry(&server).versions("Broken").unwrap_err();
    assert!(matches!(err, SourceError::InvalidIndex { .. }));
}

#[test]
fn test_dependencies_for_explicit_version() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/serilog.sinks.file/5.0.0/serilog.sinks.file.nuspec")
        .with_status(200)
        .with_body(NUSPEC)
        .create();

    let deps = registry(&server)
        .dependencies("Serilog.Sinks.File", "5.0.0")
        .unwrap();

    mock.assert();
    assert_eq!(deps.len(), 3);
    // First occurrence across groups wins
    assert_eq!(deps.get("Serilog").map(String::as_str), Some("2.10.0"));
    assert_eq!(
        deps.get("System.Text.Json").map(String::as_str),
        Some("6.0.0")
    );
    assert_eq!(deps.get("Untyped").map(String::as_str), Some(""));
}

#[test]
fn test_dependencies_resolve_latest_when_unversioned() {
    let mut server = Server::new();
    let index = server
        .mock("GET", "/serilog/index.json")
        .with_status(200)
        .with_body(r#"{"versions":["2.12.0","3.1.1"]}"#)
        .create();
    let nuspec = server
        .mock("GET", "/serilog/3.1.1/serilog.nuspec")
        .with_status(200)
        .with_body("<package><metadata><dependencies /></metadata></package>")
        .create();

    let deps = registry(&server).dependencies("Serilog", "").unwrap();

    index.assert();
    nuspec.assert();
    assert!(deps.is_empty());
}

#[test]
fn test_short_version_bound_uses_normalized_url() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/lib/1.0.0/lib.nuspec")
        .with_status(200)
        .with_body("<package><metadata /></package>")
        .create();

    // "[1.0, )" reduces to "1.0", which the server only knows as 1.0.0
    let deps = registry(&server).dependencies("Lib", "1.0").unwrap();

    mock.assert();
    assert!(deps.is_empty());
}

#[test]
fn test_http_error_is_reported() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/lib/1.0.0/lib.nuspec")
        .with_status(500)
        .create();

    let err = registry(&server).dependencies("Lib", "1.0.0").unwrap_err();
    match err {
        SourceError::Http { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/lib/1.0.0/lib.nuspec"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_contains_maps_not_found_to_false() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/known/index.json")
        .with_status(200)
        .with_body(r#"{"versions":["1.0.0"]}"#)
        .create();
    let _m = server
        .mock("GET", "/missing/index.json")
        .with_status(404)
        .create();
    let _m = server
        .mock("GET", "/flaky/index.json")
        .with_status(503)
        .create();

    let registry = registry(&server);
    assert!(registry.contains("Known").unwrap());
    assert!(!registry.contains("Missing").unwrap());
    assert!(registry.contains("Flaky").is_err());
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let registry =
        NugetRegistry::with_base_url("http://localhost:1/flat/", Duration::from_secs(1)).unwrap();
    assert_eq!(registry.base_url(), "http://localhost:1/flat");
}
