use super::*;
use crate::application::cli::{Cli, Commands};
use crate::primitives::ColorIntent;
use crate::testing::TempDirFixture;
use clap::Parser;

fn cli(args: &[&str]) -> CliConfig {
    Cli::try_parse_from(std::iter::once("depviz").chain(args.iter().copied()))
        .unwrap()
        .into()
}

#[test]
fn test_resolve_layers_cli_over_file() {
    let fixture = TempDirFixture::new().unwrap();
    let registry = fixture.write_registry(&["A: B", "B:"]).unwrap();
    let config_file = fixture
        .write_file(
            "depviz.yaml",
            &format!(
                "package: FromFile\nurl: {}\nmode: true\nfilter: x\n",
                registry.display()
            ),
        )
        .unwrap();

    let resolved = AppConfig::resolve(
        cli(&[
            "--config",
            &config_file.to_string_lossy(),
            "--package",
            "A",
            "order",
        ]),
        &EnvironmentConfig::default(),
    )
    .unwrap();

    assert_eq!(resolved.command, Some(Commands::Order));
    let config = resolved.app_config;
    assert_eq!(config.package.as_deref(), Some("A"));
    assert_eq!(config.filter.as_deref(), Some("x"));
    assert!(config.offline);
    assert_eq!(config.url, registry.to_string_lossy());
}

#[test]
fn test_resolve_missing_explicit_config() {
    let fixture = TempDirFixture::new().unwrap();
    let missing = fixture.path().join("missing.yaml");

    let err = AppConfig::resolve(
        cli(&["--config", &missing.to_string_lossy()]),
        &EnvironmentConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::ConfigFileNotFound { .. }));
}

#[test]
fn test_resolve_reports_validation_errors() {
    let err = AppConfig::resolve(
        cli(&["--offline", "--url", "/no/such/registry.txt", "-t", "0"]),
        &EnvironmentConfig::default(),
    )
    .unwrap_err();

    let ConfigError::ValidationFailed { reason } = err else {
        panic!("unexpected error: {err}");
    };
    assert!(reason.contains("/no/such/registry.txt"));
    assert!(reason.contains("; "));
}

#[test]
fn test_environment_color_yields_to_cli() {
    let no_color = EnvironmentConfig::from_pairs([("NO_COLOR", "1")]).unwrap();

    let fixture = TempDirFixture::new().unwrap();
    let config_file = fixture.write_file("empty.yaml", "").unwrap();
    let config_arg = config_file.to_string_lossy().to_string();

    let from_env = AppConfig::resolve(cli(&["--config", &config_arg]), &no_color).unwrap();
    assert_eq!(from_env.app_config.color, ColorIntent::Never);

    let from_cli = AppConfig::resolve(
        cli(&["--config", &config_arg, "--color", "always"]),
        &no_color,
    )
    .unwrap();
    assert_eq!(from_cli.app_config.color, ColorIntent::Always);
}

#[test]
fn test_default_config_paths_start_with_working_directory() {
    let paths = default_config_paths();
    assert_eq!(paths[0], PathBuf::from("config.yaml"));
}
