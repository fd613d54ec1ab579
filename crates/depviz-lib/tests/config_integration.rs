use clap::Parser;
use depviz_lib::application::{AppConfig, Cli, EnvironmentConfig};
use depviz_lib::primitives::{ColorIntent, ConfigError, LogLevel};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert!(config.net_timeout > 0);
    assert_eq!(config.color, ColorIntent::Auto);
    assert!(config.package.is_none());
}

#[test]
fn test_yaml_file_then_cli_then_validation() {
    let temp = TempDir::new().unwrap();
    let registry = temp.path().join("repo.txt");
    fs::write(&registry, "Root: Leaf\nLeaf:\n").unwrap();

    let config_path = temp.path().join("depviz.yaml");
    fs::write(
        &config_path,
        format!(
            "package: Root\nurl: {}\nmode: true\nnet_timeout: 12\n",
            registry.display()
        ),
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "depviz",
        "--config",
        config_path.to_str().unwrap(),
        "--log-level",
        "2",
    ])
    .unwrap();

    let resolved = AppConfig::resolve(cli.into(), &EnvironmentConfig::default()).unwrap();
    let config = resolved.app_config;

    assert_eq!(config.root_package().unwrap(), "Root");
    assert!(config.offline);
    assert_eq!(config.net_timeout, 12);
    assert_eq!(config.to_logger_config(false).level, LogLevel::Info);
}

#[test]
fn test_malformed_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("bad.yaml");
    fs::write(&config_path, "package: [unterminated\n").unwrap();

    let err = AppConfig::discover_file(Some(&config_path)).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
    assert!(err.to_string().contains("bad.yaml"));
}

#[test]
fn test_ci_disables_color_unless_cli_forces_it() {
    let ci = EnvironmentConfig::from_pairs([("CI", "true")]).unwrap();
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("empty.yaml");
    fs::write(&config_path, "").unwrap();
    let config_arg = config_path.to_str().unwrap();

    let cli = Cli::try_parse_from(["depviz", "--config", config_arg]).unwrap();
    let resolved = AppConfig::resolve(cli.into(), &ci).unwrap();
    assert_eq!(resolved.app_config.color, ColorIntent::Never);

    let cli = Cli::try_parse_from(["depviz", "--config", config_arg, "-c", "always"]).unwrap();
    let resolved = AppConfig::resolve(cli.into(), &ci).unwrap();
    assert_eq!(resolved.app_config.color, ColorIntent::Always);
}
