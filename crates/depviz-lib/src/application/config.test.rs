use super::*;
use crate::testing::TempDirFixture;

fn offline_config(url: &str) -> AppConfig {
    AppConfig {
        package: Some("A".to_string()),
        url: url.to_string(),
        offline: true,
        ..AppConfig::default()
    }
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.log_level, 1);
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.url, "https://api.nuget.org/v3-flatcontainer");
    assert_eq!(config.color, ColorIntent::Auto);
    assert!(!config.offline);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_keys() {
    let yaml = "\
package: Serilog
url: ./registry.txt
mode: true
version: 2.12.0
filter: Sinks
output_dir: out
net_timeout: 5
";
    let config = AppConfig::from_yaml_str(yaml).unwrap();

    assert_eq!(config.package.as_deref(), Some("Serilog"));
    assert_eq!(config.url, "./registry.txt");
    assert!(config.offline);
    assert_eq!(config.pkg_version.as_deref(), Some("2.12.0"));
    assert_eq!(config.filter.as_deref(), Some("Sinks"));
    assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    assert_eq!(config.net_timeout, 5);
    // Unspecified keys keep their defaults
    assert_eq!(config.log_level, 1);
}

#[test]
fn test_yaml_offline_key() {
    let config = AppConfig::from_yaml_str("package: A\noffline: true\n").unwrap();
    assert!(config.offline);
}

#[test]
fn test_empty_yaml_is_default() {
    let config = AppConfig::from_yaml_str("  \n").unwrap();
    assert_eq!(config.package, None);
    assert_eq!(config.net_timeout, 30);
}

#[test]
fn test_invalid_yaml() {
    assert!(AppConfig::from_yaml_str("net_timeout: [not, a, number]").is_err());
}

#[test]
fn test_from_yaml_file() {
    let fixture = TempDirFixture::new().unwrap();
    let path = fixture.write_file("config.yaml", "package: Lib\n").unwrap();

    let config = AppConfig::from_yaml_file(&path).unwrap();
    assert_eq!(config.package.as_deref(), Some("Lib"));

    let missing = AppConfig::from_yaml_file(&fixture.path().join("other.yaml")).unwrap_err();
    assert!(matches!(missing, ConfigError::ConfigFileNotFound { .. }));

    let broken = fixture.write_file("broken.yaml", "net_timeout: nope\n").unwrap();
    let err = AppConfig::from_yaml_file(&broken).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
}

#[test]
fn test_merge_prefers_non_default_values() {
    let base = AppConfig {
        package: Some("Base".to_string()),
        filter: Some("test".to_string()),
        net_timeout: 10,
        ..AppConfig::default()
    };
    let overrides = AppConfig {
        package: Some("Override".to_string()),
        log_level: 4,
        color: ColorIntent::Always,
        ..AppConfig::default()
    };

    let merged = base.merge_with(overrides);
    assert_eq!(merged.package.as_deref(), Some("Override"));
    assert_eq!(merged.filter.as_deref(), Some("test"));
    assert_eq!(merged.net_timeout, 10);
    assert_eq!(merged.log_level, 4);
    assert_eq!(merged.color, ColorIntent::Always);
}

#[test]
fn test_validation_accepts_existing_offline_file() {
    let fixture = TempDirFixture::new().unwrap();
    let path = fixture.write_registry(&["A: B"]).unwrap();

    assert!(offline_config(&path.to_string_lossy()).validate().is_ok());
}

#[test]
fn test_validation_collects_every_problem() {
    let config = AppConfig {
        package: Some("   ".to_string()),
        pkg_version: Some(" 1.0 ".to_string()),
        net_timeout: 0,
        ..offline_config("/definitely/not/here.txt")
    };

    let err = config.validate().unwrap_err();
    let ConfigError::ValidationFailed { reason } = err else {
        panic!("unexpected error: {err}");
    };

    let problems: Vec<&str> = reason.split("; ").collect();
    assert_eq!(problems.len(), 4, "{reason}");
    assert!(problems[0].contains("package"));
    assert!(problems[1].contains("/definitely/not/here.txt"));
    assert!(problems[2].contains("version"));
    assert!(problems[3].contains("timeout"));
}

#[test]
fn test_validation_rejects_empty_url() {
    let config = AppConfig {
        url: " ".to_string(),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_root_package() {
    let mut config = AppConfig::default();
    assert!(config.root_package().is_err());

    config.package = Some(" Serilog ".to_string());
    assert_eq!(config.root_package().unwrap(), "Serilog");
}

#[test]
fn test_logger_config() {
    let config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };

    let logger = config.to_logger_config(true);
    assert_eq!(logger.level, LogLevel::Debug);
    assert_eq!(logger.format, LogFormat::Json);
    assert_eq!(logger.output, LogOutput::Stderr);
    assert!(logger.ansi);
}

#[test]
fn test_explicit_output_dir() {
    let config = AppConfig {
        output_dir: Some(PathBuf::from("diagrams")),
        ..AppConfig::default()
    };
    assert_eq!(config.output_dir().unwrap(), PathBuf::from("diagrams"));
}
