use super::*;
use crate::primitives::{ColorIntent, LogFormat};
use clap::CommandFactory;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("depviz").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand() {
    let cli = parse(&["--package", "Serilog"]);

    assert_eq!(cli.command, None);
    assert_eq!(cli.config.package.as_deref(), Some("Serilog"));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&[
        "order",
        "-p",
        "Serilog",
        "--pkg-version",
        "2.12.0",
        "-f",
        "sinks",
        "--offline",
        "-u",
        "registry.txt",
    ]);

    assert_eq!(cli.command, Some(Commands::Order));
    assert_eq!(cli.config.package.as_deref(), Some("Serilog"));
    assert_eq!(cli.config.pkg_version.as_deref(), Some("2.12.0"));
    assert_eq!(cli.config.filter.as_deref(), Some("sinks"));
    assert!(cli.config.offline);
    assert_eq!(cli.config.url, "registry.txt");
}

#[test]
fn test_graph_subcommand_flags() {
    let cli = parse(&["-p", "A", "graph", "--no-save", "-o", "out"]);

    assert_eq!(cli.command, Some(Commands::Graph { no_save: true }));
    assert_eq!(cli.config.output_dir, Some(PathBuf::from("out")));
}

#[test]
fn test_enum_flags_accept_aliases() {
    let cli = parse(&["--log-format", "yml", "--color", "off", "--log-level", "3"]);

    assert_eq!(cli.config.log_format, LogFormat::Yaml);
    assert_eq!(cli.config.color, ColorIntent::Never);
    assert_eq!(cli.config.log_level, 3);
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["depviz", "explode"]).is_err());
}

#[test]
fn test_cli_config_from_cli() {
    let config: CliConfig = parse(&["packages"]).into();
    assert_eq!(config.command, Some(Commands::Packages));
}
