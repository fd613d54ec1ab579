use super::*;

#[test]
fn test_filter_directives_scope_depviz_to_level() {
    let directives = filter_directives(LogLevel::Debug);

    assert!(directives.starts_with("depviz=debug,depviz_lib=debug"));
    assert!(directives.contains("reqwest=warn"));
    assert!(directives.contains("hyper_util=warn"));
    assert!(directives.ends_with(",debug"));
}

#[test]
fn test_filter_directives_parse() {
    for level in [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let directives = filter_directives(level);
        assert!(
            EnvFilter::try_new(&directives).is_ok(),
            "invalid directives: {directives}"
        );
    }
}

#[test]
fn test_progress_span_enabled_at_default_level() {
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directives(LogLevel::from_verbosity(1))));

    tracing::subscriber::with_default(subscriber, || {
        let span = crate::progress_span!("Resolving App");
        assert!(!span.is_disabled());
    });
}

#[test]
fn test_progress_span_hidden_at_error_level() {
    let subscriber =
        tracing_subscriber::registry().with(EnvFilter::new(filter_directives(LogLevel::Error)));

    tracing::subscriber::with_default(subscriber, || {
        assert!(crate::progress_span!("Resolving App").is_disabled());
    });
}

#[test]
fn test_spinner_style_builds_for_both_color_modes() {
    let _ = spinner_style(true);
    let _ = spinner_style(false);
}

#[test]
fn test_second_init_is_rejected() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    // Whichever call wins the race, a repeat must fail
    let _ = Logger::init(config.clone());
    let err = Logger::init(config).unwrap_err();
    assert!(matches!(
        err,
        LoggerError::AlreadyInitialized | LoggerError::InitializationFailed { .. }
    ));
}
