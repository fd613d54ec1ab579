use crate::primitives::*;
use indicatif::ProgressStyle;
use std::sync::OnceLock;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Crates whose chatter is capped at `warn` unless RUST_LOG says otherwise
const QUIET_CRATES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls", "want", "mio"];

/// Logger implementation using tracing with indicatif progress integration
#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Initialize the global logger
    pub fn init(config: LoggerConfig) -> Result<(), LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        // Spinners and progress bars for `progress_span!` spans
        let indicatif_layer = IndicatifLayer::new().with_progress_style(spinner_style(config.ansi));

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directives(config.level)));

        let ansi = config.ansi;
        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Yaml) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(ansi)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Yaml) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(ansi)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(indicatif_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            ansi = config.ansi,
            "Logger initialized"
        );

        GLOBAL_LOGGER
            .set(Logger)
            .map_err(|_| LoggerError::AlreadyInitialized)
    }
}

/// Default `EnvFilter` directives: depviz at `level`, HTTP stack at `warn`
pub fn filter_directives(level: LogLevel) -> String {
    let level = level.as_directive();
    let mut directives = vec![format!("depviz={level}"), format!("depviz_lib={level}")];
    directives.extend(QUIET_CRATES.iter().map(|name| format!("{name}=warn")));
    directives.push(level.to_string());
    directives.join(",")
}

/// Spinner shown while a `progress_span!` is entered
pub fn spinner_style(color: bool) -> ProgressStyle {
    let template = if color {
        "{span_child_prefix}{spinner:.green} {span_fields}"
    } else {
        "{span_child_prefix}{spinner} {span_fields}"
    };
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Create a span for operations that should show a spinner
///
/// Emitted at `warn` so the spinner shows at the default verbosity.
#[macro_export]
macro_rules! progress_span {
    ($operation:expr) => {
        tracing::warn_span!("progress", operation = $operation)
    };
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
