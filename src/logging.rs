/*!
 * Logging and tracing initialization
 */

use std::fs::File;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::config::{LogFormat, LoggingSettings};
use crate::error::{Result, RouterError};

/// Crates whose log level follows the configured level
const LOG_TARGETS: [&str; 4] = [
    "specimen_router",
    "specimen_server",
    "specimen_observability",
    "tower_http",
];

/// Effective level after applying `verbose`
pub fn effective_level(settings: &LoggingSettings) -> Level {
    if settings.verbose {
        Level::DEBUG
    } else {
        settings.level.to_tracing_level()
    }
}

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(level: Level) -> String {
    let level = level.to_string().to_lowercase();
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize structured logging based on configuration
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let directive = default_directive(effective_level(settings));

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directive))
        .map_err(|e| RouterError::Config(format!("Failed to create log filter: {}", e)))?;

    let stdout_layer = match settings.format {
        LogFormat::Compact => fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_span_events(FmtSpan::NONE)
            .compact()
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .json()
            .boxed(),
    };

    let file_layer = match settings.file {
        Some(ref log_path) => Some(file_layer(log_path)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| RouterError::Config(format!("Failed to install logger: {}", e)))?;

    Ok(())
}

fn file_layer<S>(log_path: &Path) -> Result<Box<dyn Layer<S> + Send + Sync + 'static>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let file = File::create(log_path)
        .map_err(|e| RouterError::Config(format!("Failed to create log file: {}", e)))?;

    Ok(fmt::layer()
        .with_writer(file)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(false) // No ANSI colors in file
        .json()
        .boxed())
}

/// Initialize logging with custom format for testing
#[cfg(test)]
pub fn init_test_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("specimen_router=debug"));

        let fmt_layer = fmt::layer().with_test_writer().with_target(false).compact();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .ok(); // Ignore error if already initialized
    });
}
