//! Logging setup for GLView.
//!
//! Every output (the console, plus an optional daily-rolling file) shares one
//! filter. It starts from `logging.level`. `logging.view_level` can then set
//! the view layer (`glview_system`) on its own, so viewport and touch tracing
//! can be turned up without raising everything else. Library code only emits
//! `tracing` events; installing a subscriber is the application's call.

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;

use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Target of the view layer's events (transform, touch registry, facade).
pub const VIEW_TARGET: &str = "glview_system";

/// Directives used before a configuration exists and `RUST_LOG` is unset.
const EARLY_DIRECTIVES: &str = "info,glview_system=debug";

/// Holds the file writer's guard; replacing it flushes the previous file.
static FILE_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Logs to `stderr` before the configuration is loaded.
///
/// Honors `RUST_LOG`; otherwise shows `info` globally and `debug` for the view
/// layer, so the first viewport derivations are visible. A second call (or any
/// already-installed subscriber) is ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(EARLY_DIRECTIVES));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

fn parse_level(field: &str, value: &str) -> Result<Level, CoreError> {
    value
        .parse::<Level>()
        .map_err(|_| LoggingError::FilterError(format!("{} '{}' is not a log level", field, value)).into())
}

/// Builds the filter directives for `config`, e.g. `"warn,glview_system=trace"`.
///
/// The view directive is only added when `view_level` is set.
pub fn filter_directives(config: &LoggingConfig) -> Result<String, CoreError> {
    let level = parse_level("level", &config.level)?;
    let mut directives = level.to_string().to_lowercase();
    if let Some(view_level) = &config.view_level {
        let view_level = parse_level("view_level", view_level)?;
        directives.push_str(&format!(",{}={}", VIEW_TARGET, view_level.to_string().to_lowercase()));
    }
    Ok(directives)
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, CoreError> {
    let directives = filter_directives(config)?;
    EnvFilter::try_new(&directives)
        .map_err(|e| LoggingError::FilterError(format!("'{}': {}", directives, e)).into())
}

fn is_json(config: &LoggingConfig) -> bool {
    config.format.eq_ignore_ascii_case("json")
}

fn console_layer(config: &LoggingConfig) -> Result<BoxedLayer, CoreError> {
    let filter = build_filter(config)?;
    let layer = if is_json(config) {
        fmt::layer().json().with_writer(std::io::stdout).with_ansi(false).with_filter(filter).boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(filter)
            .boxed()
    };
    Ok(layer)
}

/// Daily-rolling file layer next to `log_path`, creating its directory.
///
/// The returned guard must outlive the layer for buffered lines to be flushed.
fn file_layer(log_path: &Path, config: &LoggingConfig) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let file_name = log_path.file_name().ok_or_else(|| {
        LoggingError::InitializationFailure(format!("log file path {:?} has no file name", log_path))
    })?;
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    utils::fs::ensure_dir_exists(directory)?;

    let filter = build_filter(config)?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(directory, file_name));
    let layer = if is_json(config) {
        fmt::layer().json().with_writer(writer).with_ansi(false).with_filter(filter).boxed()
    } else {
        fmt::layer().with_writer(writer).with_ansi(false).with_filter(filter).boxed()
    };
    Ok((layer, guard))
}

/// Installs the global `tracing` subscriber described by `config`.
///
/// With `is_reload`, an already-installed subscriber is reported on stderr and
/// tolerated; otherwise it is an error.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let mut layers = vec![console_layer(config)?];
    let mut file_guard = None;
    if let Some(log_path) = &config.file_path {
        let (layer, guard) = file_layer(log_path, config)?;
        layers.push(layer);
        file_guard = Some(guard);
    }

    let installed = Registry::default().with(layers).try_init();

    match FILE_GUARD.lock() {
        Ok(mut slot) => *slot = file_guard,
        Err(e) => eprintln!("[ERROR] Log file guard is poisoned: {}. Buffered file lines may be lost.", e),
    }

    match installed {
        Ok(()) => Ok(()),
        Err(e) if is_reload => {
            eprintln!("[INFO] Logging reload kept the existing subscriber: {}", e);
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!("global subscriber already set: {}", e)).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config(level: &str, view_level: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            view_level: view_level.map(str::to_string),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_init_minimal_logging_runs_without_panic() {
        init_minimal_logging();
        // Second call hits an installed subscriber and is ignored
        init_minimal_logging();
        tracing::debug!(target: "glview_system::view", "early view event");
    }

    #[test]
    fn test_directives_follow_global_level() {
        assert_eq!(filter_directives(&config("WARN", None)).unwrap(), "warn");
    }

    #[test]
    fn test_directives_add_view_override() {
        assert_eq!(filter_directives(&config("error", Some("Trace"))).unwrap(), "error,glview_system=trace");
        assert!(build_filter(&config("error", Some("trace"))).is_ok());
    }

    #[test]
    fn test_invalid_view_level_is_a_filter_error() {
        match filter_directives(&config("info", Some("chatty"))) {
            Err(CoreError::Logging(LoggingError::FilterError(msg))) => {
                assert!(msg.contains("view_level 'chatty'"), "{}", msg);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_init_logging_invalid_level_returns_error() {
        match init_logging(&config("supertrace", None), false) {
            Err(CoreError::Logging(LoggingError::FilterError(msg))) => {
                assert!(msg.contains("level 'supertrace'"), "{}", msg);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_file_layer_in_both_formats() {
        let temp_dir = TempDir::new().unwrap();
        for format in ["text", "json"] {
            let config = LoggingConfig { format: format.to_string(), ..config("debug", Some("trace")) };
            let result = file_layer(&temp_dir.path().join(format!("{}.log", format)), &config);
            assert!(result.is_ok(), "file_layer failed for {}: {:?}", format, result.err());
        }
    }

    #[test]
    fn test_file_layer_creates_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("views/main/view.log");

        let result = file_layer(&nested, &config("info", None));
        assert!(result.is_ok(), "file_layer failed: {:?}", result.err());
        assert!(nested.parent().unwrap().is_dir());
    }

    #[test]
    fn test_file_layer_needs_a_file_name() {
        let result = file_layer(Path::new("/"), &config("info", None));
        assert!(matches!(result, Err(CoreError::Logging(LoggingError::InitializationFailure(_)))));
    }
}
