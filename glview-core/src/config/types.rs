//! Configuration data structures for GLView.
//!
//! Populated by deserializing a TOML file. Missing fields take their values
//! from [`super::defaults`]; unknown fields are rejected.

use super::defaults;
use crate::types::ResolutionPolicy;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use glview_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let toml_str = r#"
/// level = "debug"
/// view_level = "trace"
/// file_path = "/var/log/glview.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.view_level.as_deref(), Some("trace"));
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/glview.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level: "trace", "debug", "info", "warn" or "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Level for the view layer (`glview_system`) only, overriding `level` there.
    /// Set it to "trace" to see skipped touch ids and empty batches.
    #[serde(default = "defaults::default_view_log_level")]
    pub view_level: Option<String>,
    /// Optional log file. Relative paths are resolved against the app state directory.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Design resolution, fitting policy and touch capacity of the view.
///
/// ```
/// use glview_core::config::ViewConfig;
/// use glview_core::types::ResolutionPolicy;
///
/// let view: ViewConfig = toml::from_str(r#"
/// design_width = 1024.0
/// design_height = 768.0
/// policy = "no_border"
/// "#).unwrap();
/// assert_eq!(view.policy, ResolutionPolicy::NoBorder);
/// assert_eq!(view.max_touches, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    #[serde(default = "defaults::default_view_name")]
    pub name: String,
    #[serde(default = "defaults::default_design_width")]
    pub design_width: f64,
    #[serde(default = "defaults::default_design_height")]
    pub design_height: f64,
    #[serde(default = "defaults::default_policy")]
    pub policy: ResolutionPolicy,
    /// Fixed for the lifetime of the view. Must be in `1..=32`.
    #[serde(default = "defaults::default_max_touches")]
    pub max_touches: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        defaults::default_view_config()
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_view_config")]
    pub view: ViewConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
            view: defaults::default_view_config(),
        }
    }
}
