//! Default configuration values for GLView Core.
//!
//! Used by `serde`'s `default` attribute in the configuration structures when a
//! value is not specified in the configuration file.

use crate::config::{LoggingConfig, ViewConfig};
use crate::types::ResolutionPolicy;
use std::path::PathBuf;

/// Number of touch slots tracked when the configuration does not say otherwise.
pub const DEFAULT_MAX_TOUCHES: usize = 5;

/// Upper bound on touch slots; the occupancy mask is a `u32`.
pub const MAX_TOUCH_CAPACITY: usize = 32;

pub(crate) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        view_level: default_view_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_view_log_level() -> Option<String> {
    None // The view layer follows `level`
}

pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None // No log file by default
}

pub(crate) fn default_log_format() -> String {
    "text".to_string()
}

pub(crate) fn default_view_config() -> ViewConfig {
    ViewConfig {
        name: default_view_name(),
        design_width: default_design_width(),
        design_height: default_design_height(),
        policy: default_policy(),
        max_touches: default_max_touches(),
    }
}

pub(crate) fn default_view_name() -> String {
    "glview".to_string()
}

pub(crate) fn default_design_width() -> f64 {
    480.0
}

pub(crate) fn default_design_height() -> f64 {
    320.0
}

pub(crate) fn default_policy() -> ResolutionPolicy {
    ResolutionPolicy::ShowAll
}

pub(crate) fn default_max_touches() -> usize {
    DEFAULT_MAX_TOUCHES
}
