//! Configuration loading for GLView.
//!
//! [`ConfigLoader`] locates `config.toml`, deserializes it, applies defaults and
//! validates the result.
//!
//! ```rust,ignore
//! use glview_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => println!("design {}x{}", config.view.design_width, config.view.design_height),
//!     Err(e) => {
//!         glview_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```

use std::fs;
use std::path::Path;

use super::defaults::MAX_TOUCH_CAPACITY;
use crate::config::{CoreConfig, LoggingConfig, ViewConfig};
use crate::error::{ConfigError, CoreError};
use crate::utils::fs as glview_fs;
use crate::utils::paths::{get_app_config_dir, get_app_state_dir};

/// Namespace for configuration loading. The main entry point is [`ConfigLoader::load`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `config.toml` from the application configuration directory.
    ///
    /// A missing or empty file yields the default configuration. The result is
    /// validated either way.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let config_path = get_app_config_dir()?.join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Loads the configuration from an explicit path. A missing file yields the
    /// default configuration; other read failures are errors.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No configuration at {:?}, using defaults.", path);
                String::new()
            }
            Err(e) => {
                return Err(CoreError::Config(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }));
            }
        };
        Self::from_toml_str(&content)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config: CoreConfig = if content.trim().is_empty() {
            CoreConfig::default()
        } else {
            toml::from_str(content).map_err(|e| CoreError::Config(ConfigError::ParseError(e)))?
        };
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// Validates the loaded configuration and normalizes it in place.
    fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        Self::validate_logging_config(&mut config.logging)?;
        Self::validate_view_config(&mut config.view)?;
        Ok(())
    }

    fn validate_logging_config(logging: &mut LoggingConfig) -> Result<(), CoreError> {
        logging.level = normalize_level("level", &logging.level)?;
        if let Some(view_level) = &logging.view_level {
            logging.view_level = Some(normalize_level("view_level", view_level)?);
        }

        let format_lower = logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => {
                logging.format = format_lower;
            }
            _ => {
                return Err(CoreError::Config(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    logging.format
                ))));
            }
        }

        if let Some(path) = &logging.file_path {
            let absolute_path = if path.is_absolute() {
                path.clone()
            } else {
                get_app_state_dir()?.join(path)
            };
            if let Some(parent_dir) = absolute_path.parent() {
                if !parent_dir.exists() {
                    glview_fs::ensure_dir_exists(parent_dir)?;
                }
            }
            logging.file_path = Some(absolute_path);
        }
        Ok(())
    }

    fn validate_view_config(view: &mut ViewConfig) -> Result<(), CoreError> {
        if !view.policy.is_known() {
            return Err(CoreError::Config(ConfigError::ValidationError(
                "view.policy must be one of exact_fit, no_border, show_all".to_string(),
            )));
        }
        if !(view.design_width.is_finite() && view.design_width > 0.0)
            || !(view.design_height.is_finite() && view.design_height > 0.0)
        {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "Design resolution must be positive, got {}x{}",
                view.design_width, view.design_height
            ))));
        }
        if view.max_touches == 0 || view.max_touches > MAX_TOUCH_CAPACITY {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "view.max_touches must be in 1..={}, got {}",
                MAX_TOUCH_CAPACITY, view.max_touches
            ))));
        }
        let trimmed = view.name.trim();
        if trimmed.len() != view.name.len() {
            view.name = trimmed.to_string();
        }
        Ok(())
    }
}

/// Lowercases a log level, rejecting anything `tracing` has no level for.
fn normalize_level(field: &str, value: &str) -> Result<String, CoreError> {
    let lower = value.to_lowercase();
    match lower.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(lower),
        _ => Err(CoreError::Config(ConfigError::ValidationError(format!(
            "Invalid log {}: '{}'. Must be one of trace, debug, info, warn, error.",
            field, value
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResolutionPolicy;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn validation_message(result: Result<CoreConfig, CoreError>) -> String {
        match result {
            Err(CoreError::Config(ConfigError::ValidationError(msg))) => msg,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_content_yields_defaults() {
        let config = ConfigLoader::from_toml_str("   \n").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn test_full_config_is_normalized() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("logs").join("view.log");
        let toml_str = format!(
            r#"
            [logging]
            level = "DEBUG"
            format = "Json"
            file_path = "{}"

            [view]
            name = "  lobby  "
            design_width = 1024.0
            design_height = 768.0
            policy = "no_border"
            max_touches = 10
            "#,
            log_path.display()
        );
        let config = ConfigLoader::from_toml_str(&toml_str).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.file_path, Some(log_path.clone()));
        assert!(log_path.parent().unwrap().is_dir());
        assert_eq!(config.view.name, "lobby");
        assert_eq!(config.view.policy, ResolutionPolicy::NoBorder);
        assert_eq!(config.view.max_touches, 10);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let msg = validation_message(ConfigLoader::from_toml_str("[view]\npolicy = \"unknown\"\n"));
        assert!(msg.contains("view.policy"));
    }

    #[test]
    fn test_zero_design_size_is_rejected() {
        let msg = validation_message(ConfigLoader::from_toml_str("[view]\ndesign_width = 0.0\n"));
        assert!(msg.contains("Design resolution"));
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(32, true)]
    #[case(33, false)]
    fn test_touch_capacity_bounds(#[case] max_touches: usize, #[case] accepted: bool) {
        let result = ConfigLoader::from_toml_str(&format!("[view]\nmax_touches = {}\n", max_touches));
        if accepted {
            assert_eq!(result.unwrap().view.max_touches, max_touches);
        } else {
            assert!(validation_message(result).contains("max_touches"));
        }
    }

    #[test]
    fn test_view_level_is_normalized() {
        let config = ConfigLoader::from_toml_str("[logging]\nlevel = \"warn\"\nview_level = \"TRACE\"\n").unwrap();
        assert_eq!(config.logging.view_level.as_deref(), Some("trace"));
    }

    #[test]
    fn test_invalid_view_level_is_rejected() {
        let msg = validation_message(ConfigLoader::from_toml_str("[logging]\nview_level = \"chatty\"\n"));
        assert!(msg.contains("Invalid log view_level: 'chatty'"), "{}", msg);
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let msg = validation_message(ConfigLoader::from_toml_str("[logging]\nlevel = \"loud\"\n"));
        assert!(msg.contains("Invalid log level"));
    }

    #[test]
    fn test_parse_error() {
        let result = ConfigLoader::from_toml_str("[view\ndesign_width = ");
        assert!(matches!(result, Err(CoreError::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[view]\ndesign_width = 960.0\ndesign_height = 640.0\npolicy = \"exact_fit\"").unwrap();
        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config.view.design_width, 960.0);
        assert_eq!(config.view.policy, ResolutionPolicy::ExactFit);
    }

    #[test]
    fn test_load_from_missing_path_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = ConfigLoader::load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CoreConfig::default());
    }
}
