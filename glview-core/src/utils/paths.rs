//! XDG Base Directory and application-specific path resolution.
//!
//! Relies on the `directories-next` crate. Application directories are derived
//! from the `QUALIFIER`/`ORGANIZATION`/`APPLICATION` triple below; on Linux the
//! config directory resolves to something like `~/.config/glview`.
//!
//! All functions return [`CoreError::Config`] wrapping
//! [`ConfigError::DirectoryUnavailable`] when the directory cannot be determined
//! (typically because no home directory is known).

use crate::error::{ConfigError, CoreError};
use directories_next::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "GLView";
const APPLICATION: &str = "glview";

/// Returns the base directory for user-specific state files
/// (`$XDG_STATE_HOME`, `~/.local/state` on Linux).
pub fn get_state_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| {
            #[cfg(target_os = "linux")]
            {
                match std::env::var("XDG_STATE_HOME") {
                    Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
                    _ => dirs.home_dir().join(".local/state"),
                }
            }
            #[cfg(not(target_os = "linux"))]
            {
                // directories-next has no state dir outside XDG platforms
                dirs.data_local_dir().to_path_buf()
            }
        })
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "State Base".to_string(),
            })
        })
}

/// Returns the application-specific configuration directory, where
/// `config.toml` is looked up.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "App Config".to_string(),
            })
        })
}

/// Returns the application-specific state directory. Relative log file paths
/// from the configuration are resolved against it.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    get_state_base_dir().map(|base_state| base_state.join(APPLICATION))
}
