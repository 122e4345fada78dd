//! # GLView Core Library (`glview-core`)
//!
//! Foundation crate for GLView, the design-resolution view and touch layer of a
//! 2D game engine. It carries everything the view layer needs that is not view
//! logic itself:
//!
//! - **Error Handling**: [`CoreError`] and the specific [`ConfigError`] and
//!   [`LoggingError`] it wraps.
//! - **Core Data Types**: `f64` geometry ([`Point`], [`Size`], [`Rect`]) and the
//!   [`ResolutionPolicy`] used to fit a design resolution onto a screen.
//! - **Configuration Management**: TOML configuration through [`ConfigLoader`]
//!   and [`CoreConfig`].
//! - **Logging**: `tracing` subscriber setup, console and optional file output.
//!
//! ```rust,ignore
//! use glview_core::config::ConfigLoader;
//! use glview_core::logging::init_logging;
//! use glview_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let core_config = ConfigLoader::load()?;
//!     init_logging(&core_config.logging, false)?;
//!     tracing::info!("GLView core initialized.");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, ViewConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{Point, Rect, ResolutionPolicy, Size};
