//! Configuration management for GLView.
//!
//! - [`types`]: the schema ([`CoreConfig`], [`LoggingConfig`], [`ViewConfig`]).
//! - [`defaults`]: default values used for missing fields.
//! - [`loader`]: [`ConfigLoader`], which reads `config.toml` from the
//!   application config directory, parses it and validates it.
//!
//! Validation normalizes log level and format, resolves relative log file paths
//! against the application state directory, and rejects view settings the view
//! layer cannot honor (unknown policy, non-positive design size, touch capacity
//! outside `1..=32`).

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig, ViewConfig};
