//! General utilities for GLView Core.
//!
//! - [`fs`]: filesystem helpers that map I/O failures onto [`crate::error::CoreError`].
//! - [`paths`]: XDG base directories and the application-specific directories
//!   derived from them.

pub mod fs;
pub mod paths;

pub use fs::ensure_dir_exists;
