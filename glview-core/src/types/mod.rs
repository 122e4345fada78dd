//! Core data types used throughout GLView.
//!
//! - **Geometry**: generic [`geometry::Point`], [`geometry::Size`] and
//!   [`geometry::Rect`], re-exported here as `f64` aliases.
//! - **Display**: [`ResolutionPolicy`], the design-resolution fitting strategy.

pub mod display;
pub mod geometry;

pub use display::ResolutionPolicy;

/// A 2D point with `f64` coordinates. Alias for [`geometry::Point<f64>`].
pub type Point = self::geometry::Point<f64>;
/// A 2D size with `f64` dimensions. Alias for [`geometry::Size<f64>`].
pub type Size = self::geometry::Size<f64>;
/// A 2D rectangle with `f64` coordinates and dimensions. Alias for [`geometry::Rect<f64>`].
pub type Rect = self::geometry::Rect<f64>;
