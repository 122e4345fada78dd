//! Geometric primitives: points, sizes and rectangles.
//!
//! All three are generic over the numeric type so the same code serves integer
//! pixel rectangles and `f64` design-space coordinates. The view layer works in
//! `f64` exclusively through the aliases in [`crate::types`].

use num_traits::{Num, Zero};
use serde::{Deserialize, Serialize};
use std::ops::Sub;

// --- Generic Point<T> ---

/// Represents a 2D point with generic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Point<T: Num + Copy> {
    /// The x-coordinate of the point.
    pub x: T,
    /// The y-coordinate of the point.
    pub y: T,
}

impl<T: Num + Copy> Point<T> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

impl Point<f64> {
    /// The origin (0.0, 0.0).
    pub const ZERO: Point<f64> = Point::new(0.0, 0.0);
}

impl<T: Num + Copy + Sub<Output = T>> Sub for Point<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// --- Generic Size<T> ---

/// Represents a 2D size (width and height) with generic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Size<T: Num + Copy> {
    /// The width component of the size.
    pub width: T,
    /// The height component of the size.
    pub height: T,
}

impl<T: Num + Copy> Size<T> {
    /// Creates a new size with the given width and height.
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    /// Checks if the area is zero (width or height is zero).
    pub fn is_empty(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.width.is_zero() || self.height.is_zero()
    }

    /// Checks if the width and height are non-negative.
    pub fn is_valid(&self) -> bool
    where
        T: PartialOrd + Zero,
    {
        self.width >= T::zero() && self.height >= T::zero()
    }
}

impl Size<f64> {
    /// A size of (0.0, 0.0).
    pub const ZERO: Size<f64> = Size::new(0.0, 0.0);
}

// --- Generic Rect<T> ---

/// Represents a 2D rectangle defined by an origin point and a size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Rect<T: Num + Copy> {
    /// The origin point of the rectangle.
    pub origin: Point<T>,
    /// The size (width and height) of the rectangle.
    pub size: Size<T>,
}

impl<T: Num + Copy> Rect<T> {
    /// Creates a new rectangle from individual coordinate and dimension values.
    pub const fn from_coords(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }
}

impl Rect<f64> {
    /// A rectangle at (0.0, 0.0) with size (0.0, 0.0).
    pub const ZERO: Rect<f64> = Rect::from_coords(0.0, 0.0, 0.0, 0.0);
}
