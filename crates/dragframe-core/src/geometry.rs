#![forbid(unsafe_code)]

//! Geometric primitives in CSS pixels.

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A position in CSS pixels.
///
/// Which space (client or document) a point lives in is decided by the call
/// site; [`ScrollOffset`] converts between the two.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Page scroll position (`pageXOffset` / `pageYOffset`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a client-space point into document space.
    #[inline]
    #[must_use]
    pub fn to_document(self, client: Point) -> Point {
        Point::new(client.x + self.x, client.y + self.y)
    }
}

/// Rendered box size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True if either extent is zero (or negative).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Format a pixel length the way CSS expects it (`"12px"`, `"-30.5px"`).
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
