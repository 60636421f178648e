//! Utility functions for colors and canvas-space geometry.
//!
//! This module provides:
//! - Color name lookups used by the configuration file
//! - [`Point`] and [`Rect`] helpers used for hit-testing notes and strokes

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A position in either screen or canvas space, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn delta_from(self, other: Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Axis-aligned rectangle in canvas space.
///
/// Width and height are never negative; zero-sized rectangles are allowed so
/// degenerate geometry can still be hit-tested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Builds the smallest rectangle covering both corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self {
            x: min_x,
            y: min_y,
            width: a.x.max(b.x) - min_x,
            height: a.y.max(b.y) - min_y,
        }
    }

    /// Square of side `side` centered on `center`.
    pub fn centered_square(center: Point, side: f64) -> Self {
        let half = side.max(0.0) / 2.0;
        Self {
            x: center.x - half,
            y: center.y - half,
            width: half * 2.0,
            height: half * 2.0,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Grows the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    /// Edge-inclusive point containment.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Edge-inclusive overlap test; rectangles that only touch count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}
