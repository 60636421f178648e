//! Ink stroke definitions.

use super::color::Color;
use crate::util::{Point, Rect};

/// Stable handle to a stroke held by a [`Canvas`](super::Canvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub u64);

/// One drawn line segment, the atomic unit of freehand ink.
///
/// A freehand path is a chain of many short strokes, one per pointer-move
/// event. Zero-length strokes are valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Segment start in canvas space
    pub start: Point,
    /// Segment end in canvas space
    pub end: Point,
    /// Pen width at the time the stroke was drawn
    pub width: f64,
    /// Pen color at the time the stroke was drawn
    pub color: Color,
}

impl Stroke {
    pub fn new(start: Point, end: Point, width: f64, color: Color) -> Self {
        Self {
            start,
            end,
            width,
            color,
        }
    }

    /// Returns the axis-aligned bounding box, expanded by half the pen width.
    ///
    /// This is the box the eraser tests against.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_corners(self.start, self.end).inflate(self.width.max(0.0) / 2.0)
    }

    pub fn length(&self) -> f64 {
        let (dx, dy) = self.end.delta_from(self.start);
        (dx * dx + dy * dy).sqrt()
    }
}
