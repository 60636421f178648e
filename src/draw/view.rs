//! View transform: zoom factor and pan offset.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 3.0;
/// Multiplier applied per scroll notch.
pub const ZOOM_STEP: f64 = 1.1;

/// How the canvas is currently viewed.
///
/// The transform only affects presentation: notes and strokes are always
/// stored in unscaled canvas space. A screen point maps to canvas space as
/// `offset + screen / zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Uniform scale factor, always within [`MIN_ZOOM`, `MAX_ZOOM`]
    pub zoom: f64,
    /// Canvas-space X coordinate shown at the view's left edge
    pub offset_x: f64,
    /// Canvas-space Y coordinate shown at the view's top edge
    pub offset_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewState {
    /// Maps a screen-space point into canvas space.
    pub fn to_canvas(&self, screen: Point) -> Point {
        Point::new(
            self.offset_x + screen.x / self.zoom,
            self.offset_y + screen.y / self.zoom,
        )
    }

    /// Maps a canvas-space point into screen space.
    pub fn to_screen(&self, canvas: Point) -> Point {
        Point::new(
            (canvas.x - self.offset_x) * self.zoom,
            (canvas.y - self.offset_y) * self.zoom,
        )
    }

    /// Multiplies (`notches > 0`) or divides (`notches < 0`) the zoom by
    /// [`ZOOM_STEP`] once per notch, then clamps.
    ///
    /// Returns `true` if the zoom factor changed.
    pub fn zoom_by_steps(&mut self, notches: i32) -> bool {
        let previous = self.zoom;
        let factor = ZOOM_STEP.powi(notches);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        (self.zoom - previous).abs() > f64::EPSILON
    }

    /// Scrolls the viewport by a screen-space delta.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx / self.zoom;
        self.offset_y += dy / self.zoom;
    }

    /// Clamps values that may come from a hand-edited or restored state.
    pub fn sanitize(&mut self) {
        if !self.zoom.is_finite() {
            self.zoom = 1.0;
        }
        self.zoom = self.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if !self.offset_x.is_finite() {
            self.offset_x = 0.0;
        }
        if !self.offset_y.is_finite() {
            self.offset_y = 0.0;
        }
    }
}
