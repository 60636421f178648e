//! Generic pointer event types for cross-backend compatibility.

use serde::{Deserialize, Serialize};

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (draw, erase, pan or drag a note)
    #[default]
    Left,
    /// Right mouse button (selects the note under the pointer for the context menu)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

/// Direction of a single scroll-wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Wheel rotated away from the user (zoom in)
    Up,
    /// Wheel rotated towards the user (zoom out)
    Down,
}

impl ScrollDirection {
    /// Interprets a vertical wheel delta; positive values scroll up.
    ///
    /// Returns `None` for a zero delta (horizontal-only scrolling).
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Up)
        } else if delta < 0.0 {
            Some(Self::Down)
        } else {
            None
        }
    }
}
