//! Interaction mode selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mutually exclusive interaction mode governing how pointer events are read.
///
/// `Pan` is the fallback whenever neither drawing nor erasing is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Dragging the empty board scrolls the view (default)
    #[default]
    Pan,
    /// Dragging lays down ink strokes with the current pen
    Draw,
    /// Dragging removes strokes under the eraser square
    Erase,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::Draw => "draw",
            Self::Erase => "erase",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
