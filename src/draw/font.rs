//! Font descriptor for note text.

use serde::{Deserialize, Serialize};

/// Default family used for note text when nothing else is configured.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Font size applied to every note restored from a saved board.
pub const DEFAULT_LOAD_FONT_SIZE: f64 = 16.0;

/// Font used to render a note's text.
///
/// The rendering backend resolves the family by name and falls back to its
/// own default when the family is not installed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteFont {
    /// Font family name (e.g., "Arial", "Sans")
    pub family: String,
    /// Font size in points
    pub size: f64,
}

impl NoteFont {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for NoteFont {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_LOAD_FONT_SIZE)
    }
}
