//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::font::{DEFAULT_FONT_FAMILY, DEFAULT_LOAD_FONT_SIZE};
use crate::input::board_state::{DEFAULT_ERASER_SIZE, DEFAULT_PEN_WIDTH};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pen defaults applied when the board opens.
///
/// The width and color can still be changed at runtime from the toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PenConfig {
    /// Default pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default)]
    pub default_color: ColorSpec,

    /// Default pen width (valid range: 1.0 - 20.0)
    #[serde(default = "default_pen_width")]
    pub default_width: f64,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            default_color: ColorSpec::default(),
            default_width: default_pen_width(),
        }
    }
}

/// Eraser defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EraserConfig {
    /// Side of the eraser square in canvas units (valid range: 1.0 - 50.0)
    #[serde(default = "default_eraser_size")]
    pub default_size: f64,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            default_size: default_eraser_size(),
        }
    }
}

/// Note text settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NoteConfig {
    /// Font family used for note text
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size given to every note restored from a file (valid range: 6.0 - 72.0)
    #[serde(default = "default_load_font_size")]
    pub load_font_size: f64,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            load_font_size: default_load_font_size(),
        }
    }
}

fn default_pen_width() -> f64 {
    DEFAULT_PEN_WIDTH
}

fn default_eraser_size() -> f64 {
    DEFAULT_ERASER_SIZE
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_load_font_size() -> f64 {
    DEFAULT_LOAD_FONT_SIZE
}
