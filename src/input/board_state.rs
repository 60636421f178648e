//! Explicit interaction state: mode, pen, eraser and view.

use super::mode::Mode;
use crate::config::Config;
use crate::draw::{BLACK, Color, ViewState};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Thinnest pen the width control allows.
pub const MIN_PEN_WIDTH: f64 = 1.0;
/// Thickest pen the width control allows.
pub const MAX_PEN_WIDTH: f64 = 20.0;
/// Pen width used when nothing is configured.
pub const DEFAULT_PEN_WIDTH: f64 = 5.0;

/// Smallest eraser square.
pub const MIN_ERASER_SIZE: f64 = 1.0;
/// Largest eraser square.
pub const MAX_ERASER_SIZE: f64 = 50.0;
/// Eraser size used when nothing is configured.
pub const DEFAULT_ERASER_SIZE: f64 = 20.0;

/// Pen applied to newly drawn strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenSettings {
    pub color: Color,
    /// Line width in canvas units (1-20)
    pub width: f64,
}

impl Default for PenSettings {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: DEFAULT_PEN_WIDTH,
        }
    }
}

/// Eraser square used for hit-testing strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EraserSettings {
    /// Side of the square in canvas units (1-50)
    pub size: f64,
}

impl Default for EraserSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_ERASER_SIZE,
        }
    }
}

/// Everything the controller needs to interpret input, in one place.
///
/// Mode exclusivity is structural: a single [`Mode`] value means drawing and
/// erasing can never both be active.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardState {
    pub mode: Mode,
    pub pen: PenSettings,
    pub eraser: EraserSettings,
    pub view: ViewState,
}

impl BoardState {
    /// Builds the initial state from user configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::default();
        state.pen.color = config.pen.default_color.to_color();
        state.set_pen_width(config.pen.default_width);
        state.set_eraser_size(config.eraser.default_size);
        state
    }

    pub fn is_drawing(&self) -> bool {
        self.mode == Mode::Draw
    }

    pub fn is_erasing(&self) -> bool {
        self.mode == Mode::Erase
    }

    /// Turns drawing on (disabling the eraser) or back off to panning.
    pub fn toggle_drawing(&mut self) -> Mode {
        self.mode = if self.mode == Mode::Draw {
            Mode::Pan
        } else {
            Mode::Draw
        };
        debug!("Interaction mode is now {}", self.mode);
        self.mode
    }

    /// Turns erasing on (disabling drawing) or back off to panning.
    pub fn toggle_eraser(&mut self) -> Mode {
        self.mode = if self.mode == Mode::Erase {
            Mode::Pan
        } else {
            Mode::Erase
        };
        debug!("Interaction mode is now {}", self.mode);
        self.mode
    }

    /// Sets the pen width, clamped to the allowed range.
    pub fn set_pen_width(&mut self, width: f64) -> f64 {
        self.pen.width = clamp_setting("pen width", width, MIN_PEN_WIDTH, MAX_PEN_WIDTH);
        self.pen.width
    }

    /// Sets the eraser size, clamped to the allowed range.
    pub fn set_eraser_size(&mut self, size: f64) -> f64 {
        self.eraser.size = clamp_setting("eraser size", size, MIN_ERASER_SIZE, MAX_ERASER_SIZE);
        self.eraser.size
    }
}

fn clamp_setting(name: &str, value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        warn!("Ignoring NaN {name}; using {min}");
        return min;
    }
    if !(min..=max).contains(&value) {
        warn!("Invalid {name} {value:.1}, clamping to {min:.0}-{max:.0} range");
    }
    value.clamp(min, max)
}
