//! RGBA color type and predefined color constants.

use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use corkboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color::new(0.0, 0.0, 1.0, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels, as returned by color pickers.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: 1.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Predefined yellow color (R=1.0, G=1.0, B=0.0), the note fill
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Predefined black color (R=0.0, G=0.0, B=0.0), the default pen
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
