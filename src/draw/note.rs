//! Sticky note definitions.

use super::color::{Color, YELLOW};
use super::font::NoteFont;
use crate::util::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fill color shared by every note.
pub const NOTE_FILL: Color = YELLOW;

/// Distance between the note's top-left corner and its text.
pub const TEXT_INSET: f64 = 5.0;

/// Text shown when a note is added without any content.
pub const PLACEHOLDER_TEXT: &str = "New Note";

/// Canvas position where newly added notes appear.
pub const DEFAULT_NOTE_POSITION: Point = Point::new(0.0, 0.0);

/// Stable handle to a note held by a [`Canvas`](super::Canvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

/// Size class picked when adding a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl NoteSize {
    /// Width and height of a freshly created note of this size.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::Small => (150.0, 150.0),
            Self::Normal => (200.0, 200.0),
            Self::Large => (250.0, 250.0),
        }
    }

    /// Font size used for the text of a freshly created note of this size.
    pub fn font_size(self) -> f64 {
        match self {
            Self::Small => 12.0,
            Self::Normal => 14.0,
            Self::Large => 18.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Normal => "normal",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for NoteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A movable, resizable, editable text box on the board.
///
/// Position and size are stored in unscaled canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Live-editable text content
    pub text: String,
    /// Top-left corner in canvas space
    pub position: Point,
    /// Rectangle width
    pub width: f64,
    /// Rectangle height
    pub height: f64,
    /// Font used for the text
    pub font: NoteFont,
}

impl Note {
    /// Builds a note of the given size class at the default placement.
    ///
    /// Empty text is replaced with [`PLACEHOLDER_TEXT`].
    pub fn with_size(text: impl Into<String>, size: NoteSize, family: &str) -> Self {
        let mut text = text.into();
        if text.is_empty() {
            text = PLACEHOLDER_TEXT.to_string();
        }
        let (width, height) = size.dimensions();
        Self {
            text,
            position: DEFAULT_NOTE_POSITION,
            width,
            height,
            font: NoteFont::new(family, size.font_size()),
        }
    }

    /// The note's rectangle in canvas space.
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.position.x,
            y: self.position.y,
            width: self.width.max(0.0),
            height: self.height.max(0.0),
        }
    }

    /// Wrap width for the text, leaving [`TEXT_INSET`] on both sides.
    pub fn text_width(&self) -> f64 {
        (self.width - TEXT_INSET * 2.0).max(0.0)
    }

    /// Where the text block starts in canvas space.
    pub fn text_origin(&self) -> Point {
        Point::new(self.position.x + TEXT_INSET, self.position.y + TEXT_INSET)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    pub fn fill(&self) -> Color {
        NOTE_FILL
    }
}
