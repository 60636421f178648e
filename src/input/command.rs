//! Commands a front end dispatches into the board controller.

use super::events::MouseButton;
use crate::draw::{Color, NoteId, NoteSize};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One user action, decoupled from whatever widget produced it.
///
/// Pointer coordinates are in screen (view) space. Commands serialize as JSON
/// objects tagged by a `command` field, e.g.
/// `{"command": "add_note", "text": "Buy milk", "size": "small"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum BoardCommand {
    /// Enter draw mode, or fall back to pan if already drawing
    ToggleDrawing,
    /// Enter erase mode, or fall back to pan if already erasing
    ToggleEraser,
    AddNote {
        #[serde(default)]
        text: String,
        #[serde(default)]
        size: NoteSize,
    },
    /// Delete the note picked by the last context-menu selection
    DeleteNote,
    /// Right-click selection for the context menu
    SelectNoteAt { x: f64, y: f64 },
    PointerDown {
        #[serde(default)]
        button: MouseButton,
        x: f64,
        y: f64,
    },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    /// Vertical wheel delta; positive zooms in
    Scroll { delta: f64 },
    SetPenWidth { width: f64 },
    SetEraserSize { size: f64 },
    /// Result of the color dialog; `None` when the user cancelled
    SetPenColor {
        #[serde(default)]
        color: Option<Color>,
    },
    MoveNote { note: NoteId, x: f64, y: f64 },
    ResizeNote {
        note: NoteId,
        width: f64,
        height: f64,
    },
    EditNoteText { note: NoteId, text: String },
    /// Save to the picked file; `None` when the dialog was cancelled
    Save {
        #[serde(default)]
        path: Option<PathBuf>,
    },
    /// Load from the picked file; `None` when the dialog was cancelled
    Load {
        #[serde(default)]
        path: Option<PathBuf>,
    },
}
