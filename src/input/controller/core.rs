//! Board controller state and note/tool operations.

use crate::config::Config;
use crate::draw::{Canvas, Color, Note, NoteFont, NoteId, NoteSize, Scene, ViewState};
use crate::input::board_state::BoardState;
use crate::input::mode::Mode;
use crate::session::{self, BoardDocument, BoardFileError};
use crate::util::Point;
use log::{debug, info, warn};
use std::path::Path;

/// Gesture in progress between a pointer press and its release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// No button held
    Idle,
    /// Scrolling the view; `last` is in screen space
    Panning { last: Point },
    /// Laying down ink; `anchor` is the last sampled canvas point
    Drawing { anchor: Point },
    /// Eraser held down
    Erasing,
    /// Moving a note; `last` is in canvas space
    DraggingNote { id: NoteId, last: Point },
}

/// Owns the board scene and interprets user input against it.
///
/// All mutation happens synchronously through the methods here or through
/// [`BoardController::dispatch`]. After a call, `needs_redraw` tells the front
/// end whether the scene or view changed.
pub struct BoardController<C: Canvas = Scene> {
    pub(super) canvas: C,
    pub(super) state: BoardState,
    pub(super) gesture: Gesture,
    pub(super) selected: Option<NoteId>,
    /// Family used for notes created with "add note"
    pub(super) note_family: String,
    /// Font given to every note restored from a file
    pub(super) load_font: NoteFont,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl BoardController<Scene> {
    /// Creates a controller over an empty in-memory scene using configured defaults.
    pub fn from_config(config: &Config) -> Self {
        Self::with_canvas(
            Scene::new(),
            BoardState::from_config(config),
            NoteFont::new(config.notes.font_family.clone(), config.notes.load_font_size),
        )
    }
}

impl Default for BoardController<Scene> {
    fn default() -> Self {
        Self::with_canvas(Scene::new(), BoardState::default(), NoteFont::default())
    }
}

impl<C: Canvas> BoardController<C> {
    /// Creates a controller over an arbitrary canvas backend.
    ///
    /// `load_font` is the fixed font for restored notes; its family is also
    /// used for newly added notes.
    pub fn with_canvas(mut canvas: C, mut state: BoardState, load_font: NoteFont) -> Self {
        state.view.sanitize();
        canvas.set_view(&state.view);
        Self {
            canvas,
            state,
            gesture: Gesture::Idle,
            selected: None,
            note_family: load_font.family.clone(),
            load_font,
            needs_redraw: true,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn view(&self) -> &ViewState {
        &self.state.view
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn selected_note(&self) -> Option<NoteId> {
        self.selected
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn is_erasing(&self) -> bool {
        self.state.is_erasing()
    }

    // ------------------------------------------------------------------
    // Mode and tool settings
    // ------------------------------------------------------------------

    /// Toggles draw mode; turning it on disables the eraser.
    pub fn toggle_drawing(&mut self) -> Mode {
        self.gesture = Gesture::Idle;
        self.state.toggle_drawing()
    }

    /// Toggles erase mode; turning it on disables drawing.
    pub fn toggle_eraser(&mut self) -> Mode {
        self.gesture = Gesture::Idle;
        self.state.toggle_eraser()
    }

    pub fn set_pen_width(&mut self, width: f64) -> f64 {
        self.state.set_pen_width(width)
    }

    pub fn set_eraser_size(&mut self, size: f64) -> f64 {
        self.state.set_eraser_size(size)
    }

    /// Applies the color dialog result. `None` (cancelled) keeps the current pen.
    ///
    /// Only strokes drawn afterwards use the new color.
    pub fn set_pen_color(&mut self, color: Option<Color>) {
        match color {
            Some(color) => {
                debug!("Pen color changed to {:?}", color);
                self.state.pen.color = color;
            }
            None => debug!("Color selection cancelled; keeping current pen"),
        }
    }

    // ------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------

    /// Adds a note of the given size class at the default placement.
    pub fn add_note(&mut self, text: impl Into<String>, size: NoteSize) -> NoteId {
        let note = Note::with_size(text, size, &self.note_family);
        let id = self.canvas.add_note(note);
        debug!("Added {} note {:?}", size, id);
        self.needs_redraw = true;
        id
    }

    /// Selects the note under a screen-space point for the context menu.
    ///
    /// Clears the selection when the point is over empty board.
    pub fn select_note_at(&mut self, x: f64, y: f64) -> Option<NoteId> {
        let point = self.state.view.to_canvas(Point::new(x, y));
        self.selected = self.canvas.note_at(point);
        self.selected
    }

    /// Deletes the currently selected note. No-op when nothing is selected.
    pub fn delete_note(&mut self) -> Option<Note> {
        let id = self.selected.take()?;
        if let Gesture::DraggingNote { id: dragged, .. } = self.gesture {
            if dragged == id {
                self.gesture = Gesture::Idle;
            }
        }
        let removed = self.canvas.remove_note(id);
        if removed.is_some() {
            debug!("Deleted note {:?}", id);
            self.needs_redraw = true;
        }
        removed
    }

    /// Moves a note's top-left corner to a canvas-space position.
    ///
    /// Non-finite coordinates are rejected so the board stays saveable.
    pub fn move_note(&mut self, id: NoteId, x: f64, y: f64) -> bool {
        if !(x.is_finite() && y.is_finite()) {
            warn!("Rejecting note position ({x}, {y}); coordinates must be finite");
            return false;
        }
        match self.canvas.note_mut(id) {
            Some(note) => {
                note.position = Point::new(x, y);
                self.needs_redraw = true;
                true
            }
            None => false,
        }
    }

    /// Resizes a note. Non-positive or non-finite sizes are rejected.
    pub fn resize_note(&mut self, id: NoteId, width: f64, height: f64) -> bool {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            warn!("Rejecting note size {width}x{height}; both sides must be positive");
            return false;
        }
        match self.canvas.note_mut(id) {
            Some(note) => {
                note.width = width;
                note.height = height;
                self.needs_redraw = true;
                true
            }
            None => false,
        }
    }

    /// Replaces a note's text, as the in-place editor does on each keystroke.
    pub fn edit_note_text(&mut self, id: NoteId, text: impl Into<String>) -> bool {
        match self.canvas.note_mut(id) {
            Some(note) => {
                note.text = text.into();
                self.needs_redraw = true;
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Captures the board as a saveable document.
    pub fn document(&self) -> BoardDocument {
        BoardDocument::capture(&self.canvas)
    }

    /// Replaces the whole board with the document's contents.
    ///
    /// Strokes are rendered with the pen as configured now; notes get the
    /// fixed load font.
    pub fn load_document(&mut self, document: &BoardDocument) {
        self.gesture = Gesture::Idle;
        self.selected = None;
        let (notes, lines) = document.restore(&mut self.canvas, &self.state.pen, &self.load_font);
        debug!("Board replaced with {notes} notes and {lines} lines");
        self.needs_redraw = true;
    }

    /// Writes the board to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), BoardFileError> {
        session::save_board(path, &self.document())
    }

    /// Replaces the board with the one stored at `path`.
    ///
    /// On error the current board is left untouched.
    pub fn load_from(&mut self, path: &Path) -> Result<(), BoardFileError> {
        let document = session::load_board(path)?;
        self.load_document(&document);
        info!(
            "Loaded board from {} ({} notes, {} lines)",
            path.display(),
            self.canvas.note_count(),
            self.canvas.stroke_count()
        );
        Ok(())
    }
}
