//! Capability interface for the retained-mode 2D scene.
//!
//! The board controller and the persistence adapter only talk to the scene
//! through [`Canvas`], so a rendering backend can plug in its own item store
//! while [`Scene`](super::Scene) serves as the in-memory implementation.

use super::note::{Note, NoteId};
use super::stroke::{Stroke, StrokeId};
use super::view::ViewState;
use crate::util::{Point, Rect};

/// Item storage, hit-testing and view transform of a board surface.
///
/// Implementations must keep notes and strokes in insertion order so that a
/// saved board lists them deterministically.
pub trait Canvas {
    /// Inserts a note on top of everything else.
    fn add_note(&mut self, note: Note) -> NoteId;

    /// Removes a note, returning it if it existed.
    fn remove_note(&mut self, id: NoteId) -> Option<Note>;

    fn note(&self, id: NoteId) -> Option<&Note>;

    fn note_mut(&mut self, id: NoteId) -> Option<&mut Note>;

    /// All notes in insertion order.
    fn notes(&self) -> impl Iterator<Item = (NoteId, &Note)>;

    /// Appends a stroke.
    fn add_stroke(&mut self, stroke: Stroke) -> StrokeId;

    /// Removes a stroke, returning it if it existed.
    fn remove_stroke(&mut self, id: StrokeId) -> Option<Stroke>;

    /// All strokes in insertion order.
    fn strokes(&self) -> impl Iterator<Item = (StrokeId, &Stroke)>;

    /// Top-most note whose rectangle contains `point` (canvas space).
    fn note_at(&self, point: Point) -> Option<NoteId>;

    /// Strokes whose bounding box intersects `area` (canvas space).
    fn strokes_intersecting(&self, area: &Rect) -> Vec<StrokeId>;

    /// Removes every note and stroke.
    fn clear(&mut self);

    /// Applies the view transform used for presentation.
    fn set_view(&mut self, view: &ViewState);

    fn note_count(&self) -> usize {
        self.notes().count()
    }

    fn stroke_count(&self) -> usize {
        self.strokes().count()
    }
}
