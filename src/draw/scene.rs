//! In-memory scene holding every note and stroke on the board.

use super::canvas::Canvas;
use super::note::{Note, NoteId};
use super::stroke::{Stroke, StrokeId};
use super::view::ViewState;
use crate::util::{Point, Rect};

/// Default [`Canvas`] implementation backed by two ordered vectors.
///
/// Notes are stacked in insertion order (last = top-most), strokes are kept
/// in the order they were drawn.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    notes: Vec<(NoteId, Note)>,
    strokes: Vec<(StrokeId, Stroke)>,
    next_id: u64,
    view: ViewState,
}

impl Scene {
    /// Creates a new empty scene with the identity view.
    pub fn new() -> Self {
        Self::default()
    }

    /// The view transform last applied by the controller.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.strokes.is_empty()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Canvas for Scene {
    fn add_note(&mut self, note: Note) -> NoteId {
        let id = NoteId(self.allocate_id());
        self.notes.push((id, note));
        id
    }

    fn remove_note(&mut self, id: NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|(note_id, _)| *note_id == id)?;
        Some(self.notes.remove(index).1)
    }

    fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes
            .iter()
            .find(|(note_id, _)| *note_id == id)
            .map(|(_, note)| note)
    }

    fn note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes
            .iter_mut()
            .find(|(note_id, _)| *note_id == id)
            .map(|(_, note)| note)
    }

    fn notes(&self) -> impl Iterator<Item = (NoteId, &Note)> {
        self.notes.iter().map(|(id, note)| (*id, note))
    }

    fn add_stroke(&mut self, stroke: Stroke) -> StrokeId {
        let id = StrokeId(self.allocate_id());
        self.strokes.push((id, stroke));
        id
    }

    fn remove_stroke(&mut self, id: StrokeId) -> Option<Stroke> {
        let index = self
            .strokes
            .iter()
            .position(|(stroke_id, _)| *stroke_id == id)?;
        Some(self.strokes.remove(index).1)
    }

    fn strokes(&self) -> impl Iterator<Item = (StrokeId, &Stroke)> {
        self.strokes.iter().map(|(id, stroke)| (*id, stroke))
    }

    fn note_at(&self, point: Point) -> Option<NoteId> {
        self.notes
            .iter()
            .rev()
            .find(|(_, note)| note.contains(point))
            .map(|(id, _)| *id)
    }

    fn strokes_intersecting(&self, area: &Rect) -> Vec<StrokeId> {
        self.strokes
            .iter()
            .filter(|(_, stroke)| stroke.bounding_box().intersects(area))
            .map(|(id, _)| *id)
            .collect()
    }

    fn clear(&mut self) {
        self.notes.clear();
        self.strokes.clear();
    }

    fn set_view(&mut self, view: &ViewState) {
        self.view = *view;
    }

    fn note_count(&self) -> usize {
        self.notes.len()
    }

    fn stroke_count(&self) -> usize {
        self.strokes.len()
    }
}
