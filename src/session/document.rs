use crate::draw::{Canvas, Note, NoteFont, Stroke};
use crate::input::PenSettings;
use serde::{Deserialize, Serialize};

/// Indentation used for saved boards.
const INDENT: &[u8] = b"    ";

/// On-disk board: two ordered lists, geometry and text only.
///
/// Pen color and width are deliberately absent, so a reloaded board draws its
/// lines with whatever pen is active at load time. Missing keys read as empty
/// lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardDocument {
    #[serde(default)]
    pub notes: Vec<NoteRecord>,
    #[serde(default)]
    pub lines: Vec<LineRecord>,
}

/// One saved note: text, top-left position and rectangle size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub text: String,
    pub pos: [f64; 2],
    pub size: [f64; 2],
}

/// One saved stroke segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

impl From<&Note> for NoteRecord {
    fn from(note: &Note) -> Self {
        Self {
            text: note.text.clone(),
            pos: note.position.into(),
            size: [note.width, note.height],
        }
    }
}

impl From<&Stroke> for LineRecord {
    fn from(stroke: &Stroke) -> Self {
        Self {
            start: stroke.start.into(),
            end: stroke.end.into(),
        }
    }
}

impl NoteRecord {
    fn to_note(&self, font: &NoteFont) -> Note {
        Note {
            text: self.text.clone(),
            position: self.pos.into(),
            width: self.size[0],
            height: self.size[1],
            font: font.clone(),
        }
    }
}

impl LineRecord {
    fn to_stroke(self, pen: &PenSettings) -> Stroke {
        Stroke::new(self.start.into(), self.end.into(), pen.width, pen.color)
    }
}

impl BoardDocument {
    /// Snapshots every note and stroke on the canvas, in insertion order.
    pub fn capture<C: Canvas>(canvas: &C) -> Self {
        Self {
            notes: canvas.notes().map(|(_, note)| note.into()).collect(),
            lines: canvas.strokes().map(|(_, stroke)| stroke.into()).collect(),
        }
    }

    /// Clears the canvas and rebuilds it from this document.
    ///
    /// Returns the number of notes and strokes inserted.
    pub fn restore<C: Canvas>(
        &self,
        canvas: &mut C,
        pen: &PenSettings,
        font: &NoteFont,
    ) -> (usize, usize) {
        canvas.clear();
        for record in &self.notes {
            canvas.add_note(record.to_note(font));
        }
        for record in &self.lines {
            canvas.add_stroke(record.to_stroke(pen));
        }
        (self.notes.len(), self.lines.len())
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.lines.is_empty()
    }

    /// Serializes as pretty-printed JSON with 4-space indentation.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        Ok(out)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
