use crate::draw::Canvas;
use crate::input::command::BoardCommand;
use crate::session::BoardFileError;
use log::debug;

use super::BoardController;

impl<C: Canvas> BoardController<C> {
    /// Applies one command from the front end.
    ///
    /// Only `Save` and `Load` can fail; a failed load leaves the board as it was.
    /// A `Save`/`Load` without a path means the file dialog was cancelled and
    /// does nothing.
    pub fn dispatch(&mut self, command: BoardCommand) -> Result<(), BoardFileError> {
        match command {
            BoardCommand::ToggleDrawing => {
                self.toggle_drawing();
            }
            BoardCommand::ToggleEraser => {
                self.toggle_eraser();
            }
            BoardCommand::AddNote { text, size } => {
                self.add_note(text, size);
            }
            BoardCommand::DeleteNote => {
                self.delete_note();
            }
            BoardCommand::SelectNoteAt { x, y } => {
                self.select_note_at(x, y);
            }
            BoardCommand::PointerDown { button, x, y } => self.on_pointer_down(button, x, y),
            BoardCommand::PointerMove { x, y } => self.on_pointer_move(x, y),
            BoardCommand::PointerUp => self.on_pointer_up(),
            BoardCommand::Scroll { delta } => self.on_scroll(delta),
            BoardCommand::SetPenWidth { width } => {
                self.set_pen_width(width);
            }
            BoardCommand::SetEraserSize { size } => {
                self.set_eraser_size(size);
            }
            BoardCommand::SetPenColor { color } => self.set_pen_color(color),
            BoardCommand::MoveNote { note, x, y } => {
                self.move_note(note, x, y);
            }
            BoardCommand::ResizeNote {
                note,
                width,
                height,
            } => {
                self.resize_note(note, width, height);
            }
            BoardCommand::EditNoteText { note, text } => {
                self.edit_note_text(note, text);
            }
            BoardCommand::Save { path } => match path {
                Some(path) => self.save_to(&path)?,
                None => debug!("Save cancelled"),
            },
            BoardCommand::Load { path } => match path {
                Some(path) => self.load_from(&path)?,
                None => debug!("Load cancelled"),
            },
        }
        Ok(())
    }
}
