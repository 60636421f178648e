use crate::draw::{Canvas, Stroke};
use crate::input::events::{MouseButton, ScrollDirection};
use crate::input::mode::Mode;
use crate::util::{Point, Rect};
use log::{debug, warn};

use super::{BoardController, Gesture};

impl<C: Canvas> BoardController<C> {
    /// Processes a mouse button press at a screen-space position.
    ///
    /// # Behavior
    /// - Left press over a note: selects it and starts dragging it, whatever the mode
    /// - Left press in Draw mode: anchors a new freehand path
    /// - Left press in Erase mode: erases immediately and keeps erasing on move
    /// - Left press in Pan mode: starts scrolling the view
    /// - Right press: selects the note under the pointer for the context menu
    pub fn on_pointer_down(&mut self, button: MouseButton, x: f64, y: f64) {
        if !finite_position(x, y) {
            return;
        }
        let screen = Point::new(x, y);
        let point = self.state.view.to_canvas(screen);

        match button {
            MouseButton::Left => {
                if let Some(id) = self.canvas.note_at(point) {
                    self.selected = Some(id);
                    self.gesture = Gesture::DraggingNote { id, last: point };
                    return;
                }

                self.gesture = match self.state.mode {
                    Mode::Draw => Gesture::Drawing { anchor: point },
                    Mode::Erase => {
                        self.erase_at(point);
                        Gesture::Erasing
                    }
                    Mode::Pan => Gesture::Panning { last: screen },
                };
            }
            MouseButton::Right => {
                self.select_note_at(x, y);
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion at a screen-space position.
    ///
    /// Each move while drawing appends exactly one stroke from the previous
    /// sample to the current one.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !finite_position(x, y) {
            return;
        }
        let screen = Point::new(x, y);
        let point = self.state.view.to_canvas(screen);

        if self.gesture == Gesture::Erasing {
            self.erase_at(point);
            return;
        }

        match &mut self.gesture {
            Gesture::Idle | Gesture::Erasing => {}
            Gesture::Drawing { anchor } => {
                let stroke = Stroke::new(
                    *anchor,
                    point,
                    self.state.pen.width,
                    self.state.pen.color,
                );
                *anchor = point;
                self.canvas.add_stroke(stroke);
                self.needs_redraw = true;
            }
            Gesture::Panning { last } => {
                let (dx, dy) = screen.delta_from(*last);
                *last = screen;
                // Content follows the pointer, so the viewport moves the other way.
                self.state.view.scroll_by(-dx, -dy);
                self.canvas.set_view(&self.state.view);
                self.needs_redraw = true;
            }
            Gesture::DraggingNote { id, last } => {
                let (dx, dy) = point.delta_from(*last);
                *last = point;
                if let Some(note) = self.canvas.note_mut(*id) {
                    note.position.x += dx;
                    note.position.y += dy;
                    self.needs_redraw = true;
                }
            }
        }
    }

    /// Processes a button release; ends any gesture but keeps the current mode.
    pub fn on_pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Zooms one step per wheel event, in or out depending on the delta's sign.
    pub fn on_scroll(&mut self, delta: f64) {
        let Some(direction) = ScrollDirection::from_delta(delta) else {
            return;
        };
        let notches = match direction {
            ScrollDirection::Up => 1,
            ScrollDirection::Down => -1,
        };
        if self.state.view.zoom_by_steps(notches) {
            debug!("Zoom factor is now {:.3}", self.state.view.zoom);
            self.canvas.set_view(&self.state.view);
            self.needs_redraw = true;
        }
    }

    /// Removes every stroke whose bounding box meets the eraser square
    /// centered on a canvas-space point. Returns the number removed.
    pub fn erase_at(&mut self, point: Point) -> usize {
        let area = Rect::centered_square(point, self.state.eraser.size);
        let hits = self.canvas.strokes_intersecting(&area);
        let mut removed = 0;
        for id in hits {
            if self.canvas.remove_stroke(id).is_some() {
                removed += 1;
            }
        }
        if removed > 0 {
            debug!("Eraser removed {removed} strokes");
            self.needs_redraw = true;
        }
        removed
    }
}

/// Pointer samples with NaN or infinite coordinates are dropped.
fn finite_position(x: f64, y: f64) -> bool {
    if x.is_finite() && y.is_finite() {
        true
    } else {
        warn!("Ignoring pointer event at non-finite position ({x}, {y})");
        false
    }
}
