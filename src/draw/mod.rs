//! Board scene model.
//!
//! This module defines the core types placed on the board:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Note`]: yellow text notes with a size class
//! - [`Stroke`]: single ink segments
//! - [`Canvas`]: the capability interface a rendering backend implements
//! - [`Scene`]: the in-memory canvas used by default and in tests

pub mod canvas;
pub mod color;
pub mod font;
pub mod note;
pub mod scene;
pub mod stroke;
pub mod view;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use color::Color;
pub use font::NoteFont;
pub use note::{Note, NoteId, NoteSize};
pub use scene::Scene;
pub use stroke::{Stroke, StrokeId};
pub use view::ViewState;

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
