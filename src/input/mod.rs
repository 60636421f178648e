//! Input handling and interaction state machine.
//!
//! This module translates front-end pointer, scroll and widget events into
//! board mutations. It holds the current [`Mode`], pen and eraser settings and
//! the view transform in one [`BoardState`], and dispatches [`BoardCommand`]s
//! through the [`BoardController`].

pub mod board_state;
pub mod command;
pub mod controller;
pub mod events;
pub mod mode;

// Re-export commonly used types at module level
pub use board_state::{BoardState, EraserSettings, PenSettings};
pub use command::BoardCommand;
pub use controller::{BoardController, Gesture};
pub use events::{MouseButton, ScrollDirection};
pub use mode::Mode;
