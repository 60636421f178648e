//! Sticky note corkboard: notes, freehand ink and JSON persistence.
//!
//! The [`input::BoardController`] owns the scene (through the
//! [`draw::Canvas`] interface), interprets pointer and scroll input according
//! to the current interaction mode, and saves or loads the whole board via the
//! [`session`] module. Front ends render the scene and feed
//! [`input::BoardCommand`]s back in.

pub mod config;
pub mod draw;
pub mod input;
pub mod session;
pub mod util;

pub use config::Config;
pub use input::{BoardCommand, BoardController};
