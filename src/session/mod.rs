//! Board persistence (save/load) support.
//!
//! Converts the scene into the flat JSON document (`notes` + `lines`), writes
//! it to disk atomically with locking, and rebuilds a scene from a document.
//! Save and load are whole-board, all-or-nothing operations.

mod document;
mod error;
mod storage;

pub use document::{BoardDocument, LineRecord, NoteRecord};
pub use error::BoardFileError;
pub use storage::{BoardInspection, inspect_board, load_board, save_board};
