mod actions;
mod core;
mod pointer;
#[cfg(test)]
mod tests;

pub use self::core::{BoardController, Gesture};
