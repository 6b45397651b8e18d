//! The editing engine.
//!
//! [`EditorBuffer`] owns a document, a cursor, and an undo history, and is
//! the single entry point for changing any of them.

mod buffer;
mod cursor;
mod history;

pub use buffer::EditorBuffer;
pub use cursor::{Cursor, Direction};
pub use history::History;
