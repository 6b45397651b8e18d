//! The document model and its text boundary.
//!
//! This module handles:
//! - The line-oriented [`Document`] and its undo [`Snapshot`]s
//! - Splitting raw text into lines on load
//! - Writing lines back out with a chosen [`LineEnding`]

mod io;
mod types;

pub use io::{
    DocumentError, LineEnding, parse_lines, read_lines, serialize_lines, write_lines,
};
pub use types::{Document, Snapshot};
