// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # Runedit
//!
//! A small terminal text editor built around a line-oriented edit engine.
//!
//! The engine holds the text as an ordered sequence of lines, tracks a
//! cursor that always sits on a valid position, and keeps whole-document
//! snapshots for undo and redo. Literal substring search reports every
//! occurrence, overlapping ones included.
//!
//! ## Architecture
//!
//! The terminal front end uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`editor`]: Edit engine, cursor, and undo/redo history
//! - [`document`]: Line storage, snapshots, and file load/save
//! - [`search`]: Substring search over a document
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults
//! - [`perf`]: Timing scopes and the debug event log

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod perf;
pub mod search;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::{Document, LineEnding};
    pub use crate::editor::{Cursor, Direction, EditorBuffer};
    pub use crate::search::{SearchMatch, SearchResults};
    pub use crate::ui::viewport::Viewport;
}
