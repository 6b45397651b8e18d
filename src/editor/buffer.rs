use crate::document::{Document, Snapshot, parse_lines};
use crate::search::{SearchMatch, find_matches};

use super::{Cursor, Direction, History};

/// An editing session: a document, its cursor, and its undo history.
///
/// This is the only thing that mutates a [`Document`]. Every operation
/// that changes content records a snapshot first, then edits, then moves
/// the cursor; every operation leaves the cursor inside the document.
/// Sessions share nothing, so independent sessions can live side by side.
#[derive(Default)]
pub struct EditorBuffer {
    document: Document,
    cursor: Cursor,
    history: History,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(parse_lines(text))
    }

    /// Create a buffer from already-split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            document: Document::from_lines(lines),
            ..Self::default()
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cap the undo depth.
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history = History::with_limit(limit);
        self
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The live document.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.document.line_count()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        self.document.line(line_idx)
    }

    /// Length of a line in chars.
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.document.line_len(line_idx)
    }

    pub fn char_at(&self, line_idx: usize, col: usize) -> Option<char> {
        self.document.char_at(line_idx, col)
    }

    /// All lines of the buffer.
    pub fn lines(&self) -> Vec<String> {
        self.document.lines()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Insert a character at the cursor position.
    ///
    /// A `'\n'` splits the line instead, since lines never hold separators.
    /// A `'\r'` is ignored: a line ending in one would lose it on reload.
    pub fn insert_char(&mut self, ch: char) {
        match ch {
            '\n' => return self.insert_newline(),
            '\r' => return,
            _ => {}
        }
        self.record_undo();
        self.document
            .insert_char(self.cursor.line, self.cursor.col, ch);
        self.cursor.col += 1;
        self.dirty = true;
    }

    /// Split the current line at the cursor (Enter key).
    ///
    /// The text from the cursor onward moves to a new line below, and the
    /// cursor goes to the start of that line.
    pub fn insert_newline(&mut self) {
        self.record_undo();
        self.document.split_line(self.cursor.line, self.cursor.col);
        self.cursor = Cursor::at(self.cursor.line + 1, 0);
        self.dirty = true;
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// At column 0 the current line is merged onto the previous one. At the
    /// very start of the document nothing happens and no history is
    /// recorded. Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        let Cursor { line, col } = self.cursor;
        if col == 0 && line == 0 {
            return false;
        }

        self.record_undo();
        if col == 0 {
            // Join with previous line
            if let Some(prev_len) = self.document.join_with_previous(line) {
                self.cursor = Cursor::at(line - 1, prev_len);
            }
        } else if self.document.remove_char(line, col - 1) {
            self.cursor.col -= 1;
        }
        self.dirty = true;
        true
    }

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.step(direction, &self.document);
    }

    /// Move cursor to the beginning of the line (Home).
    pub const fn move_home(&mut self) {
        self.cursor.col = 0;
    }

    /// Move cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.line);
    }

    /// Move cursor to a specific line and column, clamped to the document.
    pub fn move_to(&mut self, line: usize, col: usize) {
        self.cursor = Cursor::at(line, col).clamped(&self.document);
    }

    /// Move the cursor onto the start of a search match.
    pub fn jump_to(&mut self, found: SearchMatch) {
        self.move_to(found.row, found.col);
    }

    /// Move cursor to the start of the buffer (Ctrl+Home).
    pub const fn move_to_start(&mut self) {
        self.cursor = Cursor::new();
    }

    /// Move cursor to the end of the buffer (Ctrl+End).
    pub fn move_to_end(&mut self) {
        let last_line = self.line_count().saturating_sub(1);
        self.cursor = Cursor::at(last_line, self.line_len(last_line));
    }

    /// Replace the whole document, e.g. after reading a file.
    ///
    /// The replacement is undoable. The cursor returns to the origin and
    /// the buffer counts as clean, since it now matches its source.
    pub fn load_document<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.record_undo();
        self.document = Document::from_lines(lines);
        self.cursor = Cursor::new();
        self.dirty = false;
        tracing::debug!(lines = self.document.line_count(), "document loaded");
    }

    /// Undo the most recent edit.
    ///
    /// Returns `false` when there is nothing to undo. The cursor returns to
    /// the origin of the restored document.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(&self.document) else {
            return false;
        };
        self.restore(previous);
        true
    }

    /// Redo the most recently undone edit.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo(&self.document) else {
            return false;
        };
        self.restore(next);
        true
    }

    /// Find every occurrence of `query`, in document order.
    pub fn find(&self, query: &str) -> Vec<SearchMatch> {
        find_matches(&self.document, query)
    }

    // --- Private helpers ---

    fn record_undo(&mut self) {
        self.history.record(Snapshot::of(&self.document));
    }

    fn restore(&mut self, document: Document) {
        self.document = document;
        self.cursor = Cursor::new();
        self.dirty = true;
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "document",
                &format_args!("Document({} lines)", self.document.line_count()),
            )
            .field("cursor", &self.cursor)
            .field("undo_depth", &self.history.undo_depth())
            .field("redo_depth", &self.history.redo_depth())
            .field("dirty", &self.dirty)
            .finish()
    }
}
