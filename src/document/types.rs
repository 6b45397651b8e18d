//! Core document types.

use ropey::{Rope, RopeSlice};

/// An editable text document: an ordered sequence of lines.
///
/// Lines live in a single rope, separated by `\n` and with no trailing
/// terminator. An empty rope is one empty line, so a document can never
/// have zero lines. Rows and columns are char indices (Unicode scalar
/// values), never byte offsets.
///
/// Mutation is crate-private: outside code edits a document through
/// [`EditorBuffer`](crate::editor::EditorBuffer), which keeps the cursor
/// and history consistent with it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Create a document holding a single empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from a sequence of lines.
    ///
    /// Lines must not carry their terminators. A line that still contains
    /// `\n` is split there. An empty sequence yields one empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        Self {
            rope: Rope::from_str(&text),
        }
    }

    /// Number of lines. Always at least one.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of a line in chars, excluding the separator.
    ///
    /// Rows past the end report zero.
    pub fn line_len(&self, row: usize) -> usize {
        self.line_slice(row).map_or(0, |line| content_len(&line))
    }

    /// The char at `(row, col)`, or `None` when the position is at or past
    /// the end of the line.
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        if col >= self.line_len(row) {
            return None;
        }
        Some(self.rope.char(self.rope.line_to_char(row) + col))
    }

    /// Content of a line without its separator.
    pub fn line(&self, row: usize) -> Option<String> {
        let line = self.line_slice(row)?;
        Some(line.chars().take(content_len(&line)).collect())
    }

    /// Content of a line as chars, for column-indexed scanning.
    pub fn line_chars(&self, row: usize) -> Vec<char> {
        self.line_slice(row).map_or_else(Vec::new, |line| {
            line.chars().take(content_len(&line)).collect()
        })
    }

    /// All lines, in order.
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|row| self.line(row))
            .collect()
    }

    // --- Crate-private mutation ---

    /// Insert `ch` before column `col` of `row`.
    pub(crate) fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        let idx = self.char_idx(row, col);
        self.rope.insert_char(idx, ch);
    }

    /// Split `row` at `col`; the tail becomes a new line right after it.
    pub(crate) fn split_line(&mut self, row: usize, col: usize) {
        let idx = self.char_idx(row, col);
        self.rope.insert_char(idx, '\n');
    }

    /// Remove the char at `(row, col)`. Returns `false` if there is none.
    pub(crate) fn remove_char(&mut self, row: usize, col: usize) -> bool {
        if col >= self.line_len(row) {
            return false;
        }
        let idx = self.char_idx(row, col);
        self.rope.remove(idx..=idx);
        true
    }

    /// Append `row` onto the end of the previous line and drop it.
    ///
    /// Returns the length the previous line had before the merge, or
    /// `None` for the first row (or a row past the end).
    pub(crate) fn join_with_previous(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.line_count() {
            return None;
        }
        let prev_len = self.line_len(row - 1);
        let separator = self.rope.line_to_char(row) - 1;
        self.rope.remove(separator..=separator);
        Some(prev_len)
    }

    // --- Private helpers ---

    fn line_slice(&self, row: usize) -> Option<RopeSlice<'_>> {
        (row < self.rope.len_lines()).then(|| self.rope.line(row))
    }

    /// Rope char index of `(row, col)`, with `col` clamped to the line.
    fn char_idx(&self, row: usize, col: usize) -> usize {
        self.rope.line_to_char(row) + col.min(self.line_len(row))
    }
}

/// Line length with a trailing `\n` discounted.
fn content_len(line: &RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len > 0 && line.char(len - 1) == '\n' {
        len - 1
    } else {
        len
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("lines", &self.lines())
            .finish()
    }
}

/// A frozen copy of a [`Document`] kept on the undo or redo stack.
///
/// Backed by a rope clone, which shares nodes copy-on-write: editing the
/// live document afterwards never shows through the snapshot.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    document: Document,
}

impl Snapshot {
    /// Capture the current state of `document`.
    pub fn of(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }

    /// The captured document.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Turn the snapshot back into a live document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Snapshot")
            .field(&format_args!("{} lines", self.document.line_count()))
            .finish()
    }
}
