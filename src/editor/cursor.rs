use crate::document::Document;

/// Cursor position in the editor buffer.
///
/// Valid when `line < line_count` and `col <= line_len(line)`; a column
/// equal to the line length sits after the last char.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (char index within the line).
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self { line: 0, col: 0 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Pull the cursor back inside `document`.
    pub fn clamped(self, document: &Document) -> Self {
        let line = self.line.min(document.line_count().saturating_sub(1));
        let col = self.col.min(document.line_len(line));
        Self { line, col }
    }

    /// Whether the cursor satisfies the bounds of `document`.
    pub fn is_valid_in(self, document: &Document) -> bool {
        self.line < document.line_count() && self.col <= document.line_len(self.line)
    }

    /// The position one step in `direction`.
    ///
    /// Left and right wrap across line boundaries; up and down keep the
    /// column, clamped to the target line. At the edges of the document the
    /// cursor stays put.
    pub fn step(self, direction: Direction, document: &Document) -> Self {
        let Self { line, col } = self.clamped(document);
        match direction {
            Direction::Left if col > 0 => Self::at(line, col - 1),
            Direction::Left if line > 0 => Self::at(line - 1, document.line_len(line - 1)),
            Direction::Right if col < document.line_len(line) => Self::at(line, col + 1),
            Direction::Right if line + 1 < document.line_count() => Self::at(line + 1, 0),
            Direction::Up if line > 0 => Self::at(line - 1, col.min(document.line_len(line - 1))),
            Direction::Down if line + 1 < document.line_count() => {
                Self::at(line + 1, col.min(document.line_len(line + 1)))
            }
            _ => Self::at(line, col),
        }
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines)
    }

    #[test]
    fn test_clamped_pulls_row_and_col_in() {
        let d = doc(&["hello", "hi"]);
        assert_eq!(Cursor::at(7, 9).clamped(&d), Cursor::at(1, 2));
        assert_eq!(Cursor::at(0, 9).clamped(&d), Cursor::at(0, 5));
    }

    #[test]
    fn test_col_at_line_end_is_valid() {
        let d = doc(&["abc"]);
        assert!(Cursor::at(0, 3).is_valid_in(&d));
        assert!(!Cursor::at(0, 4).is_valid_in(&d));
        assert!(!Cursor::at(1, 0).is_valid_in(&d));
    }

    #[test]
    fn test_left_wraps_to_end_of_previous_line() {
        let d = doc(&["hello", "world"]);
        assert_eq!(Cursor::at(1, 0).step(Direction::Left, &d), Cursor::at(0, 5));
    }

    #[test]
    fn test_right_wraps_to_start_of_next_line() {
        let d = doc(&["hello", "world"]);
        assert_eq!(Cursor::at(0, 5).step(Direction::Right, &d), Cursor::at(1, 0));
    }

    #[test]
    fn test_edges_do_not_move() {
        let d = doc(&["ab", "cd"]);
        assert_eq!(Cursor::new().step(Direction::Left, &d), Cursor::new());
        assert_eq!(Cursor::new().step(Direction::Up, &d), Cursor::new());
        assert_eq!(Cursor::at(1, 2).step(Direction::Right, &d), Cursor::at(1, 2));
        assert_eq!(Cursor::at(1, 1).step(Direction::Down, &d), Cursor::at(1, 1));
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let d = doc(&["hello", "hi", "world"]);
        let c = Cursor::at(0, 4).step(Direction::Down, &d);
        assert_eq!(c, Cursor::at(1, 2));
        // The clamped column carries on; there is no remembered column.
        assert_eq!(c.step(Direction::Down, &d), Cursor::at(2, 2));
    }

    #[test]
    fn test_steps_count_chars_not_bytes() {
        let d = doc(&["café"]);
        assert_eq!(Cursor::at(0, 4).step(Direction::Left, &d), Cursor::at(0, 3));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn direction() -> impl Strategy<Value = Direction> {
            prop_oneof![
                Just(Direction::Up),
                Just(Direction::Down),
                Just(Direction::Left),
                Just(Direction::Right),
            ]
        }

        proptest! {
            #[test]
            fn steps_never_leave_the_document(
                lines in prop::collection::vec("[a-zé日]{0,8}", 1..6),
                start_line in 0..10usize,
                start_col in 0..12usize,
                moves in prop::collection::vec(direction(), 0..40),
            ) {
                let d = Document::from_lines(&lines);
                let mut cursor = Cursor::at(start_line, start_col).clamped(&d);
                for direction in moves {
                    cursor = cursor.step(direction, &d);
                    prop_assert!(cursor.is_valid_in(&d));
                }
            }

            #[test]
            fn left_then_right_returns_home(
                lines in prop::collection::vec("[a-z]{0,8}", 1..6),
                line in 0..6usize,
                col in 0..9usize,
            ) {
                let d = Document::from_lines(&lines);
                let cursor = Cursor::at(line, col).clamped(&d);
                prop_assume!(cursor != Cursor::new());
                let back = cursor.step(Direction::Left, &d).step(Direction::Right, &d);
                prop_assert_eq!(back, cursor);
            }
        }
    }
}
