//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which slice of the document is on screen and
//! scrolls just enough to keep the cursor row visible.

use std::ops::Range;

/// Manages the visible portion of a document.
///
/// # Example
///
/// ```
/// use runedit::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 10, 100);
/// assert_eq!(vp.visible_range(), 0..10);
///
/// vp.follow(25);
/// assert_eq!(vp.visible_range(), 16..26);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a new viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Terminal width in columns
    /// * `height` - Rows available for text
    /// * `total_lines` - Total lines in the document
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    /// Get the current scroll offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Get the range of visible lines, clamped to the document.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.total_lines);
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    /// Scroll the minimum amount needed to put `row` on screen.
    pub fn follow(&mut self, row: usize) {
        let height = (self.height as usize).max(1);
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + height {
            self.offset = row + 1 - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Go to the beginning of the document.
    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the total number of lines (e.g., after an edit or undo).
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_top() {
        let vp = Viewport::new(80, 24, 100);
        assert_eq!(vp.offset(), 0);
        assert_eq!(vp.visible_range(), 0..24);
    }

    #[test]
    fn test_visible_range_short_document() {
        let vp = Viewport::new(80, 24, 3);
        assert_eq!(vp.visible_range(), 0..3);
    }

    #[test]
    fn test_follow_row_already_visible_does_not_scroll() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.follow(9);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_follow_down_puts_row_on_last_line() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.follow(10);
        assert_eq!(vp.offset(), 1);
        assert_eq!(vp.visible_range(), 1..11);
    }

    #[test]
    fn test_follow_up_puts_row_on_first_line() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.follow(50);
        vp.follow(20);
        assert_eq!(vp.offset(), 20);
    }

    #[test]
    fn test_resize_keeps_valid_offset() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.follow(99);
        vp.resize(80, 60);
        assert_eq!(vp.offset(), 40);
    }

    #[test]
    fn test_set_total_lines_adjusts_offset() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.follow(99);
        vp.set_total_lines(30);
        assert_eq!(vp.offset(), 6);
    }

    #[test]
    fn test_go_to_top() {
        let mut vp = Viewport::new(80, 10, 100);
        vp.follow(70);
        vp.go_to_top();
        assert_eq!(vp.offset(), 0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn followed_row_is_visible(
                total_lines in 1..10000usize,
                height in 1..100u16,
                rows in prop::collection::vec(0..10000usize, 1..20),
            ) {
                let mut vp = Viewport::new(80, height, total_lines);
                for row in rows {
                    let row = row % total_lines;
                    vp.follow(row);
                    prop_assert!(vp.visible_range().contains(&row));
                }
            }

            #[test]
            fn visible_range_within_bounds(
                total_lines in 0..10000usize,
                height in 1..100u16,
                row in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, total_lines);
                vp.follow(row);

                let range = vp.visible_range();
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= total_lines);
            }
        }
    }
}
