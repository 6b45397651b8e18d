//! Search functionality.
//!
//! Provides literal substring search over a [`Document`]:
//! - [`find_matches`]: every occurrence, overlapping ones included
//! - [`SearchResults`]: a match list with a current position that wraps
//!   around in both directions

use crate::document::Document;

/// Start of one occurrence of a query.
///
/// Ordering is row-major, then by column, which is the order
/// [`find_matches`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchMatch {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based char column where the match starts.
    pub col: usize,
}

impl SearchMatch {
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Find every occurrence of `query` in `document`.
///
/// Each line is scanned one char at a time, so overlapping occurrences are
/// all reported: `"aa"` in `"aaa"` matches at columns 0 and 1. Matches
/// never span lines. An empty query matches nothing.
pub fn find_matches(document: &Document, query: &str) -> Vec<SearchMatch> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let _scope = crate::perf::scope("search.find_matches");
    let mut matches = Vec::new();
    for row in 0..document.line_count() {
        let haystack = document.line_chars(row);
        matches.extend(
            haystack
                .windows(needle.len())
                .enumerate()
                .filter(|(_, window)| *window == needle.as_slice())
                .map(|(col, _)| SearchMatch::at(row, col)),
        );
    }
    tracing::debug!(query_chars = needle.len(), matches = matches.len(), "search");
    matches
}

/// Matches for one query plus a current position among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    query: String,
    matches: Vec<SearchMatch>,
    current: Option<usize>,
}

impl SearchResults {
    /// Run `query` over `document`. The first match, if any, is current.
    pub fn new(document: &Document, query: &str) -> Self {
        let matches = find_matches(document, query);
        let current = (!matches.is_empty()).then_some(0);
        Self {
            query: query.to_string(),
            matches,
            current,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Query length in chars, for highlighting.
    pub fn query_len(&self) -> usize {
        self.query.chars().count()
    }

    /// The current match.
    pub fn current(&self) -> Option<SearchMatch> {
        self.current.and_then(|i| self.matches.get(i).copied())
    }

    /// One-based position of the current match and the total count.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current.map(|i| (i + 1, self.matches.len()))
    }

    /// Advance to the next match, wrapping from the last to the first.
    pub fn next_match(&mut self) -> Option<SearchMatch> {
        let len = self.matches.len();
        if len == 0 {
            return None;
        }
        self.current = Some(self.current.map_or(0, |i| (i + 1) % len));
        self.current()
    }

    /// Step back to the previous match, wrapping from the first to the last.
    pub fn prev_match(&mut self) -> Option<SearchMatch> {
        let len = self.matches.len();
        if len == 0 {
            return None;
        }
        self.current = Some(self.current.map_or(len - 1, |i| (i + len - 1) % len));
        self.current()
    }

    /// Match columns on `row`, for highlighting a rendered line.
    pub fn columns_on(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        let start = self.matches.partition_point(|m| m.row < row);
        self.matches[start..]
            .iter()
            .take_while(move |m| m.row == row)
            .map(|m| m.col)
    }
}
