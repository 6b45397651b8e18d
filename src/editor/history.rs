//! Undo/redo history built from whole-document snapshots.
//!
//! Every content-changing edit pushes a [`Snapshot`] of the document as it
//! was *before* the edit. Undo swaps the live document for the newest
//! snapshot and parks the live one on the redo stack; redo does the
//! reverse. Recording a new edit discards the redo stack: redo is only ever
//! the inverse of the undo just performed, never a jump onto an abandoned
//! branch.
//!
//! Snapshots are rope clones, so holding many of them costs shared nodes
//! rather than full copies.

use std::collections::VecDeque;

use crate::document::{Document, Snapshot};

/// Undo and redo stacks for one editing session.
#[derive(Debug, Default)]
pub struct History {
    /// Oldest at the front, most recent at the back.
    undo_stack: VecDeque<Snapshot>,
    /// Most recent on top.
    redo_stack: Vec<Snapshot>,
    /// Maximum undo depth; `None` keeps everything.
    limit: Option<usize>,
}

impl History {
    /// Create an empty, unbounded history.
    pub const fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create an empty history keeping at most `limit` undo steps.
    pub const fn with_limit(limit: Option<usize>) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    /// Record the pre-edit state of a new edit.
    ///
    /// Clears the redo stack unconditionally.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.push_undo(snapshot);
        if !self.redo_stack.is_empty() {
            tracing::trace!(dropped = self.redo_stack.len(), "redo history invalidated");
            self.redo_stack.clear();
        }
    }

    /// Step back one edit.
    ///
    /// Returns the document to restore, or `None` when there is nothing to
    /// undo. `current` is kept on the redo stack.
    pub fn undo(&mut self, current: &Document) -> Option<Document> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(Snapshot::of(current));
        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "undo"
        );
        Some(previous.into_document())
    }

    /// Re-apply the most recently undone edit.
    ///
    /// Returns the document to restore, or `None` when there is nothing to
    /// redo. `current` goes back on the undo stack.
    pub fn redo(&mut self, current: &Document) -> Option<Document> {
        let next = self.redo_stack.pop()?;
        self.push_undo(Snapshot::of(current));
        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "redo"
        );
        Some(next.into_document())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }
    }
}
